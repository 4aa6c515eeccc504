//! The public Plasma Merkle Sum Tree type binding leaf construction,
//! proof generation, and verification into one handle over a block of
//! transactions.

use plasma_merkle::{Node, Tree as SumTree, TreeError};
use plasma_types::Transaction;
use tracing::debug;

use crate::algorithms::{check_inclusion, check_inclusion_and_get_bounds, check_non_inclusion, get_inclusion_proof, parse_leaves};
use crate::domain::{CoinRange, InclusionBounds};

/// A Merkle sum tree built over the flattened transfers of a block.
pub struct PlasmaMerkleSumTree {
    inner: SumTree,
}

impl PlasmaMerkleSumTree {
    /// Flattens `transactions` into leaves ordered by coin range and
    /// builds the tree over them.
    pub fn new(transactions: &[Transaction]) -> Result<Self, TreeError> {
        let leaves = parse_leaves(transactions)?;
        let inner = SumTree::new(leaves)?;
        debug!(
            transactions = transactions.len(),
            depth = inner.depth(),
            "built plasma merkle sum tree"
        );
        Ok(Self { inner })
    }

    /// The root node, whose sum is the total coin space covered by the
    /// block.
    pub fn root(&self) -> Node {
        self.inner.root()
    }

    /// Number of leaves in the tree (one per transfer, after padding
    /// considerations are applied internally).
    pub fn leaf_count(&self) -> usize {
        self.inner.leaf_count()
    }

    /// Builds the inclusion proof for the leaf at `index`.
    pub fn inclusion_proof(&self, index: usize) -> Result<Vec<Node>, TreeError> {
        get_inclusion_proof(&self.inner, index)
    }
}

/// Verifies that `transaction.transfers[transfer_index]` was included
/// as the leaf at `leaf_index` under `root`, given `proof`.
pub fn verify_inclusion(
    leaf_index: usize,
    transaction: &Transaction,
    transfer_index: usize,
    proof: &[Node],
    root: &Node,
) -> bool {
    check_inclusion(leaf_index, transaction, transfer_index, proof, root)
}

/// Verifies inclusion and reports the implicit coin-range window the
/// leaf covers.
pub fn verify_inclusion_bounds(
    leaf_index: usize,
    transaction: &Transaction,
    transfer_index: usize,
    proof: &[Node],
    root: &Node,
) -> InclusionBounds {
    check_inclusion_and_get_bounds(leaf_index, transaction, transfer_index, proof, root)
}

/// Verifies that `range` was not transferred anywhere in the block, by
/// showing it falls within a leaf's implicit window but outside that
/// leaf's own transfer.
pub fn verify_non_inclusion(
    range: CoinRange,
    leaf_index: usize,
    transaction: &Transaction,
    transfer_index: usize,
    proof: &[Node],
    root: &Node,
) -> bool {
    check_non_inclusion(range, leaf_index, transaction, transfer_index, proof, root)
}
