//! Leaf construction: flattening transactions into per-transfer leaves
//! and assigning sums from implicit coin-range boundaries.

use plasma_crypto::keccak256;
use plasma_merkle::{Node, TreeError};
use plasma_types::{Transaction, MAX_COIN_ID, MIN_COIN_ID};
use tracing::debug;

struct FlatTransfer {
    start: u128,
    end: u128,
    encoded_tx: Vec<u8>,
}

/// Flattens `transactions` into one leaf per transfer, ordered by
/// `start`, and assigns each leaf a sum derived from the implicit
/// boundary with its neighbors.
///
/// Multiple transfers in the same transaction each produce their own
/// leaf, all hashing the same encoded transaction bytes — this is how
/// the sum tree witnesses multi-transfer atomicity.
pub fn parse_leaves(transactions: &[Transaction]) -> Result<Vec<Node>, TreeError> {
    let mut flattened: Vec<FlatTransfer> = Vec::new();
    for tx in transactions {
        let encoded_tx = plasma_codec::encode_transaction(tx);
        for transfer in &tx.transfers {
            flattened.push(FlatTransfer {
                start: transfer.start.value(),
                end: transfer.end.value(),
                encoded_tx: encoded_tx.clone(),
            });
        }
    }

    if flattened.is_empty() {
        return Err(TreeError::EmptyTree);
    }

    // Stable sort: transfers within one transaction (and across
    // transactions with equal starts) keep their relative order.
    flattened.sort_by_key(|entry| entry.start);

    for i in 0..flattened.len() - 1 {
        if flattened[i].end > flattened[i + 1].start {
            return Err(TreeError::OverlappingRanges { index: i + 1 });
        }
    }

    let n = flattened.len();
    let mut leaves = Vec::with_capacity(n);
    for (i, entry) in flattened.iter().enumerate() {
        let sum = if n == 1 {
            MAX_COIN_ID
        } else if i == 0 {
            flattened[1].start - MIN_COIN_ID
        } else if i == n - 1 {
            MAX_COIN_ID - flattened[n - 1].start
        } else {
            flattened[i + 1].start - flattened[i].start
        };
        let data = keccak256(&entry.encoded_tx);
        leaves.push(Node::new(data, sum));
    }

    debug!(leaf_count = n, "parsed Plasma Merkle Sum Tree leaves");
    Ok(leaves)
}
