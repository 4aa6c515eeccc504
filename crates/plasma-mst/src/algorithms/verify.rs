//! Inclusion and non-inclusion verification.
//!
//! Verification never raises — every function here returns a plain
//! `bool` (or a bounds struct), and every internal sum is accumulated
//! with saturating arithmetic so that a tampered or adversarial proof
//! can only make verification fail, never panic.

use plasma_merkle::{parent, Node};
use plasma_types::Transaction;
use tracing::warn;

use crate::domain::{CoinRange, InclusionBounds};

/// Walks `proof` up from the leaf at `leaf_index`, combining with the
/// transaction hash, and reports whether the result matches `root` both
/// in digest and sum, along with the implicit coin-range window the
/// leaf covers.
pub fn check_inclusion_and_get_bounds(
    leaf_index: usize,
    transaction: &Transaction,
    transfer_index: usize,
    proof: &[Node],
    root: &Node,
) -> InclusionBounds {
    let invalid = |implicit_start: u128, implicit_end: u128| InclusionBounds {
        valid: false,
        implicit_start,
        implicit_end,
    };

    if proof.is_empty() {
        warn!("inclusion check failed: empty proof");
        return invalid(0, 0);
    }

    let Some(transfer) = transaction.transfers.get(transfer_index) else {
        warn!(transfer_index, "inclusion check failed: transfer index out of range");
        return invalid(0, 0);
    };

    let tx_hash = plasma_crypto::keccak256(&plasma_codec::encode_transaction(transaction));
    let mut computed = Node::new(tx_hash, proof[0].sum);
    let mut left_sum: u128 = 0;
    let mut right_sum: u128 = 0;

    let mut position = leaf_index;
    for sibling in &proof[1..] {
        let bit = position & 1;
        position /= 2;
        let combined = if bit == 0 {
            right_sum = right_sum.saturating_add(sibling.sum);
            parent(&computed, sibling)
        } else {
            left_sum = left_sum.saturating_add(sibling.sum);
            parent(sibling, &computed)
        };
        match combined {
            Ok(node) => computed = node,
            Err(_) => {
                warn!("inclusion check failed: sum overflow while combining proof");
                return invalid(left_sum, computed.sum.saturating_sub(right_sum));
            }
        }
    }

    let implicit_start = left_sum;
    let implicit_end = computed.sum.saturating_sub(right_sum);

    let valid_root = computed.data == root.data && computed.sum == root.sum;
    let valid_sum = transfer.start.value() >= implicit_start && transfer.end.value() <= implicit_end;

    if !valid_root {
        warn!("inclusion check failed: root mismatch");
    } else if !valid_sum {
        warn!("inclusion check failed: transfer range outside implicit window");
    }

    InclusionBounds {
        valid: valid_root && valid_sum,
        implicit_start,
        implicit_end,
    }
}

/// Verifies inclusion without returning the implicit bounds.
pub fn check_inclusion(
    leaf_index: usize,
    transaction: &Transaction,
    transfer_index: usize,
    proof: &[Node],
    root: &Node,
) -> bool {
    check_inclusion_and_get_bounds(leaf_index, transaction, transfer_index, proof, root).valid
}

/// Verifies that `range` was covered by no transfer in the block: it
/// must fall within the named leaf's implicit window, yet be disjoint
/// from that leaf's own explicit transfer range.
pub fn check_non_inclusion(
    range: CoinRange,
    leaf_index: usize,
    transaction: &Transaction,
    transfer_index: usize,
    proof: &[Node],
    root: &Node,
) -> bool {
    let Some(transfer) = transaction.transfers.get(transfer_index) else {
        return false;
    };
    let bounds = check_inclusion_and_get_bounds(leaf_index, transaction, transfer_index, proof, root);
    if !bounds.valid {
        return false;
    }

    let transfer_range = CoinRange::new(transfer.start.value(), transfer.end.value());
    range.is_within(bounds.implicit_start, bounds.implicit_end) && range.is_disjoint_from(&transfer_range)
}
