//! A transaction: a block number and the transfers it bundles together.

use crate::transfer::Transfer;
use crate::uint::UInt;

/// A set of transfers bundled under one block number.
///
/// Serialization (the canonical `encoded` byte string and its `hash`)
/// lives in `plasma-codec`, which is the only crate that knows the wire
/// layout; this type is plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Block number this transaction belongs to.
    pub block: UInt<4>,
    /// Transfers bundled in this transaction, in declared order.
    pub transfers: Vec<Transfer>,
}

impl Transaction {
    /// Builds a transaction from a block number and its transfers.
    ///
    /// Does not itself re-validate each transfer — callers are expected
    /// to have built `Transfer`s through `Transfer::new`.
    pub fn new(block: UInt<4>, transfers: Vec<Transfer>) -> Self {
        Self { block, transfers }
    }
}
