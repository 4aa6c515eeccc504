//! Construction-time errors for the generic Merkle sum tree.

use thiserror::Error;

/// Errors that can occur while building or walking a Merkle sum tree.
///
/// Construction errors; verification never raises these — a verifier
/// returns `false` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Attempted to build a tree from zero leaves.
    #[error("cannot build a Merkle sum tree with zero leaves")]
    EmptyTree,

    /// Two leaves' coin ranges overlapped during leaf-sum assignment.
    #[error("overlapping coin ranges at flattened index {index}")]
    OverlappingRanges {
        /// Index (in flattened, sorted order) of the offending entry.
        index: usize,
    },

    /// A parent's sum would exceed the 128-bit (`UInt_16`) sum capacity.
    #[error("sum overflow combining children with sums {left} and {right}")]
    SumOverflow {
        /// Left child's sum.
        left: u128,
        /// Right child's sum.
        right: u128,
    },

    /// A proof or leaf was requested at an index outside the tree.
    #[error("index {index} out of range for {len} leaves")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of leaves in the tree.
        len: usize,
    },
}
