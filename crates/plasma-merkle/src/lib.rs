//! # Plasma Merkle
//!
//! The generic Merkle sum tree: a balanced binary tree
//! built bottom-up from a leaf vector, combining siblings by
//! concatenating their serializations, hashing, and summing.
//!
//! This crate knows nothing about transactions or coin ranges — that
//! specialization lives in `plasma-mst`.

#![warn(missing_docs)]

pub mod errors;
mod node;
mod tree;

pub use errors::TreeError;
pub use node::{parent, Node, NODE_WIDTH};
pub use tree::Tree;
