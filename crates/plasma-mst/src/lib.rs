//! # Plasma Merkle Sum Tree
//!
//! Builds an authenticated sum tree over the transfers of a Plasma
//! block and answers inclusion and non-inclusion queries against a
//! published root.
//!
//! ## Module structure
//!
//! ```text
//! plasma-mst/
//! ├── domain/      # CoinRange, InclusionBounds
//! ├── algorithms/  # leaf construction, proof generation, verification
//! └── tree.rs       # PlasmaMerkleSumTree and the free verify_* functions
//! ```

#![warn(missing_docs)]

pub mod algorithms;
pub mod domain;
mod tree;

pub use domain::{CoinRange, InclusionBounds};
pub use plasma_merkle::{Node, TreeError};
pub use tree::{verify_inclusion, verify_inclusion_bounds, verify_non_inclusion, PlasmaMerkleSumTree};
