//! Domain types for the Plasma Merkle Sum Tree specialization.

mod entities;

pub use entities::{CoinRange, InclusionBounds};
