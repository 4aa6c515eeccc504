//! # Plasma Types
//!
//! Core domain entities for the Plasma Merkle Sum Tree: addresses,
//! fixed-width integers, the coin-ID constants, and the `Transfer` /
//! `Transaction` records. The single source of truth for these types —
//! every other crate in this workspace depends on this one rather than
//! redefining them.

#![warn(missing_docs)]

mod address;
mod constants;
pub mod errors;
mod transaction;
mod transfer;
mod uint;

pub use address::Address;
pub use constants::{
    ADDRESS_WIDTH, DIGEST_WIDTH, MAX_COIN_ID, MIN_COIN_ID, UINT12_WIDTH, UINT16_WIDTH, UINT4_WIDTH,
};
pub use transaction::Transaction;
pub use transfer::Transfer;
pub use uint::UInt;
