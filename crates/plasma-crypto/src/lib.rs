//! # Plasma Crypto
//!
//! Keccak-256 hashing primitives shared by the Plasma Merkle Sum Tree
//! crates. No signatures, no symmetric encryption — this crate carries
//! only the one hash function the wire format depends on bit-exactly.

#![warn(missing_docs)]

mod hashing;

pub use hashing::{keccak256, keccak256_concat, Hash};
