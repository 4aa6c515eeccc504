//! # Plasma
//!
//! A client library for a Plasma-style layer-two scaling protocol:
//! transfer/transaction encoding, a Merkle sum tree authenticating
//! blocks of transfers, and inclusion/non-inclusion verification
//! against a published root.
//!
//! ## Module structure
//!
//! ```text
//! plasma/
//! ├── plasma-types   # Address, UInt<N>, Transfer, Transaction
//! ├── plasma-crypto  # keccak256
//! ├── plasma-codec   # fixed-width encode/decode, TransactionRecord
//! ├── plasma-merkle  # generic Merkle sum tree (Node, Tree, parent)
//! └── plasma-mst     # Plasma-specific leaf construction and verification
//! ```

#![warn(missing_docs)]

pub use plasma_codec::{
    decode_transaction, decode_transfer, encode_transaction, encode_transfer, DecodeInput,
    TransactionRecord, COUNT_WIDTH, TRANSFER_WIDTH,
};
pub use plasma_crypto::{keccak256, keccak256_concat, Hash};
pub use plasma_merkle::{parent, Node, Tree, TreeError, NODE_WIDTH};
pub use plasma_mst::{
    verify_inclusion, verify_inclusion_bounds, verify_non_inclusion, CoinRange, InclusionBounds,
    PlasmaMerkleSumTree,
};
pub use plasma_types::{
    Address, Transaction, Transfer, UInt, ADDRESS_WIDTH, DIGEST_WIDTH, MAX_COIN_ID, MIN_COIN_ID,
    UINT12_WIDTH, UINT16_WIDTH, UINT4_WIDTH,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
