//! # Plasma Codec
//!
//! The serialization schema and base-model binding for `Transfer` and
//! `Transaction`: deterministic, fixed-layout
//! encode/decode with no separators and no length tags beyond the
//! transfer-count prefix.

#![warn(missing_docs)]

mod hex_input;
mod record;
mod schema;

pub use hex_input::DecodeInput;
pub use record::TransactionRecord;
pub use schema::{
    decode_transaction, decode_transfer, encode_transaction, encode_transfer, COUNT_WIDTH,
    TRANSFER_WIDTH,
};
