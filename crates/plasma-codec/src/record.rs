//! A schema bound to one instance,
//! exposing `encoded`, `decoded`, and `hash`.

use plasma_crypto::{keccak256, Hash};
use plasma_types::errors::DecodeError;
use plasma_types::Transaction;

use crate::hex_input::DecodeInput;
use crate::schema::{decode_transaction, encode_transaction};

/// A `Transaction` bound to its canonical encoding and hash.
///
/// Construction normalizes whatever input it's given — an already-decoded
/// `Transaction`, a raw byte buffer, or a hex string — to the same three
/// views, so callers never have to re-derive `encoded`/`hash` by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    decoded: Transaction,
    encoded: Vec<u8>,
    hash: Hash,
}

impl TransactionRecord {
    /// Binds an already-decoded transaction to its encoding and hash.
    pub fn from_decoded(decoded: Transaction) -> Self {
        let encoded = encode_transaction(&decoded);
        let hash = keccak256(&encoded);
        Self {
            decoded,
            encoded,
            hash,
        }
    }

    /// Decodes from raw bytes or hex (with or without `0x`) and binds.
    pub fn from_input<'a>(input: impl Into<DecodeInput<'a>>) -> Result<Self, DecodeError> {
        let decoded = decode_transaction(input)?;
        Ok(Self::from_decoded(decoded))
    }

    /// The normalized, decoded transaction.
    pub fn decoded(&self) -> &Transaction {
        &self.decoded
    }

    /// The canonical encoded byte string.
    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    /// `keccak256(encoded)`.
    pub fn hash(&self) -> Hash {
        self.hash
    }
}
