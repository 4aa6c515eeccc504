//! A Merkle sum tree node: a 32-byte digest paired with a sum.

use plasma_crypto::keccak256_concat;
use plasma_types::errors::DecodeError;

use crate::errors::TreeError;

/// A Merkle sum tree node: `(data, sum)`.
///
/// Serialized form is `data || big_endian(sum, 16)`, 48 bytes total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Node {
    /// 32-byte digest.
    pub data: [u8; 32],
    /// Sum carried by this node (and everything beneath it).
    pub sum: u128,
}

/// Byte width of a serialized `Node`.
pub const NODE_WIDTH: usize = 48;

impl Node {
    /// Builds a node directly from its parts.
    pub const fn new(data: [u8; 32], sum: u128) -> Self {
        Self { data, sum }
    }

    /// The empty leaf used to pad odd-sized levels: `(0x00...00, 0)`.
    pub const fn empty_leaf() -> Self {
        Self {
            data: [0u8; 32],
            sum: 0,
        }
    }

    /// Serializes to the 48-byte wire form `data || be16(sum)`.
    pub fn to_bytes(&self) -> [u8; NODE_WIDTH] {
        let mut out = [0u8; NODE_WIDTH];
        out[..32].copy_from_slice(&self.data);
        out[32..].copy_from_slice(&self.sum.to_be_bytes());
        out
    }

    /// Parses a 48-byte wire form back into a node.
    pub fn from_bytes(bytes: &[u8; NODE_WIDTH]) -> Self {
        let mut data = [0u8; 32];
        data.copy_from_slice(&bytes[..32]);
        let mut sum_bytes = [0u8; 16];
        sum_bytes.copy_from_slice(&bytes[32..]);
        Self {
            data,
            sum: u128::from_be_bytes(sum_bytes),
        }
    }

    /// Serializes to a 96-character hex string (no `0x` prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parses a 96-character hex string (with or without `0x` prefix):
    /// the first 64 hex characters are the digest, the last 32 are the
    /// big-endian sum.
    pub fn from_hex(s: &str) -> Result<Self, DecodeError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        if stripped.len() != NODE_WIDTH * 2 {
            return Err(DecodeError::new(
                "node",
                format!("expected {} hex chars, got {}", NODE_WIDTH * 2, stripped.len()),
            ));
        }
        let bytes = hex::decode(stripped).map_err(|e| DecodeError::new("node", e.to_string()))?;
        let mut arr = [0u8; NODE_WIDTH];
        arr.copy_from_slice(&bytes);
        Ok(Self::from_bytes(&arr))
    }
}

/// Combines two sibling nodes into their parent.
///
/// `data = keccak256(l.data || be16(l.sum) || r.data || be16(r.sum))`,
/// `sum = l.sum + r.sum`, checked — overflow beyond `u128` is a
/// [`TreeError::SumOverflow`].
pub fn parent(left: &Node, right: &Node) -> Result<Node, TreeError> {
    let sum = left
        .sum
        .checked_add(right.sum)
        .ok_or(TreeError::SumOverflow {
            left: left.sum,
            right: right.sum,
        })?;
    let left_bytes = left.to_bytes();
    let right_bytes = right.to_bytes();
    let data = keccak256_concat(&[&left_bytes, &right_bytes]);
    Ok(Node::new(data, sum))
}
