//! Fixed-width, big-endian unsigned integers (`UInt_n` in spec terms).

use crate::errors::DecodeError;
use serde::{Deserialize, Serialize};

/// A non-negative integer that fits in exactly `N` big-endian bytes.
///
/// Backed by a `u128` for simplicity; `N` is restricted to `1..=16` since
/// that is the widest field this protocol ever serializes as a single
/// integer (16-byte Merkle sums). Wider fixed-byte values (addresses,
/// digests) are modeled as their own types rather than `UInt<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt<const N: usize>(u128);

impl<const N: usize> UInt<N> {
    /// The declared byte width of this integer type.
    pub const WIDTH: usize = N;

    /// Wraps `value`, failing if it does not fit in `N` bytes.
    pub const fn new(value: u128) -> Option<Self> {
        assert!(N > 0 && N <= 16, "UInt<N> only supports widths of 1..=16 bytes");
        if N == 16 || value < (1u128 << (N as u32 * 8)) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The underlying numeric value.
    pub const fn value(&self) -> u128 {
        self.0
    }

    /// Encodes as `N` big-endian bytes.
    pub fn encode(&self) -> Vec<u8> {
        let full = self.0.to_be_bytes();
        full[16 - N..].to_vec()
    }

    /// Decodes exactly `N` big-endian bytes into a value.
    pub fn decode(field: &'static str, bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != N {
            return Err(DecodeError::new(
                field,
                format!("expected {} bytes, got {}", N, bytes.len()),
            ));
        }
        let mut buf = [0u8; 16];
        buf[16 - N..].copy_from_slice(bytes);
        Ok(Self(u128::from_be_bytes(buf)))
    }
}

impl<const N: usize> Serialize for UInt<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de, const N: usize> Deserialize<'de> for UInt<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let value: u128 = s.parse().map_err(serde::de::Error::custom)?;
        UInt::<N>::new(value)
            .ok_or_else(|| serde::de::Error::custom(format!("value {value} does not fit UInt<{N}>")))
    }
}
