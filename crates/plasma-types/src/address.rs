//! Ethereum-style 20-byte addresses.

use crate::errors::{ValidationError, ValidationErrorKind};
use plasma_crypto::keccak256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A 20-byte Ethereum-style address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// The zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Byte width of a serialized address.
    pub const WIDTH: usize = 20;

    /// Wraps a raw 20-byte array.
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Builds an address from a slice, failing if it isn't 20 bytes long.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != 20 {
            return None;
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(slice);
        Some(Self(bytes))
    }

    /// Raw 20-byte form.
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Parses a `0x`-prefixed or bare hex string.
    ///
    /// Accepts all-lowercase, all-uppercase, or a correctly EIP-55
    /// checksummed mixed-case string; rejects a mixed-case string whose
    /// casing does not match its checksum.
    pub fn from_hex(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::new("address", ValidationErrorKind::InvalidAddress);

        let stripped = s.strip_prefix("0x").unwrap_or(s);
        if stripped.len() != 40 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let is_all_lower = stripped.chars().all(|c| !c.is_ascii_uppercase());
        let is_all_upper = stripped.chars().all(|c| !c.is_ascii_lowercase());
        if !is_all_lower && !is_all_upper {
            let lower = stripped.to_ascii_lowercase();
            let expected = checksum_string(&lower);
            if expected != stripped {
                return Err(invalid());
            }
        }

        let bytes = hex::decode(stripped.to_ascii_lowercase()).map_err(|_| invalid())?;
        Self::from_slice(&bytes).ok_or_else(invalid)
    }

    /// Canonical lowercase `0x`-prefixed hex string.
    pub fn to_hex_lower(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// EIP-55 mixed-case checksum string.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        format!("0x{}", checksum_string(&lower))
    }
}

/// Applies the EIP-55 checksum casing rule to a lowercase hex string
/// (without `0x` prefix): uppercase a hex digit if the corresponding
/// nibble of `keccak256(lower_hex_ascii)` is >= 8.
fn checksum_string(lower_hex: &str) -> String {
    let hash = keccak256(lower_hex.as_bytes());
    lower_hex
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if c.is_ascii_digit() {
                return c;
            }
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

impl std::str::FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_lower())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(de::Error::custom)
    }
}
