//! Accepting raw bytes or `0x`-prefixed (or bare) hex as decoder input.

use plasma_types::errors::DecodeError;

/// Bytes to be decoded, either already raw or still hex-encoded.
///
/// `decode(bytes_or_hex) -> record` accepts either form; this type is
/// the seam where that choice is made explicit.
pub enum DecodeInput<'a> {
    /// Already-raw bytes.
    Bytes(&'a [u8]),
    /// A hex string, with or without a `0x` prefix.
    Hex(&'a str),
}

impl<'a> DecodeInput<'a> {
    /// Normalizes to an owned byte buffer, stripping any `0x` prefix and
    /// decoding hex if necessary.
    pub fn into_bytes(self, field: &'static str) -> Result<Vec<u8>, DecodeError> {
        match self {
            DecodeInput::Bytes(b) => Ok(b.to_vec()),
            DecodeInput::Hex(s) => {
                let stripped = s.strip_prefix("0x").unwrap_or(s);
                hex::decode(stripped).map_err(|e| DecodeError::new(field, e.to_string()))
            }
        }
    }
}

impl<'a> From<&'a [u8]> for DecodeInput<'a> {
    fn from(b: &'a [u8]) -> Self {
        DecodeInput::Bytes(b)
    }
}

impl<'a> From<&'a str> for DecodeInput<'a> {
    fn from(s: &'a str) -> Self {
        DecodeInput::Hex(s)
    }
}
