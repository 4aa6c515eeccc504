//! Shared error types for decoding and validating Plasma domain records.

use thiserror::Error;

/// Failure to decode a fixed-layout field or record from bytes or hex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode field `{field}`: {reason}")]
pub struct DecodeError {
    /// Name of the field that failed to decode.
    pub field: &'static str,
    /// Human-readable reason for the failure.
    pub reason: String,
}

impl DecodeError {
    /// Builds a decode error for `field` with the given reason.
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// The kind of semantic validation failure for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The value is not a well-formed Ethereum address.
    InvalidAddress,
    /// The value lies outside its declared numeric range.
    OutOfRange,
    /// A range field (e.g. `start`/`end`) is not well-ordered.
    InvalidRange,
}

/// A field failed semantic validation after successfully decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` failed validation: {kind:?}")]
pub struct ValidationError {
    /// Name of the field that failed validation.
    pub field: &'static str,
    /// The kind of validation failure.
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    /// Builds a validation error for `field` of the given kind.
    pub fn new(field: &'static str, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }
}
