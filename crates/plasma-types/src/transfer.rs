//! A single coin-range transfer within a transaction.

use crate::address::Address;
use crate::constants::{MAX_COIN_ID, MIN_COIN_ID};
use crate::errors::{ValidationError, ValidationErrorKind};
use crate::uint::UInt;

/// An assertion that coin IDs `[start, end)` moved from `sender` to
/// `recipient`, on `token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// Sender of the coin range.
    pub sender: Address,
    /// Recipient of the coin range.
    pub recipient: Address,
    /// Token/asset identifier.
    pub token: UInt<4>,
    /// Inclusive lower bound of the coin range.
    pub start: UInt<12>,
    /// Exclusive upper bound of the coin range.
    pub end: UInt<12>,
}

impl Transfer {
    /// Builds a transfer, enforcing `start < end` and both bounds lying
    /// within `[MIN_COIN_ID, MAX_COIN_ID]`.
    pub fn new(
        sender: Address,
        recipient: Address,
        token: UInt<4>,
        start: UInt<12>,
        end: UInt<12>,
    ) -> Result<Self, ValidationError> {
        let transfer = Self {
            sender,
            recipient,
            token,
            start,
            end,
        };
        transfer.validate()?;
        Ok(transfer)
    }

    /// Checks the `start < end` and coin-space-bound invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start.value() >= self.end.value() {
            return Err(ValidationError::new("start", ValidationErrorKind::InvalidRange));
        }
        if self.start.value() < MIN_COIN_ID || self.end.value() > MAX_COIN_ID {
            return Err(ValidationError::new("start", ValidationErrorKind::OutOfRange));
        }
        Ok(())
    }

    /// Returns `true` if `[self.start, self.end)` overlaps `[other.start, other.end)`.
    pub fn overlaps(&self, other: &Transfer) -> bool {
        self.start.value() < other.end.value() && other.start.value() < self.end.value()
    }
}
