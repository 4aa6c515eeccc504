//! Fixed-layout encode/decode for `Transfer` and `Transaction`.
//!
//! No separators, no length tags except the transfer count, which is
//! itself a `UInt_4` prefix.

use plasma_types::errors::{DecodeError, ValidationError};
use plasma_types::{Address, Transaction, Transfer, UInt};

use crate::hex_input::DecodeInput;

/// Byte width of one encoded `Transfer` (sender + recipient + token + start + end).
pub const TRANSFER_WIDTH: usize = Address::WIDTH * 2 + 4 + 12 + 12;

/// Byte width of the transfer-count length prefix on an encoded `Transaction`.
pub const COUNT_WIDTH: usize = 4;

/// Encodes a `Transfer` to its canonical 68-byte wire form.
pub fn encode_transfer(transfer: &Transfer) -> Vec<u8> {
    let mut out = Vec::with_capacity(TRANSFER_WIDTH);
    out.extend_from_slice(transfer.sender.as_bytes());
    out.extend_from_slice(transfer.recipient.as_bytes());
    out.extend_from_slice(&transfer.token.encode());
    out.extend_from_slice(&transfer.start.encode());
    out.extend_from_slice(&transfer.end.encode());
    out
}

/// Decodes exactly [`TRANSFER_WIDTH`] bytes into a validated `Transfer`.
pub fn decode_transfer(bytes: &[u8]) -> Result<Transfer, DecodeError> {
    if bytes.len() != TRANSFER_WIDTH {
        return Err(DecodeError::new(
            "transfer",
            format!("expected {TRANSFER_WIDTH} bytes, got {}", bytes.len()),
        ));
    }
    let mut offset = 0;
    let mut take = |n: usize| {
        let slice = &bytes[offset..offset + n];
        offset += n;
        slice
    };

    let sender = Address::from_slice(take(Address::WIDTH))
        .ok_or_else(|| DecodeError::new("sender", "not 20 bytes"))?;
    let recipient = Address::from_slice(take(Address::WIDTH))
        .ok_or_else(|| DecodeError::new("recipient", "not 20 bytes"))?;
    let token = UInt::<4>::decode("token", take(4))?;
    let start = UInt::<12>::decode("start", take(12))?;
    let end = UInt::<12>::decode("end", take(12))?;

    Transfer::new(sender, recipient, token, start, end)
        .map_err(|e: ValidationError| DecodeError::new("transfer", format!("{e:?}")))
}

/// Encodes a `Transaction`: `block || count || transfer_0 || transfer_1 || ...`.
pub fn encode_transaction(tx: &Transaction) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + COUNT_WIDTH + tx.transfers.len() * TRANSFER_WIDTH);
    out.extend_from_slice(&tx.block.encode());
    let count = UInt::<4>::new(tx.transfers.len() as u128)
        .expect("transfer count fits in a 4-byte field");
    out.extend_from_slice(&count.encode());
    for transfer in &tx.transfers {
        out.extend_from_slice(&encode_transfer(transfer));
    }
    out
}

/// Decodes a `Transaction` from raw bytes or hex (with or without `0x`).
pub fn decode_transaction<'a>(input: impl Into<DecodeInput<'a>>) -> Result<Transaction, DecodeError> {
    let bytes = input.into().into_bytes("transaction")?;
    if bytes.len() < 4 + COUNT_WIDTH {
        return Err(DecodeError::new("transaction", "input shorter than header"));
    }
    let block = UInt::<4>::decode("block", &bytes[0..4])?;
    let count = UInt::<4>::decode("transfer_count", &bytes[4..8])?.value() as usize;

    let expected_len = 8 + count * TRANSFER_WIDTH;
    if bytes.len() != expected_len {
        return Err(DecodeError::new(
            "transaction",
            format!("expected {expected_len} bytes for {count} transfers, got {}", bytes.len()),
        ));
    }

    let mut transfers = Vec::with_capacity(count);
    for i in 0..count {
        let start = 8 + i * TRANSFER_WIDTH;
        let end = start + TRANSFER_WIDTH;
        transfers.push(decode_transfer(&bytes[start..end])?);
    }

    Ok(Transaction::new(block, transfers))
}
