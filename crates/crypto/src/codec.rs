//! Fixed-width integer and text codecs shared by every entity.
//!
//! Scalars and coordinates are unsigned big integers that always occupy the
//! same number of bytes on the wire: big-endian, left padded with zeros.
//! Checking the length of a whole entity belongs to the entity itself.

use base64::{engine::general_purpose::STANDARD, Engine};
use num_bigint::BigUint;

use crate::error::{KeyError, KeyResult};

/// Encodes `value` as exactly `width` big-endian bytes.
///
/// Fails with [`KeyError::LengthMismatch`] when `value` needs more than
/// `width` bytes; nothing is ever truncated.
pub fn encode(value: &BigUint, width: usize) -> KeyResult<Vec<u8>> {
    let mut out = vec![0u8; width];
    encode_into(value, &mut out)?;
    Ok(out)
}

/// Encodes `value` into a caller supplied fixed-width slot.
pub fn encode_into(value: &BigUint, out: &mut [u8]) -> KeyResult<()> {
    let width = out.len();
    if value.bits() > (width as u64) * 8 {
        return Err(KeyError::length(
            "integer",
            width,
            ((value.bits() + 7) / 8) as usize,
        ));
    }
    let raw = value.to_bytes_be();
    out.fill(0);
    // Zero encodes as a single 0x00 byte, which fits any non-empty slot.
    let start = width.saturating_sub(raw.len());
    out[start..].copy_from_slice(&raw[raw.len() - (width - start)..]);
    Ok(())
}

/// Interprets `bytes` as a big-endian unsigned integer of any size.
pub fn decode(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Standard base64 with padding and no line wraps.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn from_base64(text: &str) -> KeyResult<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| KeyError::Decode(format!("invalid base64: {e}")))
}

/// Checks that `bytes` is exactly `expected` long.
pub(crate) fn expect_len(entity: &'static str, bytes: &[u8], expected: usize) -> KeyResult<()> {
    if bytes.len() != expected {
        return Err(KeyError::length(entity, expected, bytes.len()));
    }
    Ok(())
}
