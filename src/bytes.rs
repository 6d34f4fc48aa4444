//! Fixed-width encoding of signed integers, e.g. participant indices used as
//! storage keys.

use crate::error::{Result, VssError};

/// Encodes `num` as 8 big-endian bytes of its two's-complement bit pattern.
pub fn int_to_bytes(num: i64) -> [u8; 8] {
    (num as u64).to_be_bytes()
}

/// Inverse of [`int_to_bytes`].
pub fn bytes_to_int(bytes: [u8; 8]) -> i64 {
    u64::from_be_bytes(bytes) as i64
}

/// Like [`bytes_to_int`], for slices of unchecked length.
pub fn bytes_to_int_slice(bytes: &[u8]) -> Result<i64> {
    let bytes: [u8; 8] = bytes.try_into().map_err(|_| {
        VssError::InvalidInput(format!("expected 8 bytes, got {}", bytes.len()))
    })?;
    Ok(bytes_to_int(bytes))
}
