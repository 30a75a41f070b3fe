//! Raw byte-block fields: hashes, signatures, call data.

use types::Value;

use crate::error::{NormalizeError, Result};

/// Length contract of a raw byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLength {
    /// Decoded bytes must be exactly this long.
    Exact(usize),
    /// Any length, empty included.
    Unbounded,
}

/// Decodes `value` into bytes and checks them against `length`.
pub fn normalize_raw(path: &str, length: RawLength, value: &Value) -> Result<Vec<u8>> {
    let bytes = match value {
        Value::Text(text) => decode_hex(path, text)?,
        Value::Bytes(bytes) => bytes.clone(),
        other => {
            return Err(NormalizeError::UnexpectedType {
                path: path.to_string(),
                expected: "hex string or bytes",
                found: other.kind(),
            })
        }
    };

    if let RawLength::Exact(expected) = length {
        if bytes.len() != expected {
            return Err(NormalizeError::LengthMismatch {
                path: path.to_string(),
                expected,
                actual: bytes.len(),
            });
        }
    }
    Ok(bytes)
}

/// Decodes a `0x`-prefixed hex byte string. `"0x"` decodes to no bytes.
pub fn decode_hex(path: &str, text: &str) -> Result<Vec<u8>> {
    let digits = text.strip_prefix("0x").ok_or_else(|| NormalizeError::InvalidHex {
        path: path.to_string(),
        reason: "missing 0x prefix".to_string(),
    })?;
    hex::decode(digits).map_err(|e| NormalizeError::InvalidHex {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
