//! Fixed-width little-endian integer fields.
//!
//! Scalars (native numbers and integer text) are first reduced to their
//! minimal little-endian bytes; pre-encoded buffers are taken as already
//! little-endian. Both then go through [`zero_extend`], so there is a single
//! widening rule: pad with zero bytes at the high-order (tail) end, and
//! reject anything wider than the field.

use types::Value;

use crate::error::{NormalizeError, Result};

/// Encodes `value` as a little-endian integer exactly `width` bytes long.
pub fn normalize_int(path: &str, width: usize, value: &Value) -> Result<Vec<u8>> {
    let le = match value {
        Value::Number(n) => minimal_le(&n.to_le_bytes()),
        Value::Text(text) => parse_int_text(path, text)?,
        Value::Bytes(bytes) => bytes.clone(),
        other => {
            return Err(NormalizeError::UnexpectedType {
                path: path.to_string(),
                expected: "integer",
                found: other.kind(),
            })
        }
    };
    zero_extend(path, width, le)
}

/// Pads little-endian `bytes` with trailing zeros up to `width`.
///
/// A buffer already longer than `width` is an overflow, whether it came
/// from a scalar or was handed in pre-encoded.
pub fn zero_extend(path: &str, width: usize, mut bytes: Vec<u8>) -> Result<Vec<u8>> {
    if bytes.len() > width {
        return Err(NormalizeError::IntegerOverflow {
            path: path.to_string(),
            required: bytes.len(),
            available: width,
        });
    }
    bytes.resize(width, 0);
    Ok(bytes)
}

/// Parses decimal or `0x`/`0o`/`0b` prefixed integer text of any magnitude
/// into its minimal little-endian bytes.
///
/// Empty or whitespace-only text is rejected as `InvalidNumber` rather than
/// read as zero, so a blank field never encodes silently as `0`.
pub fn parse_int_text(path: &str, text: &str) -> Result<Vec<u8>> {
    let invalid = || NormalizeError::InvalidNumber {
        path: path.to_string(),
        value: text.to_string(),
    };

    let trimmed = text.trim();
    let (digits, radix) = match trimmed.get(..2) {
        Some("0x") | Some("0X") => (&trimmed[2..], 16),
        Some("0o") | Some("0O") => (&trimmed[2..], 8),
        Some("0b") | Some("0B") => (&trimmed[2..], 2),
        _ => (trimmed, 10),
    };
    if digits.is_empty() {
        return Err(invalid());
    }

    // little-endian accumulator, multiply-add one digit at a time
    let mut le: Vec<u8> = vec![0];
    for c in digits.chars() {
        let mut carry = c.to_digit(radix).ok_or_else(invalid)?;
        for byte in le.iter_mut() {
            let acc = u32::from(*byte) * radix + carry;
            *byte = acc as u8;
            carry = acc >> 8;
        }
        while carry > 0 {
            le.push(carry as u8);
            carry >>= 8;
        }
    }
    Ok(minimal_le(&le))
}

/// Drops high-order zero bytes, keeping at least one byte so zero encodes as `00`.
fn minimal_le(le: &[u8]) -> Vec<u8> {
    let len = le.iter().rposition(|b| *b != 0).map_or(1, |i| i + 1);
    le[..len.min(le.len())].to_vec()
}
