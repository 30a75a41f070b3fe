//! Reference Script encoder.
//!
//! Deposit lock args embed a layer-2 lock script. Callers may bring their own
//! encoder for it; this one produces `{code_hash, hash_type, args}` with a
//! one-byte `hash_type`.

use types::{FieldMap, Normalized, ScriptHashType, Value};

use crate::error::{NormalizeError, Result};
use crate::object::{Field, Normalize, Schema};

pub const SCRIPT_DEBUG_PATH: &str = "script";

/// Encodes `{code_hash: Hash, hash_type, args: bytes}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptNormalizer;

impl ScriptNormalizer {
    pub fn schema(&self) -> Schema<'static> {
        Schema::new(
            SCRIPT_DEBUG_PATH,
            vec![
                Field::fixed_bytes("code_hash", 32),
                Field::nested("hash_type", HashTypeNormalizer),
                Field::bytes("args"),
            ],
        )
    }
}

impl Normalize for ScriptNormalizer {
    fn normalize(&self, path: &str, value: &Value) -> Result<Normalized> {
        self.schema().normalize(path, value)
    }
}

/// Normalizes a standalone script under the `script` path.
pub fn normalize_script(script: &Value) -> Result<FieldMap> {
    ScriptNormalizer.schema().normalize_input(script)
}

/// Accepts a hash type name (`"data"`, `"type"`, `"data1"`, `"data2"`), its
/// numeric code, or a single pre-encoded byte.
#[derive(Debug, Clone, Copy)]
struct HashTypeNormalizer;

impl Normalize for HashTypeNormalizer {
    fn normalize(&self, path: &str, value: &Value) -> Result<Normalized> {
        let hash_type = match value {
            Value::Text(name) => ScriptHashType::from_name(name),
            Value::Number(n) => u8::try_from(*n).ok().and_then(ScriptHashType::from_u8),
            Value::Bytes(bytes) if bytes.len() == 1 => ScriptHashType::from_u8(bytes[0]),
            Value::Bytes(bytes) => {
                return Err(NormalizeError::LengthMismatch {
                    path: path.to_string(),
                    expected: 1,
                    actual: bytes.len(),
                })
            }
            other => {
                return Err(NormalizeError::UnexpectedType {
                    path: path.to_string(),
                    expected: "hash type",
                    found: other.kind(),
                })
            }
        };
        let hash_type = hash_type.ok_or_else(|| NormalizeError::InvalidHashType {
            path: path.to_string(),
            value: describe(value),
        })?;
        Ok(Normalized::Bytes(vec![hash_type as u8]))
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Text(text) => text.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        other => other.kind().to_string(),
    }
}
