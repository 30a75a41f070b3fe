//! Bridge between `serde_json` documents and the normalizer's value model.

use serde_json::{Map, Value as Json};
use types::{FieldMap, Normalized, Object, Value};

use crate::error::{NormalizeError, Result};

/// Root label used in error paths for JSON input.
pub const JSON_ROOT: &str = "$";

/// Converts a JSON document into a [`Value`].
///
/// Strings stay text, non-negative integers become numbers, arrays of
/// integers `0..=255` become byte buffers. Integers wider than `u64` must be
/// passed as strings.
pub fn value_from_json(json: &Json) -> Result<Value> {
    convert(JSON_ROOT, json)
}

fn convert(path: &str, json: &Json) -> Result<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::String(s) => Ok(Value::Text(s.clone())),
        Json::Number(n) => n
            .as_u64()
            .map(|v| Value::Number(v.into()))
            .ok_or_else(|| NormalizeError::InvalidNumber {
                path: path.to_string(),
                value: n.to_string(),
            }),
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_u64()
                    .and_then(|b| u8::try_from(b).ok())
                    .ok_or_else(|| NormalizeError::UnexpectedType {
                        path: format!("{path}[{i}]"),
                        expected: "byte",
                        found: json_kind(item),
                    })
            })
            .collect::<Result<Vec<u8>>>()
            .map(Value::Bytes),
        Json::Object(map) => {
            let mut obj = Object::new();
            for (key, item) in map {
                obj.insert(key.as_str(), convert(&format!("{path}.{key}"), item)?);
            }
            Ok(Value::Object(obj))
        }
        Json::Bool(_) => Err(NormalizeError::UnexpectedType {
            path: path.to_string(),
            expected: "null, number, string, byte array or object",
            found: "bool",
        }),
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Renders a normalized map as JSON, leaves as `0x`-prefixed hex, in field order.
pub fn field_map_to_json(map: &FieldMap) -> Json {
    let mut out = Map::with_capacity(map.len());
    for (name, value) in map.iter() {
        let rendered = match value {
            Normalized::Bytes(bytes) => Json::String(format!("0x{}", hex::encode(bytes))),
            Normalized::Table(nested) => field_map_to_json(nested),
        };
        out.insert(name.to_string(), rendered);
    }
    Json::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_nested_documents() {
        let value = value_from_json(&json!({
            "raw": { "nonce": 3, "args": [1, 2, 255] },
            "signature": "0x00",
            "skip": null,
        }))
        .unwrap();
        let obj = value.as_object().unwrap();
        let raw = obj.get("raw").and_then(Value::as_object).unwrap();
        assert_eq!(raw.get("nonce"), Some(&Value::Number(3)));
        assert_eq!(raw.get("args"), Some(&Value::Bytes(vec![1, 2, 255])));
        assert_eq!(obj.get("skip"), Some(&Value::Null));
    }

    #[test]
    fn rejects_negative_and_fractional_numbers() {
        for doc in [json!({ "a": -1 }), json!({ "a": 1.5 })] {
            let err = value_from_json(&doc).unwrap_err();
            assert!(matches!(err, NormalizeError::InvalidNumber { ref path, .. } if path == "$.a"));
        }
    }

    #[test]
    fn rejects_non_byte_arrays() {
        let err = value_from_json(&json!({ "a": [1, 256] })).unwrap_err();
        assert_eq!(err.path(), "$.a[1]");
        let err = value_from_json(&json!({ "a": true })).unwrap_err();
        assert!(matches!(err, NormalizeError::UnexpectedType { found: "bool", .. }));
    }
}
