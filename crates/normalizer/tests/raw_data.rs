use normalizer::{normalize_raw, NormalizeError, RawLength, Value};

#[test]
fn test_exact_length_returns_bytes_unchanged() {
    println!("=== Testing Raw Data: Exact Length ===");
    let bytes: Vec<u8> = (0..32).collect();
    let hex_text = Value::from(format!("0x{}", hex::encode(&bytes)));
    let from_hex = normalize_raw("h", RawLength::Exact(32), &hex_text).unwrap();
    let from_buf = normalize_raw("h", RawLength::Exact(32), &Value::from(bytes.clone())).unwrap();
    assert_eq!(from_hex, bytes);
    assert_eq!(from_buf, bytes);
    println!("✓ 32-byte hash accepted as hex and as buffer");
}

#[test]
fn test_wrong_length_is_mismatch() {
    println!("=== Testing Raw Data: Length Mismatch ===");
    for len in [0usize, 31, 33, 64] {
        let input = Value::from(vec![0u8; len]);
        let err = normalize_raw("req.owner_lock_hash", RawLength::Exact(32), &input).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::LengthMismatch {
                path: "req.owner_lock_hash".into(),
                expected: 32,
                actual: len,
            }
        );
    }
    println!("✓ Every wrong length rejected");
}

#[test]
fn test_unbounded_accepts_any_length() {
    for len in [0usize, 1, 65, 1024] {
        let input = Value::from(vec![7u8; len]);
        let out = normalize_raw("tx.args", RawLength::Unbounded, &input).unwrap();
        assert_eq!(out.len(), len);
    }
    let out = normalize_raw("tx.args", RawLength::Unbounded, &Value::from("0x")).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_hex_text_must_be_prefixed() {
    let err = normalize_raw("sig", RawLength::Unbounded, &Value::from("abab")).unwrap_err();
    assert!(matches!(err, NormalizeError::InvalidHex { ref path, .. } if path == "sig"));
}
