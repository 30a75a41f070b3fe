use normalizer::{
    field_map_to_json, normalize_l2_transaction, normalize_withdrawal_request, value_from_json,
    NormalizeError,
};
use serde_json::json;

fn h(byte: u8) -> String {
    format!("0x{}", hex::encode([byte; 32]))
}

#[test]
fn test_withdrawal_request_from_json() {
    println!("=== Testing JSON: WithdrawalRequest ===");
    let doc = json!({
        "raw": {
            "nonce": "0x2",
            "capacity": "10000000000",
            "amount": 0,
            "sudt_script_hash": h(0x11),
            "account_script_hash": h(0x22),
            "sell_amount": "0x0",
            "sell_capacity": "0x0",
            "owner_lock_hash": h(0x33),
            "payment_lock_hash": h(0x44),
            "fee": { "sudt_id": 1, "amount": "0x3e8" },
            "memo": "ignored",
        },
        "signature": format!("0x{}", "01".repeat(65)),
    });

    let value = value_from_json(&doc).unwrap();
    let map = normalize_withdrawal_request(&value).unwrap();
    let rendered = field_map_to_json(&map);

    assert_eq!(rendered["raw"]["nonce"], "0x02000000");
    assert_eq!(rendered["raw"]["capacity"], "0x00e40b5402000000");
    assert_eq!(rendered["raw"]["amount"], format!("0x{}", "00".repeat(16)));
    assert_eq!(rendered["raw"]["fee"]["sudt_id"], "0x01000000");
    assert_eq!(
        rendered["raw"]["fee"]["amount"],
        format!("0xe803{}", "00".repeat(14))
    );
    assert_eq!(rendered["raw"]["sudt_script_hash"], h(0x11));
    assert!(rendered["raw"].get("memo").is_none());

    let order: Vec<&str> = rendered["raw"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(order[0], "nonce");
    assert_eq!(order[9], "fee");
    println!("✓ JSON document normalized and rendered in field order");
}

#[test]
fn test_l2_transaction_byte_array_args() {
    let doc = json!({
        "raw": { "from_id": 1, "to_id": 2, "nonce": 3, "args": [0, 1, 2] },
        "signature": "0x",
    });
    let map = normalize_l2_transaction(&value_from_json(&doc).unwrap()).unwrap();
    let raw = map.table("raw").unwrap();
    assert_eq!(raw.bytes("args"), Some(&[0u8, 1, 2][..]));
    assert_eq!(map.bytes("signature"), Some(&[][..]));
}

#[test]
fn test_json_null_is_missing() {
    let doc = json!({
        "raw": { "from_id": 1, "to_id": null, "nonce": 3, "args": "0x" },
        "signature": "0x",
    });
    let err = normalize_l2_transaction(&value_from_json(&doc).unwrap()).unwrap_err();
    assert_eq!(
        err,
        NormalizeError::MissingField {
            path: "l2_transaction.raw.to_id".into()
        }
    );
}
