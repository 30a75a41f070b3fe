#![allow(dead_code)]

use normalizer::{Object, Value};
use types::{
    Fee, Hash, L2Transaction, RawL2Transaction, RawWithdrawalRequest, Script, ScriptHashType,
    WithdrawalLockArgs, WithdrawalRequest,
};

pub fn hash(byte: u8) -> Hash {
    Hash([byte; 32])
}

pub fn hex_hash(byte: u8) -> String {
    format!("0x{}", hex::encode([byte; 32]))
}

pub fn fee() -> Fee {
    Fee {
        sudt_id: 1,
        amount: 100,
    }
}

pub fn raw_withdrawal_request() -> RawWithdrawalRequest {
    RawWithdrawalRequest {
        nonce: 7,
        capacity: 500_0000_0000,
        amount: 1_000,
        sudt_script_hash: hash(0x01),
        account_script_hash: hash(0x02),
        sell_amount: 10,
        sell_capacity: 20,
        owner_lock_hash: hash(0x03),
        payment_lock_hash: hash(0x04),
        fee: fee(),
    }
}

pub fn withdrawal_request() -> WithdrawalRequest {
    WithdrawalRequest {
        raw: raw_withdrawal_request(),
        signature: vec![0xab; 65],
    }
}

pub fn withdrawal_lock_args() -> WithdrawalLockArgs {
    WithdrawalLockArgs {
        account_script_hash: hash(0x05),
        withdrawal_block_hash: hash(0x06),
        withdrawal_block_number: 42,
        sudt_script_hash: hash(0x07),
        sell_amount: 0,
        sell_capacity: 0,
        owner_lock_hash: hash(0x08),
        payment_lock_hash: hash(0x09),
    }
}

pub fn layer2_lock() -> Script {
    Script {
        code_hash: hash(0x0a),
        hash_type: ScriptHashType::Type,
        args: vec![0x01, 0x02, 0x03],
    }
}

pub fn raw_l2_transaction() -> RawL2Transaction {
    RawL2Transaction {
        from_id: 2,
        to_id: 3,
        nonce: 9,
        args: vec![0xff, 0xee],
    }
}

pub fn l2_transaction() -> L2Transaction {
    L2Transaction {
        raw: raw_l2_transaction(),
        signature: vec![0x55; 65],
    }
}

/// Copy of `value` (an object) without `key`.
pub fn without(value: impl Into<Value>, key: &str) -> Value {
    let mut obj: Object = match value.into() {
        Value::Object(obj) => obj,
        other => panic!("expected object, got {}", other.kind()),
    };
    obj.remove(key).expect("key present in fixture");
    obj.into()
}

/// Copy of `value` (an object) with `key` set to `replacement`.
pub fn with(value: impl Into<Value>, key: &str, replacement: impl Into<Value>) -> Value {
    match value.into() {
        Value::Object(obj) => obj.with(key, replacement).into(),
        other => panic!("expected object, got {}", other.kind()),
    }
}

/// Little-endian bytes back to an integer, for round-trip checks.
pub fn le_to_u128(bytes: &[u8]) -> u128 {
    bytes
        .iter()
        .rev()
        .fold(0u128, |acc, b| (acc << 8) | u128::from(*b))
}
