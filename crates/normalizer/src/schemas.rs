//! Field layouts of the rollup's lock args and transactions.
//!
//! Each constructor returns a fresh [`Schema`]; nested schemas are owned by
//! their parent field. Widths are in bytes.

use types::{FieldMap, Value};

use crate::error::Result;
use crate::object::{Field, Normalize, Schema};

pub const HASH_LEN: usize = types::HASH_LEN;
pub const SIGNATURE_LEN: usize = 65;

pub fn deposit_lock_args<'a>(script: &'a dyn Normalize) -> Schema<'a> {
    Schema::new(
        "deposit_lock_args",
        vec![
            Field::fixed_bytes("owner_lock_hash", HASH_LEN),
            Field::nested("layer2_lock", script),
            // packed since
            Field::int("cancel_timeout", 8),
        ],
    )
}

/// sudt_id: u32, amount: u128
pub fn fee() -> Schema<'static> {
    Schema::new("fee", vec![Field::int("sudt_id", 4), Field::int("amount", 16)])
}

pub fn raw_withdrawal_request() -> Schema<'static> {
    Schema::new(
        "raw_withdrawal_request",
        vec![
            Field::int("nonce", 4),
            Field::int("capacity", 8),
            Field::int("amount", 16),
            Field::fixed_bytes("sudt_script_hash", HASH_LEN),
            Field::fixed_bytes("account_script_hash", HASH_LEN),
            Field::int("sell_amount", 16),
            Field::int("sell_capacity", 8),
            Field::fixed_bytes("owner_lock_hash", HASH_LEN),
            Field::fixed_bytes("payment_lock_hash", HASH_LEN),
            Field::nested("fee", fee()),
        ],
    )
}

pub fn withdrawal_request() -> Schema<'static> {
    Schema::new(
        "withdrawal_request",
        vec![
            Field::nested("raw", raw_withdrawal_request()),
            Field::fixed_bytes("signature", SIGNATURE_LEN),
        ],
    )
}

pub fn withdrawal_lock_args() -> Schema<'static> {
    Schema::new(
        "withdrawal_lock_args",
        vec![
            Field::fixed_bytes("account_script_hash", HASH_LEN),
            Field::fixed_bytes("withdrawal_block_hash", HASH_LEN),
            Field::int("withdrawal_block_number", 8),
            Field::fixed_bytes("sudt_script_hash", HASH_LEN),
            Field::int("sell_amount", 16),
            Field::int("sell_capacity", 8),
            Field::fixed_bytes("owner_lock_hash", HASH_LEN),
            Field::fixed_bytes("payment_lock_hash", HASH_LEN),
        ],
    )
}

/// No fields. Still requires an object, and yields an empty map.
pub fn unlock_withdrawal_via_finalize() -> Schema<'static> {
    Schema::new("unlock_withdrawal_finalize", Vec::new())
}

pub fn raw_l2_transaction() -> Schema<'static> {
    Schema::new(
        "raw_l2_transaction",
        vec![
            Field::int("from_id", 4),
            Field::int("to_id", 4),
            Field::int("nonce", 4),
            Field::bytes("args"),
        ],
    )
}

pub fn l2_transaction() -> Schema<'static> {
    Schema::new(
        "l2_transaction",
        vec![
            Field::nested("raw", raw_l2_transaction()),
            Field::bytes("signature"),
        ],
    )
}

/// `script` encodes the embedded `layer2_lock`; see [`crate::ScriptNormalizer`].
pub fn normalize_deposit_lock_args(args: &Value, script: &dyn Normalize) -> Result<FieldMap> {
    deposit_lock_args(script).normalize_input(args)
}

pub fn normalize_fee(fee_value: &Value) -> Result<FieldMap> {
    fee().normalize_input(fee_value)
}

pub fn normalize_raw_withdrawal_request(raw_request: &Value) -> Result<FieldMap> {
    raw_withdrawal_request().normalize_input(raw_request)
}

pub fn normalize_withdrawal_request(request: &Value) -> Result<FieldMap> {
    withdrawal_request().normalize_input(request)
}

pub fn normalize_withdrawal_lock_args(args: &Value) -> Result<FieldMap> {
    withdrawal_lock_args().normalize_input(args)
}

pub fn normalize_unlock_withdrawal_via_finalize(unlock: &Value) -> Result<FieldMap> {
    unlock_withdrawal_via_finalize().normalize_input(unlock)
}

pub fn normalize_raw_l2_transaction(raw_tx: &Value) -> Result<FieldMap> {
    raw_l2_transaction().normalize_input(raw_tx)
}

pub fn normalize_l2_transaction(tx: &Value) -> Result<FieldMap> {
    l2_transaction().normalize_input(tx)
}
