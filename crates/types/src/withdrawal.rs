use alloc::vec::Vec;

use crate::hash::Hash;
use crate::value::{Object, Value};

/// Fee paid to the block producer, denominated in a layer-2 sUDT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fee {
    pub sudt_id: u32,
    pub amount: u128,
}

impl From<Fee> for Value {
    fn from(fee: Fee) -> Self {
        Object::new()
            .with("sudt_id", fee.sudt_id)
            .with("amount", fee.amount)
            .into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWithdrawalRequest {
    pub nonce: u32,
    /// CKB amount
    pub capacity: u64,
    /// sUDT amount
    pub amount: u128,
    pub sudt_script_hash: Hash,
    /// layer-2 account script hash
    pub account_script_hash: Hash,
    // a buyer can pay sell_amount and sell_capacity to unlock
    pub sell_amount: u128,
    pub sell_capacity: u64,
    /// layer-1 lock to withdraw to after the challenge period
    pub owner_lock_hash: Hash,
    /// layer-1 lock receiving the payment, must exist on chain
    pub payment_lock_hash: Hash,
    pub fee: Fee,
}

impl From<RawWithdrawalRequest> for Value {
    fn from(raw: RawWithdrawalRequest) -> Self {
        Object::new()
            .with("nonce", raw.nonce)
            .with("capacity", raw.capacity)
            .with("amount", raw.amount)
            .with("sudt_script_hash", raw.sudt_script_hash)
            .with("account_script_hash", raw.account_script_hash)
            .with("sell_amount", raw.sell_amount)
            .with("sell_capacity", raw.sell_capacity)
            .with("owner_lock_hash", raw.owner_lock_hash)
            .with("payment_lock_hash", raw.payment_lock_hash)
            .with("fee", raw.fee)
            .into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalRequest {
    pub raw: RawWithdrawalRequest,
    /// 65-byte recoverable signature.
    pub signature: Vec<u8>,
}

impl From<WithdrawalRequest> for Value {
    fn from(req: WithdrawalRequest) -> Self {
        Object::new()
            .with("raw", req.raw)
            .with("signature", req.signature)
            .into()
    }
}
