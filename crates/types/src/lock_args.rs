use crate::hash::Hash;
use crate::script::Script;
use crate::value::{Object, Value};

/// Args of the deposit lock guarding a layer-1 deposit cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositLockArgs {
    pub owner_lock_hash: Hash,
    pub layer2_lock: Script,
    /// Packed `since` value after which the owner can cancel the deposit.
    pub cancel_timeout: u64,
}

impl From<DepositLockArgs> for Value {
    fn from(args: DepositLockArgs) -> Self {
        Object::new()
            .with("owner_lock_hash", args.owner_lock_hash)
            .with("layer2_lock", args.layer2_lock)
            .with("cancel_timeout", args.cancel_timeout)
            .into()
    }
}

/// Args of the withdrawal lock guarding a finalized withdrawal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalLockArgs {
    pub account_script_hash: Hash,
    pub withdrawal_block_hash: Hash,
    pub withdrawal_block_number: u64,
    pub sudt_script_hash: Hash,
    pub sell_amount: u128,
    pub sell_capacity: u64,
    pub owner_lock_hash: Hash,
    pub payment_lock_hash: Hash,
}

impl From<WithdrawalLockArgs> for Value {
    fn from(args: WithdrawalLockArgs) -> Self {
        Object::new()
            .with("account_script_hash", args.account_script_hash)
            .with("withdrawal_block_hash", args.withdrawal_block_hash)
            .with("withdrawal_block_number", args.withdrawal_block_number)
            .with("sudt_script_hash", args.sudt_script_hash)
            .with("sell_amount", args.sell_amount)
            .with("sell_capacity", args.sell_capacity)
            .with("owner_lock_hash", args.owner_lock_hash)
            .with("payment_lock_hash", args.payment_lock_hash)
            .into()
    }
}

/// Witness marker for unlocking a withdrawal cell once its block is finalized.
/// Carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnlockWithdrawalViaFinalize;

impl From<UnlockWithdrawalViaFinalize> for Value {
    fn from(_: UnlockWithdrawalViaFinalize) -> Self {
        Value::Object(Object::new())
    }
}
