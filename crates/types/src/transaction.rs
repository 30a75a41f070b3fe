use alloc::vec::Vec;

use crate::value::{Object, Value};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawL2Transaction {
    pub from_id: u32, // sender account id
    pub to_id: u32,   // receiver account id
    pub nonce: u32,
    pub args: Vec<u8>, // call data for the receiver's backend
}

impl From<RawL2Transaction> for Value {
    fn from(raw: RawL2Transaction) -> Self {
        Object::new()
            .with("from_id", raw.from_id)
            .with("to_id", raw.to_id)
            .with("nonce", raw.nonce)
            .with("args", raw.args)
            .into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct L2Transaction {
    pub raw: RawL2Transaction,
    pub signature: Vec<u8>,
}

impl From<L2Transaction> for Value {
    fn from(tx: L2Transaction) -> Self {
        Object::new()
            .with("raw", tx.raw)
            .with("signature", tx.signature)
            .into()
    }
}
