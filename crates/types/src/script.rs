use alloc::vec::Vec;

use crate::hash::Hash;
use crate::value::{Object, Value};

/// How a script's `code_hash` is matched against cells on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptHashType {
    /// 0 - match the data hash of the code cell
    Data = 0,
    /// 1 - match the type script hash of the code cell
    Type = 1,
    /// 2 - data hash, executed with VM version 1
    Data1 = 2,
    /// 3 - data hash, executed with VM version 2
    Data2 = 3,
}

impl ScriptHashType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ScriptHashType::Data),
            1 => Some(ScriptHashType::Type),
            2 => Some(ScriptHashType::Data1),
            3 => Some(ScriptHashType::Data2),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "data" => Some(ScriptHashType::Data),
            "type" => Some(ScriptHashType::Type),
            "data1" => Some(ScriptHashType::Data1),
            "data2" => Some(ScriptHashType::Data2),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScriptHashType::Data => "data",
            ScriptHashType::Type => "type",
            ScriptHashType::Data1 => "data1",
            ScriptHashType::Data2 => "data2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub code_hash: Hash,
    pub hash_type: ScriptHashType,
    pub args: Vec<u8>,
}

impl From<Script> for Value {
    fn from(script: Script) -> Self {
        Object::new()
            .with("code_hash", script.code_hash)
            .with("hash_type", script.hash_type.name())
            .with("args", script.args)
            .into()
    }
}
