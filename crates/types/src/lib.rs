#![no_std]

extern crate alloc;

pub mod hash;
pub use hash::{Hash, HASH_LEN};

pub mod value;
pub use value::{Object, Value};

pub mod normalized;
pub use normalized::{FieldMap, Normalized};

pub mod script;
pub use script::{Script, ScriptHashType};

pub mod lock_args;
pub use lock_args::*;

pub mod withdrawal;
pub use withdrawal::*;

pub mod transaction;
pub use transaction::*;
