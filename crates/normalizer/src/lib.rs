//! Canonicalization of loosely-typed rollup inputs.
//!
//! Lock args and layer-2 transactions arrive as hand-built objects or JSON,
//! with integers as numbers or text and byte strings as hex. The functions
//! here turn each declared field into the exact byte buffer the on-chain
//! table encoding expects, and return them as an ordered [`FieldMap`].
//! Laying the fields out into a flat byte stream is left to the table
//! encoder downstream.
//!
//! ```
//! use normalizer::{normalize_fee, Object};
//!
//! let fee = Object::new().with("sudt_id", "0x1").with("amount", "0x64");
//! let map = normalize_fee(&fee.into()).unwrap();
//! assert_eq!(map.bytes("sudt_id"), Some(&[1u8, 0, 0, 0][..]));
//! ```

pub mod error;
pub mod int;
pub mod json;
pub mod object;
pub mod raw;
pub mod schemas;
pub mod script;

pub use error::{NormalizeError, Result};
pub use int::normalize_int;
pub use json::{field_map_to_json, value_from_json};
pub use object::{normalize_object, Field, FieldKind, Normalize, Schema};
pub use raw::{normalize_raw, RawLength};
pub use schemas::{
    normalize_deposit_lock_args, normalize_fee, normalize_l2_transaction,
    normalize_raw_l2_transaction, normalize_raw_withdrawal_request,
    normalize_unlock_withdrawal_via_finalize, normalize_withdrawal_lock_args,
    normalize_withdrawal_request,
};
pub use script::{normalize_script, ScriptNormalizer};

pub use types::{FieldMap, Normalized, Object, Value};
