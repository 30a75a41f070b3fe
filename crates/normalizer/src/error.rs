//! Errors raised while normalizing input.
//!
//! Every variant is a caller-input problem and carries the dotted path of
//! the field where normalization stopped, e.g. `withdrawal_request.raw.fee.amount`.

/// Normalization error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// A declared field was absent or null.
    #[error("{path} is missing")]
    MissingField { path: String },

    /// An integer needs more bytes than the field width allows.
    #[error("{path} is {required} bytes long, expected length is {available}")]
    IntegerOverflow {
        path: String,
        required: usize,
        available: usize,
    },

    /// A fixed-length byte field decoded to the wrong length.
    #[error("{path} has invalid length {actual}, required: {expected}")]
    LengthMismatch {
        path: String,
        expected: usize,
        actual: usize,
    },

    /// Integer text could not be parsed.
    #[error("{path} is not a valid integer: {value:?}")]
    InvalidNumber { path: String, value: String },

    /// Byte string text is not `0x`-prefixed, even-length hex.
    #[error("{path} is not a valid hex byte string: {reason}")]
    InvalidHex { path: String, reason: String },

    /// The value has a shape the field cannot accept.
    #[error("{path} has unexpected type {found}, expected {expected}")]
    UnexpectedType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Script `hash_type` outside the known set.
    #[error("{path} has invalid hash type: {value}")]
    InvalidHashType { path: String, value: String },
}

impl NormalizeError {
    /// Dotted path of the field that failed.
    pub fn path(&self) -> &str {
        match self {
            NormalizeError::MissingField { path }
            | NormalizeError::IntegerOverflow { path, .. }
            | NormalizeError::LengthMismatch { path, .. }
            | NormalizeError::InvalidNumber { path, .. }
            | NormalizeError::InvalidHex { path, .. }
            | NormalizeError::UnexpectedType { path, .. }
            | NormalizeError::InvalidHashType { path, .. } => path,
        }
    }
}

/// Convenient alias for normalization results.
pub type Result<T> = core::result::Result<T, NormalizeError>;
