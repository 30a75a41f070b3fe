//! Field descriptors and the structural canonicalizer that applies them.

use std::borrow::Cow;

use tracing::{debug, trace};
use types::{FieldMap, Normalized, Value};

use crate::error::{NormalizeError, Result};
use crate::int::normalize_int;
use crate::raw::{normalize_raw, RawLength};

/// Anything that can turn a value found at `path` into its normalized form.
///
/// Schemas implement it, and so must external collaborators such as the
/// layer-2 lock's Script encoder, so they can be nested as fields.
pub trait Normalize {
    fn normalize(&self, path: &str, value: &Value) -> Result<Normalized>;
}

impl<T: Normalize + ?Sized> Normalize for &T {
    fn normalize(&self, path: &str, value: &Value) -> Result<Normalized> {
        (**self).normalize(path, value)
    }
}

impl<T: Normalize + ?Sized> Normalize for Box<T> {
    fn normalize(&self, path: &str, value: &Value) -> Result<Normalized> {
        (**self).normalize(path, value)
    }
}

/// How one declared field is encoded.
pub enum FieldKind<'a> {
    /// Little-endian integer of exactly this many bytes.
    FixedInt(usize),
    Raw(RawLength),
    /// Delegated to another encoder, typically a nested schema.
    Nested(Box<dyn Normalize + 'a>),
}

impl std::fmt::Debug for FieldKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::FixedInt(width) => f.debug_tuple("FixedInt").field(width).finish(),
            FieldKind::Raw(length) => f.debug_tuple("Raw").field(length).finish(),
            FieldKind::Nested(_) => f.write_str("Nested(..)"),
        }
    }
}

#[derive(Debug)]
pub struct Field<'a> {
    pub name: &'static str,
    pub kind: FieldKind<'a>,
}

impl<'a> Field<'a> {
    pub fn int(name: &'static str, width: usize) -> Self {
        Self {
            name,
            kind: FieldKind::FixedInt(width),
        }
    }

    /// Byte field of exactly `len` bytes.
    pub fn fixed_bytes(name: &'static str, len: usize) -> Self {
        Self {
            name,
            kind: FieldKind::Raw(RawLength::Exact(len)),
        }
    }

    /// Byte field of any length.
    pub fn bytes(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Raw(RawLength::Unbounded),
        }
    }

    pub fn nested(name: &'static str, encoder: impl Normalize + 'a) -> Self {
        Self {
            name,
            kind: FieldKind::Nested(Box::new(encoder)),
        }
    }

    fn normalize(&self, path: &str, value: &Value) -> Result<Normalized> {
        match &self.kind {
            FieldKind::FixedInt(width) => normalize_int(path, *width, value).map(Normalized::Bytes),
            FieldKind::Raw(length) => normalize_raw(path, *length, value).map(Normalized::Bytes),
            FieldKind::Nested(encoder) => encoder.normalize(path, value),
        }
    }
}

/// Applies `fields` to `value` in declaration order.
///
/// Every declared field must be present and non-null. Undeclared keys in the
/// input are ignored. The first failure aborts the whole object.
pub fn normalize_object(path: &str, value: &Value, fields: &[Field<'_>]) -> Result<FieldMap> {
    let obj = value.as_object().ok_or_else(|| NormalizeError::UnexpectedType {
        path: path.to_string(),
        expected: "object",
        found: value.kind(),
    })?;

    let mut out = FieldMap::with_capacity(fields.len());
    for field in fields {
        let field_path = format!("{path}.{}", field.name);
        let field_value = match obj.get(field.name) {
            Some(v) if !v.is_null() => v,
            _ => return Err(NormalizeError::MissingField { path: field_path }),
        };
        let normalized = field.normalize(&field_path, field_value)?;
        if let Normalized::Bytes(bytes) = &normalized {
            trace!(path = %field_path, len = bytes.len(), "normalized field");
        }
        out.push(field.name, normalized);
    }
    Ok(out)
}

/// A named field layout with a default root path for error messages.
#[derive(Debug)]
pub struct Schema<'a> {
    debug_path: Cow<'static, str>,
    fields: Vec<Field<'a>>,
}

impl<'a> Schema<'a> {
    pub fn new(debug_path: &'static str, fields: Vec<Field<'a>>) -> Self {
        Self {
            debug_path: Cow::Borrowed(debug_path),
            fields,
        }
    }

    /// Overrides the root label used in error paths.
    pub fn with_debug_path(mut self, debug_path: impl Into<Cow<'static, str>>) -> Self {
        self.debug_path = debug_path.into();
        self
    }

    pub fn debug_path(&self) -> &str {
        &self.debug_path
    }

    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    /// Normalizes a top-level input under this schema's own debug path.
    pub fn normalize_input(&self, value: &Value) -> Result<FieldMap> {
        debug!(schema = %self.debug_path, "normalizing");
        match normalize_object(&self.debug_path, value, &self.fields) {
            Ok(map) => {
                debug!(schema = %self.debug_path, fields = map.len(), "normalized");
                Ok(map)
            }
            Err(err) => {
                debug!(schema = %self.debug_path, path = err.path(), %err, "normalization failed");
                Err(err)
            }
        }
    }
}

impl Normalize for Schema<'_> {
    fn normalize(&self, path: &str, value: &Value) -> Result<Normalized> {
        normalize_object(path, value, &self.fields).map(Normalized::Table)
    }
}
