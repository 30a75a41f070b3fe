//! Output of a normalization pass: field name to exact byte buffer.

use alloc::vec::Vec;

/// A normalized field: either a leaf byte buffer or a nested table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Bytes(Vec<u8>),
    Table(FieldMap),
}

impl Normalized {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Normalized::Bytes(bytes) => Some(bytes),
            Normalized::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&FieldMap> {
        match self {
            Normalized::Table(map) => Some(map),
            Normalized::Bytes(_) => None,
        }
    }
}

impl From<Vec<u8>> for Normalized {
    fn from(bytes: Vec<u8>) -> Self {
        Normalized::Bytes(bytes)
    }
}

impl From<FieldMap> for Normalized {
    fn from(map: FieldMap) -> Self {
        Normalized::Table(map)
    }
}

/// Ordered mapping of declared field names to their normalized values.
///
/// Iteration order is declaration order. Downstream table encoders walk the
/// map in this order, so it is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMap {
    fields: Vec<(&'static str, Normalized)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Appends a field. Callers push each declared name once.
    pub fn push(&mut self, name: &'static str, value: impl Into<Normalized>) {
        self.fields.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&Normalized> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Leaf bytes under `name`, `None` if absent or a nested table.
    pub fn bytes(&self, name: &str) -> Option<&[u8]> {
        self.get(name).and_then(Normalized::as_bytes)
    }

    /// Nested table under `name`, `None` if absent or a leaf.
    pub fn table(&self, name: &str) -> Option<&FieldMap> {
        self.get(name).and_then(Normalized::as_table)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Normalized)> {
        self.fields.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
