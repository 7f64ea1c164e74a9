//! Record domain model
//!
//! A Record is one opaque domain entity flowing through the view engine: a
//! student, a mentor, a report thread. The engine never assumes specific
//! fields; everything it knows about a record it learns through a
//! caller-supplied accessor. Records are backed by `serde_json::Value` so
//! arbitrarily nested fetch responses can be viewed without a schema.
//!
//! Records are immutable from the engine's perspective: derivation clones,
//! it never mutates.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque, schema-less key-value record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    /// Wrap a JSON value as a record
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the record and return the underlying JSON value
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Look up a dot-separated nested path
    ///
    /// Returns `None` when any segment is absent or when traversal hits a
    /// non-object. An explicit JSON `null` leaf is returned as-is; callers
    /// that need null-as-absent semantics normalize via [`Record::get_path`]'s
    /// companion on `FieldAccessor`. Never errors, never panics.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut current = &self.0;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
