//! Field accessors
//!
//! A FieldAccessor is a pure extraction function from a Record to a
//! comparable value, tolerant of missing data. The multi-path fallback
//! pattern common in roster screens (try the allocated mentor, then the
//! requested mentor, then the legacy field) is formalized here as the
//! `first_of` combinator rather than repeated inline conditionals.

use crate::record::Record;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type ExtractFn = dyn Fn(&Record) -> Option<Value> + Send + Sync;

/// Pure extraction function `Record -> Option<Value>`
///
/// JSON `null` is normalized to `None`: predicates and comparators treat
/// "field is null" and "field is absent" as the same distinct comparison
/// case, and neither ever raises an error. Accessors are cheap to clone.
#[derive(Clone)]
pub struct FieldAccessor {
    label: String,
    extract: Arc<ExtractFn>,
}

impl FieldAccessor {
    /// Accessor for a single dot-separated path, labeled with the path
    pub fn path(path: impl Into<String>) -> Self {
        let path = path.into();
        let extract_path = path.clone();
        Self {
            label: path,
            extract: Arc::new(move |record| {
                record
                    .get_path(&extract_path)
                    .filter(|v| !v.is_null())
                    .cloned()
            }),
        }
    }

    /// Fallback-chain accessor: probes each path in priority order and
    /// returns the first non-null result
    pub fn first_of(label: impl Into<String>, paths: &[&str]) -> Self {
        let paths: Vec<String> = paths.iter().map(|p| (*p).to_string()).collect();
        Self {
            label: label.into(),
            extract: Arc::new(move |record| {
                paths
                    .iter()
                    .find_map(|p| record.get_path(p).filter(|v| !v.is_null()).cloned())
            }),
        }
    }

    /// Accessor backed by an arbitrary closure
    ///
    /// The closure must be pure: same record in, same value out.
    pub fn from_fn<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record) -> Option<Value> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            extract: Arc::new(f),
        }
    }

    /// Extract the value for a record, `None` for absent or null
    pub fn extract(&self, record: &Record) -> Option<Value> {
        (self.extract)(record)
    }

    /// Diagnostic label for this accessor
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for FieldAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
