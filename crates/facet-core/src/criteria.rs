//! Filter criteria
//!
//! A Criterion is the caller-selected value for one named filter; Criteria
//! is the full mapping carried in a ViewState. `Criterion::Any` is the
//! inactive sentinel (the "all" option in a filter dropdown): it evaluates
//! true for every record and composes as the identity under AND.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One filter criterion as selected by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Inactive sentinel; every record passes
    Any,
    /// Exact match against the extracted value
    Equals(Value),
    /// Set membership: extracted value equals any listed value
    OneOf(Vec<Value>),
    /// Inclusive date-range membership; either bound may be open
    DateRange {
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    },
    /// Matches records where the accessor yields no value (null or absent)
    Missing,
    /// Matches records where the accessor yields a value
    Present,
}

impl Criterion {
    /// Whether this criterion filters at all
    pub fn is_active(&self) -> bool {
        !matches!(self, Criterion::Any)
    }

    /// Short variant name for diagnostics
    pub fn variant_name(&self) -> &'static str {
        match self {
            Criterion::Any => "Any",
            Criterion::Equals(_) => "Equals",
            Criterion::OneOf(_) => "OneOf",
            Criterion::DateRange { .. } => "DateRange",
            Criterion::Missing => "Missing",
            Criterion::Present => "Present",
        }
    }
}

/// Mapping from filter name to selected criterion
///
/// Backed by a BTreeMap so iteration, serialization, and debug output are
/// deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria(BTreeMap<String, Criterion>);

impl Criteria {
    /// Create an empty criteria set (no active filters)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the criterion for a named filter (builder style)
    pub fn with(mut self, name: impl Into<String>, criterion: Criterion) -> Self {
        self.0.insert(name.into(), criterion);
        self
    }

    /// Set the criterion for a named filter
    pub fn set(&mut self, name: impl Into<String>, criterion: Criterion) {
        self.0.insert(name.into(), criterion);
    }

    /// Get the criterion for a named filter, if set
    pub fn get(&self, name: &str) -> Option<&Criterion> {
        self.0.get(name)
    }

    /// Iterate (name, criterion) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Criterion)> {
        self.0.iter()
    }

    /// Count of criteria that actually filter (excludes `Any` entries)
    pub fn active_count(&self) -> usize {
        self.0.values().filter(|c| c.is_active()).count()
    }

    /// Whether no entry filters anything
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_any_is_inactive() {
        assert!(!Criterion::Any.is_active());
        assert!(Criterion::Equals(json!("cs")).is_active());
        assert!(Criterion::Missing.is_active());
    }

    #[test]
    fn test_active_count_skips_any() {
        let criteria = Criteria::new()
            .with("department", Criterion::Equals(json!("cs")))
            .with("semester", Criterion::Any);
        assert_eq!(criteria.active_count(), 1);
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let criteria = Criteria::new()
            .with("zeta", Criterion::Any)
            .with("alpha", Criterion::Any);
        let names: Vec<&String> = criteria.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }

    #[test]
    fn test_criterion_serde_round_trip() {
        let c = Criterion::OneOf(vec![json!("a"), json!(2)]);
        let s = serde_json::to_string(&c).unwrap();
        let back: Criterion = serde_json::from_str(&s).unwrap();
        assert_eq!(back, c);
    }
}
