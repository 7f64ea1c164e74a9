//! Filter registry
//!
//! Page-specific configuration binding named filters to a field accessor and
//! a predicate kind, plus the search fields and named sort keys available to
//! that page. The registry is plain data supplied by the integrating caller
//! at composition time (including any role/capability gating); the engine
//! never consults ambient state to decide what a filter means.

use crate::accessor::FieldAccessor;
use crate::criteria::{Criteria, Criterion};
use crate::errors::{Result, ViewError};
use crate::record::Record;
use crate::sort::Comparator;
use crate::value::{compare_values, parse_datetime};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Built-in predicate kinds a filter can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    /// Exact match; absent values never match
    Equality,
    /// Set membership; absent values never match
    Membership,
    /// Inclusive date-range membership; absent or unparseable values never match
    DateRange,
    /// Presence testing; the one kind where `Missing` matches absent values
    Presence,
}

impl PredicateKind {
    /// Human-readable kind name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            PredicateKind::Equality => "Equality",
            PredicateKind::Membership => "Membership",
            PredicateKind::DateRange => "DateRange",
            PredicateKind::Presence => "Presence",
        }
    }

    /// Whether a criterion variant is legal for this kind
    fn accepts(&self, criterion: &Criterion) -> bool {
        match (self, criterion) {
            (_, Criterion::Any) => true,
            (PredicateKind::Equality, Criterion::Equals(_)) => true,
            (PredicateKind::Membership, Criterion::OneOf(_)) => true,
            (PredicateKind::DateRange, Criterion::DateRange { .. }) => true,
            (PredicateKind::Presence, Criterion::Missing | Criterion::Present) => true,
            _ => false,
        }
    }
}

/// One registered filter: name, accessor, predicate kind
#[derive(Debug, Clone)]
pub struct FilterBinding {
    name: String,
    accessor: FieldAccessor,
    kind: PredicateKind,
}

impl FilterBinding {
    /// Filter name referenced by criteria
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Predicate kind this filter evaluates
    pub fn kind(&self) -> PredicateKind {
        self.kind
    }

    /// Check a criterion against this binding's kind
    ///
    /// # Errors
    ///
    /// Returns `CriterionMismatch` when the criterion variant is not legal
    /// for the bound predicate kind.
    pub fn validate(&self, criterion: &Criterion) -> Result<()> {
        if self.kind.accepts(criterion) {
            return Ok(());
        }
        Err(ViewError::CriterionMismatch {
            filter: self.name.clone(),
            kind: self.kind.name().to_string(),
            criterion: criterion.variant_name().to_string(),
        })
    }

    /// Evaluate this filter for one record
    ///
    /// Pure and total: an active filter whose accessor yields no value
    /// excludes the record, except `Presence` with `Missing`, which matches
    /// exactly that case. Assumes the criterion already passed `validate`;
    /// an incompatible pair evaluates to false rather than panicking.
    pub fn matches(&self, record: &Record, criterion: &Criterion) -> bool {
        if !criterion.is_active() {
            return true;
        }

        let value = self.accessor.extract(record);
        match (self.kind, criterion) {
            (PredicateKind::Equality, Criterion::Equals(expected)) => value
                .map(|v| compare_values(&v, expected) == Ordering::Equal)
                .unwrap_or(false),
            (PredicateKind::Membership, Criterion::OneOf(allowed)) => value
                .map(|v| {
                    allowed
                        .iter()
                        .any(|a| compare_values(&v, a) == Ordering::Equal)
                })
                .unwrap_or(false),
            (PredicateKind::DateRange, Criterion::DateRange { from, to }) => value
                .and_then(|v| parse_datetime(&v))
                .map(|d| from.map_or(true, |f| d >= f) && to.map_or(true, |t| d <= t))
                .unwrap_or(false),
            (PredicateKind::Presence, Criterion::Missing) => value.is_none(),
            (PredicateKind::Presence, Criterion::Present) => value.is_some(),
            _ => false,
        }
    }
}

/// Registry of filters, search fields, and named sort keys for one view
///
/// Filters are applied in registration order. The order never affects which
/// records match (predicates are pure and compose with AND) but keeping it
/// fixed makes performance characteristics reproducible.
#[derive(Debug, Clone, Default)]
pub struct FilterRegistry {
    filters: Vec<FilterBinding>,
    search_fields: Vec<FieldAccessor>,
    sorts: BTreeMap<String, Comparator>,
}

impl FilterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter (builder style)
    ///
    /// Re-registering a name replaces the earlier binding in place, keeping
    /// its position in the application order.
    pub fn with_filter(
        mut self,
        name: impl Into<String>,
        accessor: FieldAccessor,
        kind: PredicateKind,
    ) -> Self {
        let name = name.into();
        let binding = FilterBinding {
            name: name.clone(),
            accessor,
            kind,
        };
        if let Some(existing) = self.filters.iter_mut().find(|b| b.name == name) {
            *existing = binding;
        } else {
            self.filters.push(binding);
        }
        self
    }

    /// Register a search field (builder style); order controls probe order
    pub fn with_search_field(mut self, accessor: FieldAccessor) -> Self {
        self.search_fields.push(accessor);
        self
    }

    /// Register a named sort key (builder style)
    pub fn with_sort(mut self, name: impl Into<String>, comparator: Comparator) -> Self {
        self.sorts.insert(name.into(), comparator);
        self
    }

    /// Look up a filter binding by name
    pub fn filter(&self, name: &str) -> Option<&FilterBinding> {
        self.filters.iter().find(|b| b.name == name)
    }

    /// All filter bindings in application order
    pub fn bindings(&self) -> &[FilterBinding] {
        &self.filters
    }

    /// Registered search field accessors in probe order
    pub fn search_fields(&self) -> &[FieldAccessor] {
        &self.search_fields
    }

    /// Look up a named sort comparator
    pub fn sort(&self, name: &str) -> Option<&Comparator> {
        self.sorts.get(name)
    }

    /// Validate a criteria set against this registry
    ///
    /// # Errors
    ///
    /// Returns `UnknownFilter` for a criteria entry with no binding, or
    /// `CriterionMismatch` for a criterion incompatible with its binding's
    /// predicate kind. Validation is independent of any record collection:
    /// a malformed view state is rejected even over an empty collection.
    pub fn validate_criteria(&self, criteria: &Criteria) -> Result<()> {
        for (name, criterion) in criteria.iter() {
            let binding = self
                .filter(name)
                .ok_or_else(|| ViewError::UnknownFilter { name: name.clone() })?;
            binding.validate(criterion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assignment_registry() -> FilterRegistry {
        FilterRegistry::new().with_filter(
            "assignment",
            FieldAccessor::path("mentor"),
            PredicateKind::Presence,
        )
    }

    #[test]
    fn test_equality_excludes_absent() {
        let registry = FilterRegistry::new().with_filter(
            "department",
            FieldAccessor::path("dept"),
            PredicateKind::Equality,
        );
        let binding = registry.filter("department").unwrap();
        let criterion = Criterion::Equals(json!("cs"));

        assert!(binding.matches(&Record::new(json!({"dept": "cs"})), &criterion));
        assert!(!binding.matches(&Record::new(json!({"dept": "ee"})), &criterion));
        // Absent value never matches an active equality filter
        assert!(!binding.matches(&Record::new(json!({})), &criterion));
        assert!(!binding.matches(&Record::new(json!({"dept": null})), &criterion));
    }

    #[test]
    fn test_presence_missing_matches_null_and_absent() {
        let registry = assignment_registry();
        let binding = registry.filter("assignment").unwrap();

        assert!(binding.matches(&Record::new(json!({"mentor": null})), &Criterion::Missing));
        assert!(binding.matches(&Record::new(json!({})), &Criterion::Missing));
        assert!(!binding.matches(
            &Record::new(json!({"mentor": {"name": "Carol"}})),
            &Criterion::Missing
        ));
    }

    #[test]
    fn test_any_always_matches() {
        let registry = assignment_registry();
        let binding = registry.filter("assignment").unwrap();
        assert!(binding.matches(&Record::new(json!({})), &Criterion::Any));
    }

    #[test]
    fn test_validate_criteria_unknown_filter() {
        let registry = assignment_registry();
        let criteria = Criteria::new().with("nope", Criterion::Missing);
        let err = registry.validate_criteria(&criteria).unwrap_err();
        assert_eq!(err.code(), "ERR_UNKNOWN_FILTER");
    }

    #[test]
    fn test_validate_criteria_kind_mismatch() {
        let registry = assignment_registry();
        let criteria = Criteria::new().with("assignment", Criterion::Equals(json!("x")));
        let err = registry.validate_criteria(&criteria).unwrap_err();
        assert_eq!(err.code(), "ERR_CRITERION_MISMATCH");
    }

    #[test]
    fn test_validate_criteria_any_always_legal() {
        let registry = assignment_registry();
        let criteria = Criteria::new().with("assignment", Criterion::Any);
        assert!(registry.validate_criteria(&criteria).is_ok());
    }

    #[test]
    fn test_reregistering_replaces_in_place() {
        let registry = FilterRegistry::new()
            .with_filter("a", FieldAccessor::path("x"), PredicateKind::Equality)
            .with_filter("b", FieldAccessor::path("y"), PredicateKind::Equality)
            .with_filter("a", FieldAccessor::path("z"), PredicateKind::Presence);
        assert_eq!(registry.bindings().len(), 2);
        assert_eq!(registry.bindings()[0].name(), "a");
        assert_eq!(registry.bindings()[0].kind(), PredicateKind::Presence);
    }
}
