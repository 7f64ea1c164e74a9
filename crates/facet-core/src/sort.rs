//! Sort comparators
//!
//! Comparators are built from two combinators instead of ad hoc branching:
//! `by_value` compares one extracted field, and `with_fallback` chains a
//! secondary comparator for primary ties. Reporting views express their
//! default ordering ("closing date descending, records with one first,
//! else creation date descending") as
//! `with_fallback(by_value(closed, Desc), by_value(created, Desc))`.
//!
//! All sorting in the engine is stable: ties preserve input order.

use crate::accessor::FieldAccessor;
use crate::record::Record;
use crate::value::compare_values;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

type CompareFn = dyn Fn(&Record, &Record) -> Ordering + Send + Sync;

/// A stable, cheaply clonable record comparator
#[derive(Clone)]
pub struct Comparator {
    label: String,
    cmp: Arc<CompareFn>,
}

impl Comparator {
    /// Build a comparator from an arbitrary comparison closure
    ///
    /// The closure must be a pure, consistent ordering.
    pub fn from_fn<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record, &Record) -> Ordering + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            cmp: Arc::new(f),
        }
    }

    /// Compare two records
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        (self.cmp)(a, b)
    }

    /// Diagnostic label for this comparator
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Compare records by one extracted value
///
/// A record with a value always sorts before a record without one,
/// regardless of direction; two absent values compare equal (letting a
/// fallback comparator decide). Present values compare with the engine's
/// total value ordering, reversed for `Desc`.
pub fn by_value(accessor: FieldAccessor, order: SortOrder) -> Comparator {
    let label = format!(
        "by_value({}, {})",
        accessor.label(),
        match order {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    );
    Comparator::from_fn(label, move |a, b| {
        match (accessor.extract(a), accessor.extract(b)) {
            (Some(va), Some(vb)) => {
                let ord = compare_values(&va, &vb);
                match order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    })
}

/// Chain two comparators: secondary decides whenever primary ties
pub fn with_fallback(primary: Comparator, secondary: Comparator) -> Comparator {
    let label = format!("{} -> {}", primary.label(), secondary.label());
    Comparator::from_fn(label, move |a, b| {
        primary.compare(a, b).then_with(|| secondary.compare(a, b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_by_value_asc_and_desc() {
        let cmp = by_value(FieldAccessor::path("sem"), SortOrder::Asc);
        let a = Record::new(json!({"sem": 3}));
        let b = Record::new(json!({"sem": 5}));
        assert_eq!(cmp.compare(&a, &b), Ordering::Less);

        let cmp = by_value(FieldAccessor::path("sem"), SortOrder::Desc);
        assert_eq!(cmp.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_present_sorts_before_absent_in_both_directions() {
        let a = Record::new(json!({"closed_at": "2024-03-01"}));
        let b = Record::new(json!({"closed_at": null}));

        let asc = by_value(FieldAccessor::path("closed_at"), SortOrder::Asc);
        let desc = by_value(FieldAccessor::path("closed_at"), SortOrder::Desc);
        assert_eq!(asc.compare(&a, &b), Ordering::Less);
        assert_eq!(desc.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_with_fallback_decides_primary_ties() {
        let primary = by_value(FieldAccessor::path("closed_at"), SortOrder::Desc);
        let secondary = by_value(FieldAccessor::path("created_at"), SortOrder::Desc);
        let cmp = with_fallback(primary, secondary);

        // Both lack closed_at: created_at desc decides
        let older = Record::new(json!({"created_at": "2024-01-01"}));
        let newer = Record::new(json!({"created_at": "2024-02-01"}));
        assert_eq!(cmp.compare(&newer, &older), Ordering::Less);
        assert_eq!(cmp.compare(&older, &newer), Ordering::Greater);
    }

    #[test]
    fn test_comparator_label() {
        let cmp = by_value(FieldAccessor::path("x"), SortOrder::Asc);
        assert_eq!(cmp.label(), "by_value(x, asc)");
    }
}
