//! Shared fixtures for facet-core integration tests

use facet_core::{
    by_value, with_fallback, FieldAccessor, FilterRegistry, PredicateKind, Record, SortOrder,
};
use serde_json::json;

/// The mentee roster used across suites: one unassigned mentee, two sharing
/// a mentor, one with a closed thread.
#[allow(dead_code)]
pub fn roster() -> Vec<Record> {
    vec![
        Record::new(json!({
            "name": "Alice", "dept": "cse", "sem": 5,
            "mentor": null,
            "created_at": "2024-01-10"
        })),
        Record::new(json!({
            "name": "Bob", "dept": "cse", "sem": 3,
            "mentor": {"name": "Carol"},
            "created_at": "2024-02-02", "closed_at": "2024-03-01"
        })),
        Record::new(json!({
            "name": "Dana", "dept": "ece", "sem": 5,
            "mentor": {"name": "Carol"},
            "created_at": "2024-01-20"
        })),
    ]
}

/// Registry mirroring a roster page: dept and semester filters, an
/// assignment presence filter, name/mentor search, and a recency sort.
#[allow(dead_code)]
pub fn roster_registry() -> FilterRegistry {
    FilterRegistry::new()
        .with_filter("dept", FieldAccessor::path("dept"), PredicateKind::Equality)
        .with_filter(
            "semester",
            FieldAccessor::path("sem"),
            PredicateKind::Equality,
        )
        .with_filter(
            "assignment",
            FieldAccessor::path("mentor"),
            PredicateKind::Presence,
        )
        .with_search_field(FieldAccessor::path("name"))
        .with_search_field(FieldAccessor::path("mentor.name"))
        .with_sort("name", by_value(FieldAccessor::path("name"), SortOrder::Asc))
        .with_sort(
            "recency",
            with_fallback(
                by_value(FieldAccessor::path("closed_at"), SortOrder::Desc),
                by_value(FieldAccessor::path("created_at"), SortOrder::Desc),
            ),
        )
}

/// N records with a sequential `seq` field for ordering assertions
#[allow(dead_code)]
pub fn numbered(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record::new(json!({"seq": i, "name": format!("r{:03}", i)})))
        .collect()
}

/// Extract `name` from a record, panicking on absence (test-only)
#[allow(dead_code)]
pub fn name_of(record: &Record) -> &str {
    record
        .get_path("name")
        .and_then(|v| v.as_str())
        .expect("fixture records always carry a name")
}
