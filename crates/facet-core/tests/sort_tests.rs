//! Sort test suite
//!
//! Covers stability, the present-before-absent rule, and the two-tier
//! closing-date/creation-date fallback comparator used by reporting views.

use facet_core::{apply_sort, by_value, with_fallback, FieldAccessor, Record, SortOrder};
use serde_json::json;

mod common;
use common::name_of;

fn recency() -> facet_core::Comparator {
    with_fallback(
        by_value(FieldAccessor::path("closed_at"), SortOrder::Desc),
        by_value(FieldAccessor::path("created_at"), SortOrder::Desc),
    )
}

#[test]
fn test_closed_date_beats_created_date() {
    // Scenario: [{closedAt:null, createdAt:2024-01-01},
    //            {closedAt:2024-03-01, createdAt:2024-02-01}]
    // Sorted desc-with-fallback, the closed record comes first.
    let records = vec![
        Record::new(json!({"name": "open", "closed_at": null, "created_at": "2024-01-01"})),
        Record::new(json!({"name": "closed", "closed_at": "2024-03-01", "created_at": "2024-02-01"})),
    ];

    let sorted = apply_sort(&records, &recency());
    let names: Vec<&str> = sorted.iter().map(name_of).collect();
    assert_eq!(names, ["closed", "open"]);
}

#[test]
fn test_fallback_orders_open_threads_by_creation() {
    let records = vec![
        Record::new(json!({"name": "older", "created_at": "2024-01-01"})),
        Record::new(json!({"name": "newer", "created_at": "2024-02-01"})),
        Record::new(json!({"name": "closed", "closed_at": "2024-01-15", "created_at": "2023-12-01"})),
    ];

    let sorted = apply_sort(&records, &recency());
    let names: Vec<&str> = sorted.iter().map(name_of).collect();
    assert_eq!(names, ["closed", "newer", "older"]);
}

#[test]
fn test_sort_is_stable_round_trip() {
    // Sorting an already-sorted sequence returns it unchanged,
    // element for element.
    let records = vec![
        Record::new(json!({"name": "a", "sem": 1})),
        Record::new(json!({"name": "b", "sem": 1})),
        Record::new(json!({"name": "c", "sem": 1})),
        Record::new(json!({"name": "d", "sem": 2})),
    ];
    let cmp = by_value(FieldAccessor::path("sem"), SortOrder::Asc);

    let once = apply_sort(&records, &cmp);
    let twice = apply_sort(&once, &cmp);
    assert_eq!(once, twice);

    // All-equal keys: original order preserved
    let names: Vec<&str> = once[..3].iter().map(name_of).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn test_sort_does_not_mutate_input() {
    let records = vec![
        Record::new(json!({"name": "b", "sem": 2})),
        Record::new(json!({"name": "a", "sem": 1})),
    ];
    let before = records.clone();
    let _ = apply_sort(&records, &by_value(FieldAccessor::path("sem"), SortOrder::Asc));
    assert_eq!(records, before);
}

#[test]
fn test_absent_keys_sort_last() {
    let records = vec![
        Record::new(json!({"name": "no_key"})),
        Record::new(json!({"name": "low", "sem": 1})),
        Record::new(json!({"name": "high", "sem": 9})),
    ];

    let asc = apply_sort(&records, &by_value(FieldAccessor::path("sem"), SortOrder::Asc));
    let names: Vec<&str> = asc.iter().map(name_of).collect();
    assert_eq!(names, ["low", "high", "no_key"]);

    let desc = apply_sort(
        &records,
        &by_value(FieldAccessor::path("sem"), SortOrder::Desc),
    );
    let names: Vec<&str> = desc.iter().map(name_of).collect();
    assert_eq!(names, ["high", "low", "no_key"]);
}

#[test]
fn test_mixed_value_types_order_deterministically() {
    // A sloppy backend mixing numeric and string semesters still sorts
    // the same way every time.
    let records = vec![
        Record::new(json!({"name": "s", "sem": "5"})),
        Record::new(json!({"name": "n", "sem": 3})),
    ];
    let cmp = by_value(FieldAccessor::path("sem"), SortOrder::Asc);
    let a = apply_sort(&records, &cmp);
    let b = apply_sort(&records, &cmp);
    assert_eq!(a, b);
    // Numbers rank before strings in the total value order
    assert_eq!(name_of(&a[0]), "n");
}
