//! Roster view demo
//!
//! Builds a small mentee roster, wires up the filter registry a roster page
//! would use, and walks through filtering, searching, sorting, pagination,
//! and grouped counts.
//!
//! Run with: cargo run --example roster_view -p facet-core

use facet_core::logging_facility::{init, Profile};
use facet_core::{
    by_value, compute_view, grouped_counts, with_fallback, Criteria, Criterion, FieldAccessor,
    FilterRegistry, PredicateKind, Record, SortOrder, ViewState,
};
use serde_json::json;

fn roster() -> Vec<Record> {
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
        Record::new(json!({
            "name": "Eve", "dept": "cse", "sem": 5,
            "mentor": {"name": "Frank"},
            "created_at": "2024-02-15", "closed_at": "2024-02-20"
        })),
    ]
}

fn main() -> facet_core::Result<()> {
    init(Profile::Development);

    let registry = FilterRegistry::new()
        .with_filter("dept", FieldAccessor::path("dept"), PredicateKind::Equality)
        .with_filter(
            "assignment",
            FieldAccessor::path("mentor"),
            PredicateKind::Presence,
        )
        .with_search_field(FieldAccessor::path("name"))
        .with_search_field(FieldAccessor::path("mentor.name"))
        .with_sort(
            "recency",
            with_fallback(
                by_value(FieldAccessor::path("closed_at"), SortOrder::Desc),
                by_value(FieldAccessor::path("created_at"), SortOrder::Desc),
            ),
        );

    let records = roster();

    // Unassigned mentees, page 0
    let state = ViewState::new()
        .with_criteria(Criteria::new().with("assignment", Criterion::Missing))
        .with_page_size(10);
    let view = compute_view(&records, &state, &registry)?;
    println!("unassigned ({} matched):", view.total_matched);
    for item in &view.items {
        println!("  {}", item.get_path("name").unwrap());
    }

    // CSE mentees mentioning "ar" anywhere searchable, newest activity first
    let state = ViewState::new()
        .with_criteria(Criteria::new().with("dept", Criterion::Equals(json!("cse"))))
        .with_search("ar")
        .with_sort_key("recency");
    let view = compute_view(&records, &state, &registry)?;
    println!("cse + search 'ar' ({} matched):", view.total_matched);
    for item in &view.items {
        println!("  {}", item.get_path("name").unwrap());
    }

    // Mentees per mentor
    let groups = grouped_counts(
        &records,
        &Criteria::new(),
        "",
        &registry,
        &FieldAccessor::path("mentor.name"),
    )?;
    println!("mentees per mentor:");
    for group in &groups {
        println!("  {}: {}", group.key, group.count);
    }

    Ok(())
}
