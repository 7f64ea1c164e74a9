//! Grouped-count view
//!
//! Secondary aggregation mode for roster and report screens: instead of a
//! page of records, produce per-key counts ("N mentees", "N threads") over
//! the matched (pre-sort, pre-paginate) collection. Output order is count
//! descending with ties broken by key ascending, so badge lists render
//! identically across refetches.

use crate::criteria::Criteria;
use crate::errors::Result;
use crate::record::Record;
use crate::registry::FilterRegistry;
use crate::value::search_text;
use crate::view::{apply_filters, apply_search};
use crate::FieldAccessor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One grouped-count entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCount {
    /// Grouping key, coerced to its search-text form
    pub key: String,
    /// Number of matched records under the key
    pub count: usize,
}

/// Group the matched collection by a key accessor and count per key
///
/// Filters and search apply exactly as in `compute_view`; sorting and
/// pagination do not. Records whose key accessor yields no value are
/// skipped (an unassigned mentee counts under no mentor), as are records
/// whose key is an array or object: grouping keys are scalars.
///
/// # Errors
///
/// Returns `UnknownFilter` or `CriterionMismatch` for a malformed criteria
/// set.
pub fn grouped_counts(
    records: &[Record],
    criteria: &Criteria,
    search: &str,
    registry: &FilterRegistry,
    key_accessor: &FieldAccessor,
) -> Result<Vec<GroupedCount>> {
    let matched = apply_filters(records, criteria, registry)?;
    let matched = apply_search(&matched, search, registry.search_fields());

    // BTreeMap gives the key-ascending baseline for deterministic ties.
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in &matched {
        let Some(value) = key_accessor.extract(record) else {
            continue;
        };
        // Containers have no scalar text form and land in no group
        if value.is_array() || value.is_object() {
            continue;
        }
        let key = search_text(&value);
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut groups: Vec<GroupedCount> = counts
        .into_iter()
        .map(|(key, count)| GroupedCount { key, count })
        .collect();
    // Stable sort over a key-ascending sequence: equal counts stay key-ascending.
    groups.sort_by(|a, b| b.count.cmp(&a.count));

    tracing::debug!(
        record_count = records.len(),
        matched = matched.len(),
        group_count = groups.len(),
        key = key_accessor.label(),
        "computed grouped counts"
    );

    Ok(groups)
}
