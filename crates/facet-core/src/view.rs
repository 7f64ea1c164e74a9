//! View composition
//!
//! This module provides the composition entrypoint for derived views:
//! filters, then search, then sort, then pagination, in that fixed order.
//! Filtering and search run before sort so sort cost is proportional to the
//! matched subset rather than the full collection.
//!
//! Key principles:
//! - All operations are read-only (no mutation of the input collection)
//! - Results are deterministically ordered
//! - Identical inputs always produce structurally identical outputs

use crate::criteria::Criteria;
use crate::errors::{Result, ViewError};
use crate::paginate::paginate;
use crate::record::Record;
use crate::registry::FilterRegistry;
use crate::sort::Comparator;
use crate::FieldAccessor;
use serde::{Deserialize, Serialize};

/// Caller-owned snapshot of current filter/search/sort/page selections
///
/// The engine is stateless per call: the caller holds the view state,
/// re-invokes `compute_view` whenever records or state change, and owns
/// page-index clamping. When filters shrink the matched set below the
/// current page offset the engine returns an empty page rather than
/// silently clamping - whether to reset to page 0 is a presentation
/// policy decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// 0-based page index
    pub page_index: usize,
    /// Records per page; must be at least 1
    pub page_size: usize,
    /// Active filter criteria; `Any` entries are inactive
    pub criteria: Criteria,
    /// Search term; empty or whitespace-only is a no-op
    pub search: String,
    /// Named sort key registered in the view's registry
    pub sort_key: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: 10,
            criteria: Criteria::new(),
            search: String::new(),
            sort_key: None,
        }
    }
}

impl ViewState {
    /// Create a view state with defaults (page 0, size 10, nothing active)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page index (builder style)
    pub fn with_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Set the page size (builder style)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the criteria (builder style)
    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Set the search term (builder style)
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Set the sort key (builder style)
    pub fn with_sort_key(mut self, name: impl Into<String>) -> Self {
        self.sort_key = Some(name.into());
        self
    }
}

/// The computed, paginated, ordered result of applying a ViewState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedView {
    /// Records on the requested page, in derived order
    pub items: Vec<Record>,
    /// Count of records matching all active filters and the search term
    pub total_matched: usize,
    /// Total pages at the requested page size, minimum 1
    pub total_pages: usize,
    /// Echo of the requested page index (not clamped; see `ViewState`)
    pub page_index: usize,
}

/// Apply all active filters, AND-composed, in registration order
///
/// An unset or `Any` criterion passes every record. The result is a new
/// sequence preserving input order; the input is never mutated.
///
/// # Errors
///
/// Returns `UnknownFilter` or `CriterionMismatch` for a malformed criteria
/// set, before any record is examined.
pub fn apply_filters(
    records: &[Record],
    criteria: &Criteria,
    registry: &FilterRegistry,
) -> Result<Vec<Record>> {
    registry.validate_criteria(criteria)?;

    let mut matched = Vec::with_capacity(records.len());
    'records: for record in records {
        // Registration order keeps the scan order fixed; it never changes
        // which records survive.
        for binding in registry.bindings() {
            if let Some(criterion) = criteria.get(binding.name()) {
                if !binding.matches(record, criterion) {
                    continue 'records;
                }
            }
        }
        matched.push(record.clone());
    }
    Ok(matched)
}

/// Retain records where any accessor's text contains the term
///
/// Matching is case-insensitive substring containment over the documented
/// string coercion. An empty or whitespace-only term passes everything.
pub fn apply_search(records: &[Record], term: &str, accessors: &[FieldAccessor]) -> Vec<Record> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            accessors.iter().any(|accessor| {
                accessor
                    .extract(record)
                    .map(|v| crate::value::search_text(&v).to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

/// Stable sort by a comparator; ties preserve input order
pub fn apply_sort(records: &[Record], comparator: &Comparator) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| comparator.compare(a, b));
    sorted
}

/// Compute a derived view: filters, search, sort, paginate, in that order
///
/// Purely a function of its three inputs - no I/O, no hidden state, safe to
/// call from concurrent callers without coordination.
///
/// # Errors
///
/// Returns `InvalidPageSize`, `UnknownFilter`, `UnknownSort`, or
/// `CriterionMismatch` for a malformed view state; never errors on record
/// content.
pub fn compute_view(
    records: &[Record],
    state: &ViewState,
    registry: &FilterRegistry,
) -> Result<DerivedView> {
    // Reject malformed view state up front, independent of the collection.
    if state.page_size == 0 {
        return Err(ViewError::InvalidPageSize {
            given: state.page_size,
        });
    }
    let comparator = match &state.sort_key {
        Some(name) => Some(
            registry
                .sort(name)
                .ok_or_else(|| ViewError::UnknownSort { name: name.clone() })?,
        ),
        None => None,
    };

    let matched = apply_filters(records, &state.criteria, registry)?;
    let matched = apply_search(&matched, &state.search, registry.search_fields());
    let total_matched = matched.len();

    let ordered = match comparator {
        Some(cmp) => apply_sort(&matched, cmp),
        None => matched,
    };

    let page = paginate(&ordered, state.page_index, state.page_size)?;

    tracing::debug!(
        record_count = records.len(),
        matched = total_matched,
        page_index = state.page_index,
        page_size = state.page_size,
        "computed derived view"
    );

    Ok(DerivedView {
        items: page.items,
        total_matched,
        total_pages: page.total_pages,
        page_index: state.page_index,
    })
}
