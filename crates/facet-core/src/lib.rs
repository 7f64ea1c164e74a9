//! facet core - deterministic in-memory collection-view engine
//!
//! This crate provides the foundational types and operations for facet,
//! including:
//! - Schema-less Record model with dot-path field access
//! - FieldAccessor combinators with multi-path fallback
//! - Declarative filter criteria and page-specific filter registries
//! - Stable sort comparator combinators with explicit fallback chaining
//! - Page-index pagination with deterministic page counts
//! - View composition (filters, search, sort, paginate) and grouped counts
//!
//! Every operation is synchronous and pure: given the same records and view
//! state, the derived view is always identical. The engine holds no shared
//! mutable state, so independent callers may invoke it concurrently without
//! coordination.

pub mod accessor;
pub mod criteria;
pub mod errors;
pub mod grouped;
pub mod logging_facility;
pub mod paginate;
pub mod record;
pub mod registry;
pub mod sort;
pub mod value;
pub mod view;

// Re-export commonly used types
pub use accessor::FieldAccessor;
pub use criteria::{Criteria, Criterion};
pub use errors::{Result, ViewError, ViewErrorKind};
pub use grouped::{grouped_counts, GroupedCount};
pub use paginate::{paginate, PageSlice};
pub use record::Record;
pub use registry::{FilterRegistry, PredicateKind};
pub use sort::{by_value, with_fallback, Comparator, SortOrder};
pub use view::{apply_filters, apply_search, apply_sort, compute_view, DerivedView, ViewState};
