//! Page-index pagination
//!
//! Pages are 0-based, half-open slices of an already-ordered sequence. Page
//! counts follow one convention throughout the engine:
//! `total_pages = max(1, ceil(n / page_size))` - an empty collection still
//! reports exactly one, empty, page.

use crate::errors::{Result, ViewError};
use crate::record::Record;

/// One computed page slice with the total page count for the sequence
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice {
    /// Records on the requested page, in sequence order
    pub items: Vec<Record>,
    /// Total pages at this page size, minimum 1
    pub total_pages: usize,
}

/// Slice one page out of an ordered sequence
///
/// The slice is `[page_index * page_size, (page_index + 1) * page_size)`
/// clamped to the available bounds; an out-of-range `page_index` yields an
/// empty page, never an error. The input is never mutated.
///
/// # Errors
///
/// Returns `InvalidPageSize` when `page_size` is zero.
pub fn paginate(records: &[Record], page_index: usize, page_size: usize) -> Result<PageSlice> {
    if page_size == 0 {
        return Err(ViewError::InvalidPageSize { given: page_size });
    }

    let total_pages = std::cmp::max(1, records.len().div_ceil(page_size));

    let start = page_index.saturating_mul(page_size);
    let end = std::cmp::min(start.saturating_add(page_size), records.len());
    let items = if start < records.len() {
        records[start..end].to_vec()
    } else {
        Vec::new()
    };

    Ok(PageSlice { items, total_pages })
}
