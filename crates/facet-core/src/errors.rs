use thiserror::Error;

/// Result type alias using ViewError
pub type Result<T> = std::result::Result<T, ViewError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewErrorKind {
    /// Page size is zero (would mean divide-by-zero page counts)
    InvalidPageSize,
    /// Criteria referenced a filter name with no registry binding
    UnknownFilter,
    /// View state referenced a sort key with no registry binding
    UnknownSort,
    /// Criterion variant is incompatible with the bound predicate kind
    CriterionMismatch,
    /// Record input was not a JSON array of objects
    MalformedRecords,
}

impl ViewErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ViewErrorKind::InvalidPageSize => "ERR_INVALID_PAGE_SIZE",
            ViewErrorKind::UnknownFilter => "ERR_UNKNOWN_FILTER",
            ViewErrorKind::UnknownSort => "ERR_UNKNOWN_SORT",
            ViewErrorKind::CriterionMismatch => "ERR_CRITERION_MISMATCH",
            ViewErrorKind::MalformedRecords => "ERR_MALFORMED_RECORDS",
        }
    }
}

/// Error taxonomy for view-state validation
///
/// The engine performs no I/O, so every error here is a malformed-input
/// rejection raised synchronously before any derivation work. Absent field
/// values are never errors; they are valid data states handled by predicate
/// semantics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// Page size must be at least 1
    #[error("Invalid page size: {given} (must be at least 1)")]
    InvalidPageSize { given: usize },

    /// Criteria referenced a filter that was never registered
    #[error("Unknown filter referenced in criteria: {name}")]
    UnknownFilter { name: String },

    /// View state referenced a sort key that was never registered
    #[error("Unknown sort key: {name}")]
    UnknownSort { name: String },

    /// Criterion is incompatible with the predicate kind bound to the filter
    #[error("Criterion {criterion} is not valid for filter '{filter}' (kind: {kind})")]
    CriterionMismatch {
        filter: String,
        kind: String,
        criterion: String,
    },

    /// Record input could not be interpreted as a collection
    #[error("Malformed record input: {reason}")]
    MalformedRecords { reason: String },
}

impl ViewError {
    /// Get the error kind
    pub fn kind(&self) -> ViewErrorKind {
        match self {
            ViewError::InvalidPageSize { .. } => ViewErrorKind::InvalidPageSize,
            ViewError::UnknownFilter { .. } => ViewErrorKind::UnknownFilter,
            ViewError::UnknownSort { .. } => ViewErrorKind::UnknownSort,
            ViewError::CriterionMismatch { .. } => ViewErrorKind::CriterionMismatch,
            ViewError::MalformedRecords { .. } => ViewErrorKind::MalformedRecords,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
