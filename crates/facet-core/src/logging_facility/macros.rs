//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use facet_core::log_op_start;
/// log_op_start!("compute_view");
/// log_op_start!("compute_view", record_count = 120);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = facet_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = facet_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use facet_core::log_op_end;
/// log_op_end!("compute_view", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = facet_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = facet_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error must be a [`crate::errors::ViewError`] so the stable error
/// code lands in the structured fields.
///
/// # Example
///
/// ```
/// # use facet_core::{log_op_error, errors::ViewError};
/// let err = ViewError::UnknownFilter { name: "dept".to_string() };
/// log_op_error!("compute_view", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let view_err: &$crate::errors::ViewError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = facet_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?view_err.kind(),
            err_code = view_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let view_err: &$crate::errors::ViewError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = facet_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?view_err.kind(),
            err_code = view_err.code(),
            $($field)*
        );
    }};
}
