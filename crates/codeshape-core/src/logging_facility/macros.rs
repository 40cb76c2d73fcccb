//! Operation boundary macros
//!
//! Each expands to one `tracing` event carrying `component`, `op` and
//! `event`, plus any extra `tracing` fields passed after the fixed ones.
//! Callers must depend on `codeshape-core-types` and `tracing`.

/// Log the start of an operation
///
/// ```
/// # use codeshape_core::log_op_start;
/// log_op_start!("compare", snapshot_path = "new.json");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = codeshape_core_types::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Log the successful end of an operation
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = codeshape_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Log a failed operation with its `err_kind` and `err_code`
///
/// The error is anything convertible into `ExError`.
///
/// ```
/// # use codeshape_core::{log_op_error, errors::CodeShapeError};
/// let err = CodeShapeError::SnapshotNotFound { path: "old.json".to_string() };
/// log_op_error!("compare", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = codeshape_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($($field)*)?
        )
    }};
}
