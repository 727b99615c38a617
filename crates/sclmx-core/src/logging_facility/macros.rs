//! Canonical logging macros
//!
//! Every operation boundary in the crate is logged through these so the
//! `component`/`op`/`event` fields are always present.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use sclmx_core::log_op_start;
/// log_op_start!("reconcile");
/// log_op_start!("fetch_snapshot", project = "PRJ1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use sclmx_core::log_op_end;
/// log_op_end!("reconcile", duration_ms = 3);
/// log_op_end!("reconcile", duration_ms = 3, added = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is borrowed; anything convertible into `ExError` through a
/// clone is accepted (`SclmError`, `ExError`).
///
/// # Example
///
/// ```
/// # use sclmx_core::{log_op_error, errors::SclmError};
/// let err = SclmError::RemoteUnavailable { status: "transport failed".to_string() };
/// log_op_error!("reconcile", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = ::std::clone::Clone::clone(&$err).into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = ::std::clone::Clone::clone(&$err).into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
