//! Diagnostic macros
//!
//! The facade's own diagnostics (engine setup, level changes, flush
//! failures) go to the ambient `tracing` subscriber, never into the
//! records the facade writes for its callers.

/// Log a completed facade operation at debug level
///
/// # Example
///
/// ```
/// # use seedlog_core::log_op;
/// log_op!("set_level");
/// log_op!("set_level", level = "debug");
/// ```
#[macro_export]
macro_rules! log_op {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            $($field)*
        );
    };
}

/// Log a failed facade operation at warn level
///
/// `$err` only needs `Display`; extra fields follow it.
///
/// # Example
///
/// ```
/// # use seedlog_core::log_op_error;
/// let err = std::io::Error::other("disk full");
/// log_op_error!("flush", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            error = %$err,
        );
    };
    ($op:expr, $err:expr, $($field:tt)*) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            error = %$err,
            $($field)*
        );
    };
}
