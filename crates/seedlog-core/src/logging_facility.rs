//! Diagnostics facility for seedlog itself
//!
//! The facade writes caller records through its engine. Its own
//! diagnostics take a separate path:
//! - Single initialization point via `init(profile)`
//! - Structured macros (`log_op!`, `log_op_error!`) carrying `component` and `op`
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use seedlog_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
