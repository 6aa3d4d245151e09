//! Core types shared across seedlog crates
//!
//! This crate provides the value types that flow between the facade,
//! its engines and the CLI:
//!
//! - **Severity**: the six record severities and the engine level filter
//! - **Correlation**: `CorrelationSeed`, the per-call token handed back to callers
//! - **Context**: `ChildLogContext`, the fields merged into every emitted record
//! - **Schema constants**: canonical field keys

pub mod context;
pub mod correlation;
pub mod schema;
pub mod severity;

pub use context::ChildLogContext;
pub use correlation::CorrelationSeed;
pub use severity::{LevelFilter, ParseLevelError, Severity};
