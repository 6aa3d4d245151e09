//! seedlog core - a correlating facade over a structured logging engine
//!
//! This crate provides:
//! - `LogFacade`: argument validation, correlation seeds, stack capture,
//!   console mirroring and delegation to an engine
//! - The `LogEngine` / `ChildLogger` seam with a `tracing`-backed engine
//!   and an in-memory capture engine
//! - `FacadeConfig`: per-instance configuration (code, TOML, environment)
//! - A diagnostics facility for the facade's own events

pub mod call;
pub mod config;
pub mod console;
pub mod engine;
pub mod errors;
pub mod facade;
pub mod logging_facility;
pub mod stack;

// Re-export commonly used types
pub use call::{LogCall, LogData};
pub use config::FacadeConfig;
pub use console::{BufferSink, ConsoleSink, StdoutSink};
pub use engine::{CapturedRecord, ChildLogger, LogEngine, MemoryEngine, TracingEngine};
pub use errors::{ErrorKind, FacadeError, Result};
pub use facade::LogFacade;
pub use seedlog_core_types::{ChildLogContext, CorrelationSeed, LevelFilter, Severity};
