//! Logging engines behind the facade
//!
//! An engine accepts records through child loggers, owns the level
//! threshold and persists whatever passes it. The facade assumes nothing
//! about buffering or file handling beyond that.
//!
//! Implementations:
//! - `TracingEngine`: file sink + optional pretty console sink on a
//!   per-instance `tracing` dispatcher
//! - `MemoryEngine`: keeps records in memory for assertions

pub mod memory;
pub mod tracing_engine;

use crate::call::LogData;
use crate::errors::Result;
use seedlog_core_types::{ChildLogContext, LevelFilter, Severity};
use std::sync::RwLock;

pub use memory::{CapturedRecord, MemoryEngine};
pub use tracing_engine::TracingEngine;

/// A logger view carrying a fixed context merged into every record
pub trait ChildLogger {
    fn context(&self) -> &ChildLogContext;

    /// Emit one record; dropped silently if below the engine level
    fn log(&self, severity: Severity, data: Option<&LogData>, message: &str);
}

/// Structured logging backend
pub trait LogEngine: Send + Sync {
    /// Derive a child logger carrying `context`
    fn child(&self, context: ChildLogContext) -> Box<dyn ChildLogger + '_>;

    /// Ask buffered records to be written out
    fn flush(&self);

    /// Current level name
    fn level(&self) -> String;

    /// Replace the level threshold
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::UnknownLevel` if `level` is not a severity name or `silent`.
    fn set_level(&self, level: &str) -> Result<()>;
}

/// Interior-mutable level threshold shared by the engine implementations
#[derive(Debug)]
pub struct LevelCell(RwLock<LevelFilter>);

impl LevelCell {
    pub fn new(initial: impl Into<LevelFilter>) -> Self {
        Self(RwLock::new(initial.into()))
    }

    pub fn get(&self) -> LevelFilter {
        match self.0.read() {
            Ok(level) => *level,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Parse and store a new threshold
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::UnknownLevel` for unrecognised names; the
    /// current threshold is left untouched.
    pub fn set(&self, name: &str) -> Result<LevelFilter> {
        let level: LevelFilter = name.parse()?;
        match self.0.write() {
            Ok(mut current) => *current = level,
            Err(poisoned) => *poisoned.into_inner() = level,
        }
        Ok(level)
    }

    pub fn allows(&self, severity: Severity) -> bool {
        self.get().allows(severity)
    }
}
