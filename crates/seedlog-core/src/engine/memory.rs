//! In-memory capture engine
//!
//! Keeps every accepted record so tests (and embedders that want to
//! inspect output) can assert on exactly what the facade handed over.

use super::{ChildLogger, LevelCell, LogEngine};
use crate::call::LogData;
use crate::errors::Result;
use seedlog_core_types::{ChildLogContext, Severity};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A record as received by the engine
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedRecord {
    pub severity: Severity,
    pub context: ChildLogContext,
    pub data: Option<LogData>,
    pub message: String,
}

#[derive(Debug)]
struct MemoryState {
    records: Mutex<Vec<CapturedRecord>>,
    flushes: AtomicUsize,
    level: LevelCell,
}

/// Engine handle; clones share the same captured records
#[derive(Clone, Debug)]
pub struct MemoryEngine {
    state: Arc<MemoryState>,
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new(Severity::Trace)
    }
}

impl MemoryEngine {
    pub fn new(level: Severity) -> Self {
        Self {
            state: Arc::new(MemoryState {
                records: Mutex::new(Vec::new()),
                flushes: AtomicUsize::new(0),
                level: LevelCell::new(level),
            }),
        }
    }

    /// Get all captured records
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.state
            .records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn last_record(&self) -> Option<CapturedRecord> {
        self.records().pop()
    }

    /// Clear all captured records
    pub fn clear(&self) {
        self.state.records.lock().map(|mut r| r.clear()).ok();
    }

    /// Number of `flush` requests received
    pub fn flush_count(&self) -> usize {
        self.state.flushes.load(Ordering::SeqCst)
    }

    /// Count records matching a predicate
    pub fn count_records<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedRecord) -> bool,
    {
        self.records().iter().filter(|r| predicate(r)).count()
    }

    /// Assert that a record with the given severity and message exists
    ///
    /// # Panics
    ///
    /// Panics if no such record was captured
    pub fn assert_record_exists(&self, severity: Severity, message: &str) {
        let records = self.records();
        let found = records
            .iter()
            .any(|r| r.severity == severity && r.message == message);
        assert!(
            found,
            "Expected record {} '{}' not found in {} captured records",
            severity,
            message,
            records.len()
        );
    }

    fn push(&self, record: CapturedRecord) {
        self.state
            .records
            .lock()
            .map(|mut records| records.push(record))
            .ok();
    }
}

struct MemoryChild<'a> {
    engine: &'a MemoryEngine,
    context: ChildLogContext,
}

impl ChildLogger for MemoryChild<'_> {
    fn context(&self) -> &ChildLogContext {
        &self.context
    }

    fn log(&self, severity: Severity, data: Option<&LogData>, message: &str) {
        if !self.engine.state.level.allows(severity) {
            return;
        }
        self.engine.push(CapturedRecord {
            severity,
            context: self.context.clone(),
            data: data.cloned(),
            message: message.to_string(),
        });
    }
}

impl LogEngine for MemoryEngine {
    fn child(&self, context: ChildLogContext) -> Box<dyn ChildLogger + '_> {
        Box::new(MemoryChild {
            engine: self,
            context,
        })
    }

    fn flush(&self) {
        self.state.flushes.fetch_add(1, Ordering::SeqCst);
    }

    fn level(&self) -> String {
        self.state.level.get().to_string()
    }

    fn set_level(&self, level: &str) -> Result<()> {
        self.state.level.set(level).map(|_| ())
    }
}
