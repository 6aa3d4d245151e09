//! Console mirror
//!
//! When a facade runs with the console mirror on, every accepted call
//! writes one line here in addition to the engine record:
//!
//! ```text
//! 05.03.2026, 14:07:09.042 [io][fatal] disk failure {"code":28}
//! ```

use crate::call::LogData;
use chrono::{DateTime, Local, TimeZone};
use seedlog_core_types::ChildLogContext;
use std::fmt::Display;
use std::sync::{Arc, Mutex};

/// Destination for console mirror lines
pub trait ConsoleSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes mirror lines to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ConsoleSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Collects mirror lines in memory
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }
}

impl ConsoleSink for BufferSink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .map(|mut lines| lines.push(line.to_string()))
            .ok();
    }
}

/// `DD.MM.YYYY, HH:MM:SS.mmm`
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}.{:03}",
        at.format("%d.%m.%Y, %H:%M:%S"),
        at.timestamp_subsec_millis() % 1000
    )
}

/// Current local time in console format
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// `<timestamp> <[tags]> <message>[ <data>]`
pub fn format_line(
    timestamp: &str,
    context: &ChildLogContext,
    message: &str,
    data: Option<&LogData>,
) -> String {
    let mut line = format!("{} {} {}", timestamp, context.bracketed_tags(), message);
    if let Some(data) = data {
        line.push(' ');
        line.push_str(&serde_json::Value::Object(data.clone()).to_string());
    }
    line
}
