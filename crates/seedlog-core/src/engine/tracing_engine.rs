//! `tracing`-backed engine
//!
//! Each engine owns its own `Dispatch`, so several facades with
//! different sinks can coexist in one process without touching the
//! global subscriber. Sinks:
//!
//! - file: JSON lines, buffered, directory created on demand
//! - console (optional): human-readable, with `seed`, `tags` and `stack` hidden
//!
//! `fatal` has no `tracing` level of its own; it is emitted at `ERROR`
//! and told apart by the `severity` field.
//!
//! `tracing` field values are scalars, so `tags` and `data` reach the file
//! as JSON text inside a string: `"tags":"[\"io\"]"`. Readers decode the
//! field value a second time to get the array or object back.

use super::{ChildLogger, LevelCell, LogEngine};
use crate::call::LogData;
use crate::config::FacadeConfig;
use crate::errors::{FacadeError, Result};
use crate::{log_op, log_op_error};
use chrono::NaiveDate;
use seedlog_core_types::schema::{CONSOLE_HIDDEN_FIELDS, FIELD_MESSAGE};
use seedlog_core_types::{ChildLogContext, CorrelationSeed, Severity};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{Dispatch, Level};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format;
use tracing_subscriber::layer::SubscriberExt;

/// Buffered handle to the log file, shared by the file layer and `flush`
#[derive(Clone)]
struct SharedFile(Arc<Mutex<BufWriter<RollingFileAppender>>>);

impl SharedFile {
    fn lock_err() -> io::Error {
        io::Error::other("log file lock poisoned")
    }
}

impl Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().map_err(|_| Self::lock_err())?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.lock().map_err(|_| Self::lock_err())?.flush()
    }
}

pub struct TracingEngine {
    dispatch: Dispatch,
    file: SharedFile,
    path: PathBuf,
    level: LevelCell,
}

impl TracingEngine {
    /// Open the file sink for `date` and assemble the sinks `config` asks for
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::EngineInit` if the log directory or file cannot be created.
    pub fn new(config: &FacadeConfig, date: NaiveDate) -> Result<Self> {
        let path = config.log_file_path(date);
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(config.log_file_name(date))
            .build(&config.log_directory)
            .map_err(|e| {
                let err = FacadeError::EngineInit {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                };
                log_op_error!("engine_init", err);
                err
            })?;

        let file = SharedFile(Arc::new(Mutex::new(BufWriter::new(appender))));
        let writer = file.clone();
        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .with_target(false)
            .with_ansi(false)
            .with_writer(move || writer.clone());

        // The console mirror replaces the pretty console sink
        let console_layer = (!config.use_console_mirror).then(|| {
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .fmt_fields(format::debug_fn(|writer, field, value| {
                    let name = field.name();
                    if CONSOLE_HIDDEN_FIELDS.contains(&name) {
                        Ok(())
                    } else if name == FIELD_MESSAGE {
                        write!(writer, "{:?} ", value)
                    } else {
                        write!(writer, "{}={:?} ", name, value)
                    }
                }))
                .with_writer(io::stdout)
        });

        let subscriber = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        log_op!(
            "engine_init",
            path = %path.display(),
            level = config.min_severity.as_str(),
            pretty_console = !config.use_console_mirror
        );

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            file,
            path,
            level: LevelCell::new(config.min_severity),
        })
    }

    /// Path of the file sink
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush_file(&self) -> io::Result<()> {
        self.file.clone().flush()
    }
}

impl Drop for TracingEngine {
    fn drop(&mut self) {
        if let Err(e) = self.flush_file() {
            log_op_error!("flush", e);
        }
    }
}

struct TracingChild<'a> {
    engine: &'a TracingEngine,
    context: ChildLogContext,
    tags_json: String,
}

macro_rules! emit_at {
    ($level:expr, $severity:expr, $child:expr, $data:expr, $message:expr) => {
        tracing::event!(
            $level,
            severity = $severity.as_str(),
            tags = %$child.tags_json,
            seed = $child.context.seed().map(CorrelationSeed::as_str),
            stack = $child.context.stack(),
            data = $data,
            "{}",
            $message
        )
    };
}

impl ChildLogger for TracingChild<'_> {
    fn context(&self) -> &ChildLogContext {
        &self.context
    }

    fn log(&self, severity: Severity, data: Option<&LogData>, message: &str) {
        if !self.engine.level.allows(severity) {
            return;
        }
        let data_json = data.map(|d| serde_json::Value::Object(d.clone()).to_string());
        let data = data_json.as_deref();

        tracing::dispatcher::with_default(&self.engine.dispatch, || match severity {
            Severity::Trace => emit_at!(Level::TRACE, severity, self, data, message),
            Severity::Debug => emit_at!(Level::DEBUG, severity, self, data, message),
            Severity::Info => emit_at!(Level::INFO, severity, self, data, message),
            Severity::Warn => emit_at!(Level::WARN, severity, self, data, message),
            Severity::Error | Severity::Fatal => {
                emit_at!(Level::ERROR, severity, self, data, message)
            }
        });
    }
}

impl LogEngine for TracingEngine {
    fn child(&self, context: ChildLogContext) -> Box<dyn ChildLogger + '_> {
        let tags_json = serde_json::Value::from(context.tags().to_vec()).to_string();
        Box::new(TracingChild {
            engine: self,
            context,
            tags_json,
        })
    }

    fn flush(&self) {
        if let Err(e) = self.flush_file() {
            log_op_error!("flush", e);
        }
    }

    fn level(&self) -> String {
        self.level.get().to_string()
    }

    fn set_level(&self, level: &str) -> Result<()> {
        let level = self.level.set(level)?;
        log_op!("set_level", level = level.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
    }

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_creates_directory_and_dated_file() {
        let dir = TempDir::new().unwrap();
        let config = FacadeConfig::new(dir.path().join("nested/logs"), "svc")
            .with_console_mirror(true);

        let engine = TracingEngine::new(&config, date()).unwrap();
        assert_eq!(engine.path(), dir.path().join("nested/logs/svc_5_3_2026.log"));
        drop(engine);

        assert!(dir.path().join("nested/logs/svc_5_3_2026.log").exists());
    }

    #[test]
    fn test_record_fields_written_as_json() {
        let dir = TempDir::new().unwrap();
        let config = FacadeConfig::new(dir.path(), "svc").with_console_mirror(true);
        let engine = TracingEngine::new(&config, date()).unwrap();

        let seed = CorrelationSeed::from_string("00112233445566778899".to_string());
        let ctx = ChildLogContext::new(vec!["io".to_string()])
            .with_seed(seed)
            .with_stack("at caller");
        let data = serde_json::json!({"code": 28}).as_object().cloned().unwrap();
        engine.child(ctx).log(Severity::Fatal, Some(&data), "disk failure");
        engine.flush();

        let lines = read_lines(engine.path());
        assert_eq!(lines.len(), 1);
        let record = &lines[0];
        assert_eq!(record["message"], "disk failure");
        assert_eq!(record["severity"], "fatal");
        assert_eq!(record["level"], "ERROR");
        assert_eq!(record["seed"], "00112233445566778899");
        assert_eq!(record["stack"], "at caller");
        assert_eq!(record["tags"], r#"["io"]"#);
        assert_eq!(record["data"], r#"{"code":28}"#);
        assert!(record.get("timestamp").is_some());
    }

    #[test]
    fn test_tags_and_data_decode_from_field_text() {
        let dir = TempDir::new().unwrap();
        let config = FacadeConfig::new(dir.path(), "svc").with_console_mirror(true);
        let engine = TracingEngine::new(&config, date()).unwrap();

        let data = serde_json::json!({"user": {"id": 7}, "ok": true})
            .as_object()
            .cloned()
            .unwrap();
        engine
            .child(ChildLogContext::new(vec!["a".to_string(), "b \"q\"".to_string()]))
            .log(Severity::Warn, Some(&data), "nested");
        engine.flush();

        let record = &read_lines(engine.path())[0];
        let tags: Vec<String> = serde_json::from_str(record["tags"].as_str().unwrap()).unwrap();
        assert_eq!(tags, vec!["a".to_string(), "b \"q\"".to_string()]);
        let decoded: serde_json::Value =
            serde_json::from_str(record["data"].as_str().unwrap()).unwrap();
        assert_eq!(decoded["user"]["id"], 7);
        assert_eq!(decoded["ok"], true);
    }

    #[test]
    fn test_optional_fields_absent() {
        let dir = TempDir::new().unwrap();
        let config = FacadeConfig::new(dir.path(), "svc").with_console_mirror(true);
        let engine = TracingEngine::new(&config, date()).unwrap();

        engine
            .child(ChildLogContext::new(vec!["boot".to_string()]))
            .log(Severity::Info, None, "started");
        engine.flush();

        let record = &read_lines(engine.path())[0];
        assert!(record.get("seed").is_none());
        assert!(record.get("stack").is_none());
        assert!(record.get("data").is_none());
    }

    #[test]
    fn test_level_gates_file_output() {
        let dir = TempDir::new().unwrap();
        let config = FacadeConfig::new(dir.path(), "svc")
            .with_console_mirror(true)
            .with_min_severity(Severity::Warn);
        let engine = TracingEngine::new(&config, date()).unwrap();
        assert_eq!(engine.level(), "warn");

        let ctx = ChildLogContext::new(Vec::new());
        engine.child(ctx.clone()).log(Severity::Info, None, "dropped");
        engine.set_level("trace").unwrap();
        engine.child(ctx).log(Severity::Trace, None, "kept");
        engine.flush();

        let lines = read_lines(engine.path());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["message"], "kept");
    }

    #[test]
    fn test_unknown_level_rejected() {
        let dir = TempDir::new().unwrap();
        let config = FacadeConfig::new(dir.path(), "svc").with_console_mirror(true);
        let engine = TracingEngine::new(&config, date()).unwrap();

        let err = engine.set_level("verbose").unwrap_err();
        assert_eq!(err.code(), "ERR_UNKNOWN_LEVEL");
        assert_eq!(engine.level(), "info");
    }

    #[test]
    fn test_init_fails_when_directory_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let config = FacadeConfig::new(blocker.join("logs"), "svc");
        let err = TracingEngine::new(&config, date()).err().unwrap();
        assert_eq!(err.code(), "ERR_ENGINE_INIT");
    }
}
