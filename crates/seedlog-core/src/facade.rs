//! The logging facade
//!
//! `LogFacade` validates a call, builds the child context (tags, plus a
//! correlation seed and a call stack when enabled), mirrors the line to
//! the console when the mirror is on, and hands the record to its
//! engine.
//!
//! # Example
//!
//! ```
//! use seedlog_core::{FacadeConfig, LogFacade, MemoryEngine};
//!
//! let engine = MemoryEngine::default();
//! let config = FacadeConfig::new("logs", "app").with_seed_generation(true);
//! let logger = LogFacade::with_engine(config, engine.clone());
//!
//! let seed = logger.error("disk failure", ["io"]).unwrap();
//! assert_eq!(engine.last_record().unwrap().context.seed(), Some(&seed));
//! ```

use crate::call::LogCall;
use crate::config::FacadeConfig;
use crate::console::{self, ConsoleSink, StdoutSink};
use crate::engine::{LogEngine, TracingEngine};
use crate::errors::Result;
use crate::stack;
use chrono::Local;
use seedlog_core_types::{ChildLogContext, CorrelationSeed, Severity};
use serde::Serialize;
use serde_json::Value;

pub struct LogFacade<E: LogEngine = TracingEngine> {
    config: FacadeConfig,
    engine: E,
    console: Box<dyn ConsoleSink>,
}

impl LogFacade<TracingEngine> {
    /// Open a facade on the `tracing` engine, file dated today
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::EngineInit` if the log file cannot be created.
    pub fn open(config: FacadeConfig) -> Result<Self> {
        let engine = TracingEngine::new(&config, Local::now().date_naive())?;
        Ok(Self::with_engine(config, engine))
    }
}

macro_rules! severity_methods {
    ($($severity:ident => $plain:ident, $with:ident;)*) => {
        $(
            #[doc = concat!("Log at `", stringify!($plain), "` with a message and tags")]
            pub fn $plain<I, T>(&self, message: impl Into<String>, tags: I) -> Option<CorrelationSeed>
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                self.log(LogCall::new(Severity::$severity, message, tags))
            }

            #[doc = concat!("Log at `", stringify!($plain), "` with a message, a data object and tags")]
            ///
            /// # Errors
            ///
            /// Returns `FacadeError::InvalidDataType` if `data` does not serialize to an object.
            pub fn $with<D, I, T>(
                &self,
                message: impl Into<String>,
                data: &D,
                tags: I,
            ) -> Result<Option<CorrelationSeed>>
            where
                D: Serialize + ?Sized,
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                let call = LogCall::new(Severity::$severity, message, tags).with_data(data)?;
                Ok(self.log(call))
            }
        )*
    };
}

impl<E: LogEngine> LogFacade<E> {
    /// Wrap an existing engine; console mirror lines go to stdout
    pub fn with_engine(config: FacadeConfig, engine: E) -> Self {
        Self {
            config,
            engine,
            console: Box::new(StdoutSink),
        }
    }

    /// Send console mirror lines somewhere other than stdout
    pub fn with_console_sink(mut self, sink: impl ConsoleSink + 'static) -> Self {
        self.console = Box::new(sink);
        self
    }

    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    severity_methods! {
        Trace => trace, trace_with;
        Debug => debug, debug_with;
        Info => info, info_with;
        Warn => warn, warn_with;
        Error => error, error_with;
        Fatal => fatal, fatal_with;
    }

    /// Log from 2 or 3 positional arguments: `[message, tags]` or `[message, data, tags]`
    ///
    /// # Errors
    ///
    /// `InvalidArgumentCount`, `InvalidDataType` or `InvalidTagsType`;
    /// nothing is emitted when validation fails.
    pub fn log_args(&self, severity: Severity, args: &[Value]) -> Result<Option<CorrelationSeed>> {
        let call = LogCall::from_args(severity, args)?;
        Ok(self.log(call))
    }

    /// Emit an already validated call
    ///
    /// Returns the seed attached to the record, except for `info`: an
    /// info call returns the seed that was attached before the call,
    /// and a facade call never starts with one, so `info` returns
    /// `None` even when its record carries a seed.
    pub fn log(&self, call: LogCall) -> Option<CorrelationSeed> {
        let LogCall {
            severity,
            message,
            data,
            tags,
        } = call;

        let mut context = ChildLogContext::new(tags);
        if self.config.use_seed_generation {
            context = context.with_seed(CorrelationSeed::generate());
        }
        if self.config.use_stack_capture {
            context = context.with_stack(stack::capture());
        }

        if self.config.use_console_mirror {
            let line =
                console::format_line(&console::now_timestamp(), &context, &message, data.as_ref());
            self.console.write_line(&line);
        }

        let returned = match severity {
            Severity::Info => None,
            _ => context.seed().cloned(),
        };

        self.engine.child(context).log(severity, data.as_ref(), &message);
        returned
    }

    /// Ask the engine to write out buffered records
    pub fn flush(&self) {
        self.engine.flush();
    }

    /// Change the engine level; the name is interpreted by the engine
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::UnknownLevel` if the engine rejects `level`.
    pub fn set_level(&self, level: &str) -> Result<()> {
        self.engine.set_level(level)
    }

    pub fn level(&self) -> String {
        self.engine.level()
    }
}
