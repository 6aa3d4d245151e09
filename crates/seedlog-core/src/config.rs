//! Facade configuration
//!
//! A `FacadeConfig` is fixed when a facade is constructed and owned by
//! that facade alone. It can be built in code, parsed from TOML, and
//! overridden from `SEEDLOG_*` environment variables.

use crate::errors::{FacadeError, Result};
use chrono::{Datelike, NaiveDate};
use seedlog_core_types::schema::LOG_FILE_EXT;
use seedlog_core_types::Severity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_DIR: &str = "SEEDLOG_DIR";
pub const ENV_NAME: &str = "SEEDLOG_NAME";
pub const ENV_LEVEL: &str = "SEEDLOG_LEVEL";

fn default_min_severity() -> Severity {
    Severity::Info
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacadeConfig {
    /// Directory the log file lives in (created on demand)
    pub log_directory: PathBuf,
    /// File name stem; the date and extension are appended
    pub base_file_name: String,
    #[serde(default = "default_min_severity")]
    pub min_severity: Severity,
    /// Write the facade's own console line instead of the engine's pretty console sink
    #[serde(default)]
    pub use_console_mirror: bool,
    #[serde(default)]
    pub use_seed_generation: bool,
    #[serde(default)]
    pub use_stack_capture: bool,
}

impl FacadeConfig {
    /// Config with `info` threshold and every optional behaviour off
    pub fn new(log_directory: impl Into<PathBuf>, base_file_name: impl Into<String>) -> Self {
        Self {
            log_directory: log_directory.into(),
            base_file_name: base_file_name.into(),
            min_severity: default_min_severity(),
            use_console_mirror: false,
            use_seed_generation: false,
            use_stack_capture: false,
        }
    }

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    pub fn with_console_mirror(mut self, enabled: bool) -> Self {
        self.use_console_mirror = enabled;
        self
    }

    pub fn with_seed_generation(mut self, enabled: bool) -> Self {
        self.use_seed_generation = enabled;
        self
    }

    pub fn with_stack_capture(mut self, enabled: bool) -> Self {
        self.use_stack_capture = enabled;
        self
    }

    /// Parse a config from TOML text
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::Config` if the text is not a valid config.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::Config` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| FacadeError::Config {
            reason: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply `SEEDLOG_DIR`, `SEEDLOG_NAME` and `SEEDLOG_LEVEL` overrides
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::UnknownLevel` if `SEEDLOG_LEVEL` is not a severity name.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `FacadeError::UnknownLevel` if the level override is not a severity name.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DIR) {
            self.log_directory = PathBuf::from(dir);
        }
        if let Some(name) = lookup(ENV_NAME) {
            self.base_file_name = name;
        }
        if let Some(level) = lookup(ENV_LEVEL) {
            self.min_severity = level.parse()?;
        }
        Ok(self)
    }

    /// File name for `date`: `<base>_<day>_<month>_<year>.log`, no zero padding
    pub fn log_file_name(&self, date: NaiveDate) -> String {
        format!(
            "{}_{}_{}_{}.{}",
            self.base_file_name,
            date.day(),
            date.month(),
            date.year(),
            LOG_FILE_EXT
        )
    }

    pub fn log_file_path(&self, date: NaiveDate) -> PathBuf {
        self.log_directory.join(self.log_file_name(date))
    }
}
