//! Record severities and level filtering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a single record, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// All severities, least severe first
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Lowercase canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A level name that is neither a severity nor `silent`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    pub name: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown level '{}'", self.name)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Severity {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| ParseLevelError {
                name: s.to_string(),
            })
    }
}

/// Minimum severity an engine lets through
///
/// `Silent` drops every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFilter {
    At(Severity),
    Silent,
}

impl LevelFilter {
    /// Whether a record at `severity` passes this filter
    pub fn allows(&self, severity: Severity) -> bool {
        match self {
            LevelFilter::At(min) => severity >= *min,
            LevelFilter::Silent => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelFilter::At(severity) => severity.as_str(),
            LevelFilter::Silent => "silent",
        }
    }
}

impl From<Severity> for LevelFilter {
    fn from(severity: Severity) -> Self {
        LevelFilter::At(severity)
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "silent" {
            return Ok(LevelFilter::Silent);
        }
        s.parse::<Severity>().map(LevelFilter::At)
    }
}
