use seedlog_core_types::ParseLevelError;
use thiserror::Error;

/// Result type alias using FacadeError
pub type Result<T> = std::result::Result<T, FacadeError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic
/// handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Call validation
    InvalidArgumentCount,
    InvalidDataType,
    InvalidTagsType,

    // Engine
    UnknownLevel,
    EngineInit,

    // Configuration
    Config,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgumentCount => "ERR_INVALID_ARGUMENT_COUNT",
            ErrorKind::InvalidDataType => "ERR_INVALID_DATA_TYPE",
            ErrorKind::InvalidTagsType => "ERR_INVALID_TAGS_TYPE",
            ErrorKind::UnknownLevel => "ERR_UNKNOWN_LEVEL",
            ErrorKind::EngineInit => "ERR_ENGINE_INIT",
            ErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Errors raised by the facade, its engines and its configuration layer
#[derive(Error, Debug)]
pub enum FacadeError {
    // ===== Call validation =====
    /// Positional call with fewer than 2 or more than 3 arguments
    #[error("Expected 2 or 3 arguments, got {count}")]
    InvalidArgumentCount { count: usize },

    /// Data argument is not a non-null structured mapping
    #[error("Param 'data' must be an object, got {found}")]
    InvalidDataType { found: String },

    /// Tags argument is not a sequence of strings
    #[error("Param 'tags' must be an array of strings: {reason}")]
    InvalidTagsType { reason: String },

    // ===== Engine =====
    /// Level name not understood by the engine
    #[error("Unknown level: {name}")]
    UnknownLevel { name: String },

    /// Engine sinks could not be set up
    #[error("Failed to initialise log engine at {path}: {reason}")]
    EngineInit { path: String, reason: String },

    // ===== Configuration =====
    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },
}

impl FacadeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FacadeError::InvalidArgumentCount { .. } => ErrorKind::InvalidArgumentCount,
            FacadeError::InvalidDataType { .. } => ErrorKind::InvalidDataType,
            FacadeError::InvalidTagsType { .. } => ErrorKind::InvalidTagsType,
            FacadeError::UnknownLevel { .. } => ErrorKind::UnknownLevel,
            FacadeError::EngineInit { .. } => ErrorKind::EngineInit,
            FacadeError::Config { .. } => ErrorKind::Config,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<ParseLevelError> for FacadeError {
    fn from(err: ParseLevelError) -> Self {
        FacadeError::UnknownLevel { name: err.name }
    }
}

impl From<toml::de::Error> for FacadeError {
    fn from(err: toml::de::Error) -> Self {
        FacadeError::Config {
            reason: err.to_string(),
        }
    }
}
