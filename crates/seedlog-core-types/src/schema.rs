//! Canonical schema constants for emitted records and diagnostics
//!
//! These constants keep field names identical across the file sink,
//! the console sinks and test assertions.

// Record fields
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_TAGS: &str = "tags";
pub const FIELD_SEED: &str = "seed";
pub const FIELD_STACK: &str = "stack";
pub const FIELD_DATA: &str = "data";

/// Fields the engine's pretty console sink never prints
pub const CONSOLE_HIDDEN_FIELDS: [&str; 3] = [FIELD_SEED, FIELD_TAGS, FIELD_STACK];

// Diagnostic fields
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";

// Log file naming
pub const LOG_FILE_EXT: &str = "log";
