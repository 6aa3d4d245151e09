//! Raw command
//!
//! Usage: seedlog raw <SEVERITY> '<JSON array>'
//!
//! The array holds the positional arguments exactly as a dynamic caller
//! would pass them: `["message", ["tag"]]` or `["message", {..}, ["tag"]]`.

use clap::Args;
use seedlog_core::{CorrelationSeed, LogFacade, Severity};
use serde_json::Value;

#[derive(Debug, Args)]
pub struct RawArgs {
    /// trace, debug, info, warn, error or fatal
    pub severity: Severity,

    /// JSON array of positional arguments
    pub args: String,
}

/// Execute raw command
pub fn execute(
    logger: &LogFacade,
    args: RawArgs,
) -> Result<Option<CorrelationSeed>, Box<dyn std::error::Error>> {
    let parsed: Value = serde_json::from_str(&args.args)?;
    // A bare value is a single positional argument
    let positional = match parsed {
        Value::Array(items) => items,
        other => vec![other],
    };
    Ok(logger.log_args(args.severity, &positional)?)
}
