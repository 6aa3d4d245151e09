//! Emit command
//!
//! Usage: seedlog emit <SEVERITY> <MESSAGE> [--data <JSON>] [--tag <TAG>]...

use clap::Args;
use seedlog_core::{CorrelationSeed, LogCall, LogFacade, Severity};

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// trace, debug, info, warn, error or fatal
    pub severity: Severity,

    pub message: String,

    /// JSON object attached as the record's data
    #[arg(short, long)]
    pub data: Option<String>,

    /// Tag, repeatable; order is kept
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

/// Execute emit command
pub fn execute(
    logger: &LogFacade,
    args: EmitArgs,
) -> Result<Option<CorrelationSeed>, Box<dyn std::error::Error>> {
    let call = LogCall::new(args.severity, args.message, args.tags);
    let call = match args.data {
        Some(text) => {
            let data: serde_json::Value = serde_json::from_str(&text)?;
            call.with_data(&data)?
        }
        None => call,
    };
    Ok(logger.log(call))
}
