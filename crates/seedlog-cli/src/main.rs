//! seedlog CLI
//!
//! Emits records through a facade from the command line and prints the
//! correlation seed, if any.

use clap::{Parser, Subcommand};
use seedlog_core::logging_facility::{init, Profile};
use seedlog_core::{log_op_error, FacadeConfig, FacadeError, LogFacade};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "seedlog")]
#[command(about = "seedlog - correlated structured logging", long_about = None)]
struct Cli {
    /// TOML config file; flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log directory
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Base file name
    #[arg(long, global = true)]
    name: Option<String>,

    /// Minimum severity written to the log file
    #[arg(long, global = true)]
    level: Option<String>,

    /// Print the console mirror line instead of the pretty console sink
    #[arg(long, global = true)]
    console_mirror: bool,

    /// Do not attach correlation seeds (they are on by default)
    #[arg(long, global = true)]
    no_seed: bool,

    /// Attach the call stack to every record
    #[arg(long, global = true)]
    stack: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit one record from typed arguments
    Emit(commands::emit::EmitArgs),
    /// Emit one record from a JSON array of 2 or 3 positional arguments
    Raw(commands::raw::RawArgs),
}

impl Cli {
    /// Defaults, then config file, then `SEEDLOG_*` environment, then flags
    ///
    /// Seeding is decided by `--no-seed` alone, whatever the config file says.
    fn facade_config(&self) -> Result<FacadeConfig, FacadeError> {
        let config = match &self.config {
            Some(path) => FacadeConfig::from_file(path)?,
            None => FacadeConfig::new("logs", "seedlog"),
        };
        let mut config = config.apply_env()?;

        if let Some(dir) = &self.dir {
            config.log_directory = dir.clone();
        }
        if let Some(name) = &self.name {
            config.base_file_name = name.clone();
        }
        if let Some(level) = &self.level {
            config.min_severity = level.parse()?;
        }
        config.use_console_mirror |= self.console_mirror;
        config.use_seed_generation = !self.no_seed;
        config.use_stack_capture |= self.stack;
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let logger = LogFacade::open(cli.facade_config()?)?;

    let seed = match cli.command {
        Commands::Emit(args) => commands::emit::execute(&logger, args)?,
        Commands::Raw(args) => commands::raw::execute(&logger, args)?,
    };

    if let Some(seed) = seed {
        println!("{}", seed);
    }
    logger.flush();
    Ok(())
}

fn main() {
    init(Profile::Development);
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log_op_error!("cli", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
