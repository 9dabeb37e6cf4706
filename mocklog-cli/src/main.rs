//! mocklog CLI - runs the emptiness check once through an injected logger.
//!
//! With no arguments the console logger is used and the output is:
//!
//! ```text
//! [DEBUG] checking if 'not empty' is empty
//! [ERROR] Thing is not empty
//!
//! ```

mod error;
mod runner;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::CliError;
use crate::runner::CliRunner;
use mocklog::config::LoggerBackend;

/// Value checked when `--thing` is not given.
const DEFAULT_THING: &str = "not empty";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    /// Tagged lines on stdout, e.g. "[DEBUG] message"
    Console,
    /// Forward to the tracing subscriber
    Tracing,
}

impl From<BackendArg> for LoggerBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Console => LoggerBackend::Console,
            BackendArg::Tracing => LoggerBackend::Tracing,
        }
    }
}

#[derive(Parser)]
#[command(name = "mocklog")]
#[command(version = mocklog::VERSION)]
#[command(about = "Check whether a thing is empty, logging through an injected logger", long_about = None)]
struct Args {
    /// Value handed to the emptiness check
    #[arg(long, default_value = DEFAULT_THING)]
    thing: String,

    /// Logger backend (overrides the config file)
    #[arg(long, value_enum)]
    backend: Option<BackendArg>,

    /// INI config file with [logger] and [logging] sections
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        e.exit();
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config.as_deref(), args.backend.map(Into::into))?;
    tracing::debug!(backend = %runner.backend(), thing = %args.thing, "running check");

    runner.check_thing(&args.thing);
    Ok(())
}
