//! CLI error handling with user-friendly messages.

use std::fmt;
use std::process;

use mocklog::config::ConfigFileError;
use mocklog::logging::LoggingError;

/// CLI-specific errors.
#[derive(Debug)]
pub enum CliError {
    /// Failed to load the config file
    Config(ConfigFileError),
    /// Failed to install the tracing subscriber
    LoggingInit(LoggingError),
}

impl CliError {
    /// Exit the process with an error message and code 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Config(ConfigFileError::InvalidValue { .. }) = self {
            eprintln!();
            eprintln!("Valid [logger] backend values: console, tracing");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::LoggingInit(e) => Some(e),
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::LoggingInit(e)
    }
}
