//! Logger backend selection.

use crate::log::{ConsoleLogger, Logger, TracingLogger};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Which [`Logger`] implementation the binary hands to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggerBackend {
    /// Plain tagged lines on standard output
    #[default]
    Console,
    /// Forward to the `tracing` subscriber
    Tracing,
}

/// Returned when a backend name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown logger backend '{0}' (expected 'console' or 'tracing')")]
pub struct ParseBackendError(pub String);

impl LoggerBackend {
    /// Name used in the config file and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            LoggerBackend::Console => "console",
            LoggerBackend::Tracing => "tracing",
        }
    }

    /// Whether this backend needs a `tracing` subscriber installed.
    pub fn needs_subscriber(self) -> bool {
        matches!(self, LoggerBackend::Tracing)
    }

    /// Construct the logger for this backend.
    pub fn build(self) -> Arc<dyn Logger> {
        match self {
            LoggerBackend::Console => Arc::new(ConsoleLogger::new()),
            LoggerBackend::Tracing => Arc::new(TracingLogger::new()),
        }
    }
}

impl fmt::Display for LoggerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggerBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" | "stdout" => Ok(LoggerBackend::Console),
            "tracing" => Ok(LoggerBackend::Tracing),
            _ => Err(ParseBackendError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_console() {
        assert_eq!(LoggerBackend::default(), LoggerBackend::Console);
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("console".parse::<LoggerBackend>(), Ok(LoggerBackend::Console));
        assert_eq!("Stdout".parse::<LoggerBackend>(), Ok(LoggerBackend::Console));
        assert_eq!(" TRACING ".parse::<LoggerBackend>(), Ok(LoggerBackend::Tracing));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "syslog".parse::<LoggerBackend>().unwrap_err();
        assert_eq!(err, ParseBackendError("syslog".to_string()));
        assert!(err.to_string().contains("expected 'console' or 'tracing'"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for backend in [LoggerBackend::Console, LoggerBackend::Tracing] {
            assert_eq!(backend.to_string().parse::<LoggerBackend>(), Ok(backend));
        }
    }

    #[test]
    fn test_only_tracing_needs_subscriber() {
        assert!(!LoggerBackend::Console.needs_subscriber());
        assert!(LoggerBackend::Tracing.needs_subscriber());
    }

    #[test]
    fn test_build_returns_usable_logger() {
        let logger = LoggerBackend::Tracing.build();
        logger.debug("built");
    }
}
