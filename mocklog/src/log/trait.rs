//! Logger trait definition.

use std::fmt;
use std::sync::Arc;

/// Severity attached to every log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Error messages
    Error,
}

impl LogLevel {
    /// Tag written inside the brackets of a log line.
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Logging interface for application components.
///
/// Any type providing [`Logger::log`] gets `debug`, `info` and `error` for
/// free and can be handed to anything that takes a `Logger`.
///
/// Logging is best-effort: none of these methods return an error, and an
/// implementation must swallow failures of its underlying sink rather than
/// panic.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared as
/// `Arc<dyn Logger>`.
///
/// # Example
///
/// ```
/// use mocklog::log::{Logger, NoOpLogger};
/// use mocklog::{log_debug, log_info};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// log_info!(logger, "Application started");
/// log_debug!(logger, "{} workers", 4);
/// ```
pub trait Logger: Send + Sync {
    /// Log a message at the specified level.
    ///
    /// This is the only method implementations must provide.
    fn log(&self, level: LogLevel, message: &str);

    /// Log a debug-level message.
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log an info-level message.
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log an error-level message.
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }
}

/// Convenience macros for logging with format strings.
///
/// The arguments are rendered with `format!` before reaching the logger, so
/// the logger always receives a plain message.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log::Logger::debug(&$logger, &::std::format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log::Logger::info(&$logger, &::std::format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log::Logger::error(&$logger, &::std::format!($($arg)*))
    };
}
