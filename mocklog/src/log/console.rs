//! Standard output logger.

use crate::log::{LogLevel, Logger};
use std::io::{self, Write};

/// Logger that writes one tagged line per message to standard output.
///
/// Lines have the form `[LEVEL] message\n`. Write errors (for example a
/// closed pipe) are ignored.
///
/// # Example
///
/// ```
/// use mocklog::log::{ConsoleLogger, Logger};
///
/// let logger = ConsoleLogger::new();
/// logger.info("listening"); // prints "[INFO] listening"
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    /// Create a new console logger.
    pub fn new() -> Self {
        Self
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        let stdout = io::stdout();
        let _ = write_line(&mut stdout.lock(), level, message);
    }
}

fn write_line<W: Write>(out: &mut W, level: LogLevel, message: &str) -> io::Result<()> {
    writeln!(out, "[{}] {}", level.tag(), message)
}
