//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};

/// Logger implementation that delegates to the `tracing` crate.
///
/// Output goes wherever the installed subscriber sends it; see
/// [`crate::logging::init_logging`]. Without a subscriber every call is a
/// no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing logger adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }
    }
}
