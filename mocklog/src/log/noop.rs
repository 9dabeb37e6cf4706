//! No-operation logger implementation.

use crate::log::{LogLevel, Logger};

/// A logger that discards all messages.
///
/// Useful when a component needs a `Logger` but the test does not care
/// about its output.
///
/// ```
/// use mocklog::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info("This message is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _message: &str) {}
}
