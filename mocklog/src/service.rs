//! Example service that receives its logger by injection.
//!
//! The service never decides where its logs go. The binary hands it a
//! [`ConsoleLogger`](crate::log::ConsoleLogger); tests hand it a
//! [`MockableHarnessLogger`](crate::harness::MockableHarnessLogger) over a
//! [`Recorder`](crate::harness::Recorder) and assert on what was logged.

use crate::log::Logger;
use crate::log_debug;

/// A service that depends on a [`Logger`].
///
/// `L` can be an owned logger, a reference, or an `Arc<dyn Logger>`.
///
/// ```
/// use mocklog::harness::{MockableHarnessLogger, Recorder};
/// use mocklog::service::Service;
///
/// let recorder = Recorder::new();
/// let service = Service::new(MockableHarnessLogger::new(&recorder));
///
/// assert!(!service.is_thing_empty("hello"));
/// assert_eq!(
///     recorder.messages(),
///     vec!["[DEBUG(test)] checking if 'hello' is empty"]
/// );
/// ```
#[derive(Debug)]
pub struct Service<L> {
    logger: L,
}

impl<L: Logger> Service<L> {
    /// Create a service that logs through `logger`.
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    /// The logger this service was built with.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Returns true when `thing` is the empty string.
    ///
    /// Always logs one debug line before answering.
    pub fn is_thing_empty(&self, thing: &str) -> bool {
        log_debug!(self.logger, "checking if '{}' is empty", thing);
        thing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{HarnessLogger, MockableHarnessLogger, Recorder, TestContext};
    use crate::log::{LogLevel, NoOpLogger};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_empty_thing_is_empty() {
        let recorder = Recorder::new();
        let service = Service::new(MockableHarnessLogger::new(&recorder));

        assert!(service.is_thing_empty(""));
        assert_eq!(
            recorder.messages(),
            vec!["[DEBUG(test)] checking if '' is empty"]
        );
    }

    #[test]
    fn test_non_empty_thing_is_not_empty() {
        let recorder = Recorder::new();
        let service = Service::new(MockableHarnessLogger::new(&recorder));

        assert!(!service.is_thing_empty("hello"));
        assert_eq!(
            recorder.messages(),
            vec!["[DEBUG(test)] checking if 'hello' is empty"]
        );
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let service = Service::new(NoOpLogger);
        assert!(!service.is_thing_empty(" "));
        assert!(!service.is_thing_empty("\n"));
    }

    #[test]
    fn test_one_debug_line_per_call() {
        let recorder = Recorder::new();
        let service = Service::new(MockableHarnessLogger::new(&recorder));

        service.is_thing_empty("a");
        service.is_thing_empty("");
        service.is_thing_empty("b");

        assert_eq!(
            recorder.messages(),
            vec![
                "[DEBUG(test)] checking if 'a' is empty",
                "[DEBUG(test)] checking if '' is empty",
                "[DEBUG(test)] checking if 'b' is empty",
            ]
        );
    }

    #[test]
    fn test_logs_before_answering() {
        struct OrderingLogger {
            events: Arc<Mutex<Vec<String>>>,
        }

        impl Logger for OrderingLogger {
            fn log(&self, level: LogLevel, message: &str) {
                self.events.lock().push(format!("{}:{}", level, message));
            }
        }

        let events = Arc::new(Mutex::new(Vec::new()));
        let service = Service::new(OrderingLogger {
            events: Arc::clone(&events),
        });

        let result = service.is_thing_empty("x");
        events.lock().push(format!("result:{}", result));

        assert_eq!(
            *events.lock(),
            vec!["DEBUG:checking if 'x' is empty", "result:false"]
        );
    }

    #[test]
    fn test_service_with_shared_logger() {
        let logger: Arc<dyn crate::log::Logger> = Arc::new(NoOpLogger);
        let service = Service::new(Arc::clone(&logger));
        assert!(service.is_thing_empty(""));
        assert_eq!(Arc::strong_count(&logger), 2);
    }

    #[test]
    fn test_service_exposes_its_logger() {
        let recorder = Recorder::new();
        let service = Service::new(MockableHarnessLogger::new(&recorder));

        service.logger().info("direct");

        assert_eq!(recorder.messages(), vec!["[INFO(test)] direct"]);
    }

    #[test]
    fn test_service_with_mockable_logger_over_real_context() {
        let t = TestContext::new("test_service_with_mockable_logger_over_real_context");
        let service = Service::new(MockableHarnessLogger::new(&t));
        assert!(service.is_thing_empty(""));
    }

    #[test]
    fn test_service_with_harness_logger() {
        // Works the same as the mockable logger, but nothing can confirm it.
        let t = TestContext::new("test_service_with_harness_logger");
        let service = Service::new(HarnessLogger::new(&t));
        assert!(service.is_thing_empty(""));
        assert!(!service.is_thing_empty("not empty"));
    }
}
