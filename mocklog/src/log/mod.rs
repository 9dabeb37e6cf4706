//! Logging abstraction layer.
//!
//! Application code depends on the [`Logger`] trait, never on a concrete
//! sink. The concrete loggers here are interchangeable wherever a `Logger`
//! is expected.
//!
//! # Architecture
//!
//! - `Logger` trait: the three-operation contract (`debug`, `info`, `error`)
//! - `ConsoleLogger`: writes tagged lines to standard output
//! - `TracingLogger`: forwards to the `tracing` crate
//! - `NoOpLogger`: discards everything
//!
//! The test-context loggers live in [`crate::harness`].
//!
//! # Usage
//!
//! ```
//! use mocklog::log::{ConsoleLogger, Logger};
//! use mocklog::log_debug;
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn do_work(&self, job: &str) {
//!         log_debug!(self.logger, "starting {}", job);
//!     }
//! }
//!
//! let component = MyComponent { logger: Arc::new(ConsoleLogger::new()) };
//! component.do_work("demo");
//! ```

mod console;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
