//! mocklog - a logging abstraction that can be mocked in unit tests
//!
//! Components depend on the [`log::Logger`] trait and receive a concrete
//! logger from whoever builds them. The binary injects a console logger;
//! tests inject a harness logger whose output can be recorded and asserted
//! on.
//!
//! ```
//! use mocklog::harness::{MockableHarnessLogger, Recorder};
//! use mocklog::service::Service;
//!
//! let recorder = Recorder::new();
//! let service = Service::new(MockableHarnessLogger::new(&recorder));
//!
//! assert!(service.is_thing_empty(""));
//! assert_eq!(recorder.messages(), vec!["[DEBUG(test)] checking if '' is empty"]);
//! ```

pub mod config;
pub mod harness;
pub mod log;
pub mod logging;
pub mod service;

/// Version of the mocklog library and CLI.
///
/// Defined once in the workspace `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
