//! Configuration for the `mocklog` binary.
//!
//! Settings come from an optional INI file; anything the file leaves out
//! keeps its default, and the defaults reproduce the plain console run.
//!
//! ```ini
//! [logger]
//! backend = console
//!
//! [logging]
//! file = ~/.mocklog/mocklog.log
//! ```
//!
//! - [`ConfigFile`] loads and saves the whole file
//! - [`LoggerBackend`] picks which `Logger` the service is given

mod backend;
mod file;
mod parser;
mod settings;
mod writer;

pub use backend::{LoggerBackend, ParseBackendError};
pub use file::ConfigFileError;
pub use settings::{ConfigFile, LoggerSettings, LoggingSettings};
