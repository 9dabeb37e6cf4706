//! Settings structs, one per `[section]` of the INI file.

use super::LoggerBackend;
use std::path::PathBuf;

/// Complete configuration loaded from an INI file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// `[logger]` section
    pub logger: LoggerSettings,
    /// `[logging]` section
    pub logging: LoggingSettings,
}

/// Which logger the service is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerSettings {
    pub backend: LoggerBackend,
}

/// Settings for the `tracing` subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file written in addition to stdout. `None` disables file output.
    pub file: Option<PathBuf>,
}
