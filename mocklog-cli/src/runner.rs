//! CLI runner: config loading, logger selection and the check itself.

use std::path::Path;
use std::sync::Arc;

use crate::error::CliError;
use mocklog::config::{ConfigFile, LoggerBackend};
use mocklog::log::Logger;
use mocklog::logging::{init_logging, LoggingGuard};
use mocklog::service::Service;

/// Owns the selected logger for the lifetime of the command.
pub struct CliRunner {
    logger: Arc<dyn Logger>,
    backend: LoggerBackend,
    /// Keeps the tracing file writer alive; `None` for the console backend
    _logging_guard: Option<LoggingGuard>,
}

impl CliRunner {
    /// Load the config (if a path is given) and build the logger.
    ///
    /// `backend_override` wins over the `[logger] backend` setting.
    pub fn new(
        config_path: Option<&Path>,
        backend_override: Option<LoggerBackend>,
    ) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::default(),
        };

        let backend = backend_override.unwrap_or(config.logger.backend);

        let logging_guard = if backend.needs_subscriber() {
            Some(init_logging(&config.logging)?)
        } else {
            None
        };

        Ok(Self {
            logger: backend.build(),
            backend,
            _logging_guard: logging_guard,
        })
    }

    /// The backend chosen after applying overrides.
    pub fn backend(&self) -> LoggerBackend {
        self.backend
    }

    /// Run the emptiness check on `thing` and report the outcome.
    ///
    /// Returns what the service answered.
    pub fn check_thing(&self, thing: &str) -> bool {
        let service = Service::new(Arc::clone(&self.logger));

        let empty = service.is_thing_empty(thing);
        if empty {
            self.logger.info("Thing is empty\n");
        } else {
            self.logger.error("Thing is not empty\n");
        }
        empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_console() {
        let runner = CliRunner::new(None, None).unwrap();
        assert_eq!(runner.backend(), LoggerBackend::Console);
    }

    #[test]
    fn test_check_thing_answers_like_the_service() {
        let runner = CliRunner::new(None, Some(LoggerBackend::Console)).unwrap();
        assert!(runner.check_thing(""));
        assert!(!runner.check_thing("not empty"));
    }

    #[test]
    fn test_config_selects_backend() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");
        std::fs::write(&path, "[logger]\nbackend = stdout\n").unwrap();

        let runner = CliRunner::new(Some(&path), None).unwrap();
        assert_eq!(runner.backend(), LoggerBackend::Console);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");
        std::fs::write(&path, "[logger]\nbackend = syslog\n").unwrap();

        let result = CliRunner::new(Some(&path), None);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
