//! Tracing subscriber setup for the `tracing` logger backend.
//!
//! - Always prints to stdout
//! - Optionally also writes to a log file (truncated on start)
//! - Filter configurable via the RUST_LOG environment variable, default `info`
//!
//! The console backend never calls into this module.

use crate::config::LoggingSettings;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log directory or file could not be prepared
    #[error("cannot prepare log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A global subscriber is already installed
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping it flushes and closes the log file writer, if there is one.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global `tracing` subscriber described by `settings`.
///
/// # Errors
///
/// Fails if the log file cannot be created or a subscriber is already set.
pub fn init_logging(settings: &LoggingSettings) -> Result<LoggingGuard, LoggingError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_target(false);

    let (file_layer, file_guard) = match &settings.file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create the log directory, clear the previous log, and open a
/// non-blocking writer onto it.
fn file_writer(
    path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), LoggingError> {
    let io_err = |source: io::Error| LoggingError::LogFile {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io_err(io::Error::new(io::ErrorKind::InvalidInput, "no file name")))?;

    prepare_log_file(dir, path).map_err(io_err)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

/// Create `dir` if needed and truncate `path`.
fn prepare_log_file(dir: &Path, path: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(path, "")
}
