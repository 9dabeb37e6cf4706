//! INI serialization: `ConfigFile` → commented INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[logger]
; Logger handed to the service:
;   console - tagged lines on stdout, e.g. "[DEBUG] message"
;   tracing - forwarded to the tracing subscriber
backend = {}

[logging]
; Extra log file for the tracing backend (leave empty for stdout only)
file = {}
"#,
        config.logger.backend, log_file,
    )
}

/// Render a path, abbreviating the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerBackend;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_string() {
        let s = to_config_string(&ConfigFile::default());
        assert!(s.contains("[logger]"));
        assert!(s.contains("backend = console"));
        assert!(s.contains("[logging]"));
        assert!(s.contains("file = \n"));
    }

    #[test]
    fn test_config_string_with_values() {
        let mut config = ConfigFile::default();
        config.logger.backend = LoggerBackend::Tracing;
        config.logging.file = Some(PathBuf::from("/tmp/mocklog.log"));

        let s = to_config_string(&config);
        assert!(s.contains("backend = tracing"));
        assert!(s.contains("file = /tmp/mocklog.log"));
    }

    #[test]
    fn test_home_paths_are_abbreviated() {
        if let Some(home) = dirs::home_dir() {
            let s = path_to_string(&home.join("logs/mocklog.log"));
            assert_eq!(s, "~/logs/mocklog.log");
        }
    }
}
