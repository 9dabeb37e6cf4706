//! INI parsing: `Ini` → `ConfigFile`.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use super::LoggerBackend;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [logger] section
    if let Some(section) = ini.section(Some("logger")) {
        if let Some(v) = section.get("backend") {
            config.logger.backend =
                v.parse::<LoggerBackend>()
                    .map_err(|_| ConfigFileError::InvalidValue {
                        section: "logger".to_string(),
                        key: "backend".to_string(),
                        value: v.to_string(),
                        reason: "must be one of: console, tracing".to_string(),
                    })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = Some(expand_tilde(v));
            }
        }
    }

    Ok(config)
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
