//! User configuration, read from `config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;

use crate::error::CliError;

fn default_page_size() -> usize {
    tabula::DEFAULT_PAGE_SIZE
}

fn default_language() -> String {
    "en".into()
}

fn default_log_level() -> String {
    "info".into()
}

/// Settings read at startup. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_language")]
    pub language: String,
    /// Translations file; the built-in English labels are used without one.
    #[serde(default)]
    pub translations: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            language: default_language(),
            translations: None,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(CliError::io(path, e)),
        };
        serde_json::from_str(&json).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn level(&self) -> Result<LevelFilter, CliError> {
        self.log_level
            .parse()
            .map_err(|_| CliError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"page_size": 5, "log_level": "debug"}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.language, "en");
        assert_eq!(config.level().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "page_size = 5").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(CliError::Config { .. })));
    }

    #[test]
    fn test_bad_level() {
        let config = AppConfig {
            log_level: "loud".into(),
            ..AppConfig::default()
        };
        assert!(matches!(config.level(), Err(CliError::LogLevel(_))));
    }
}
