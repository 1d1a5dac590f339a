//! CLI configuration file and command-line overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "spendkeep.toml";
const DEFAULT_DB_FILE: &str = "spendkeep.sqlite3";
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Relative directories resolve against the working directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}

fn default_log_level() -> String {
    spendkeep_core::default_log_level().to_string()
}

impl Config {
    /// Loads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default())
            }
            Err(err) => {
                return Err(format!(
                    "failed to read config `{}`: {err}",
                    path.display()
                ))
            }
        };
        Self::parse(&raw).map_err(|err| format!("invalid config `{}`: {err}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Absolute log directory, defaulting to `<cwd>/logs`.
    pub fn log_dir(&self, cwd: &Path) -> PathBuf {
        let dir = self
            .logging
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
        if dir.is_absolute() {
            dir
        } else {
            cwd.join(dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::path::{Path, PathBuf};

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage.path, PathBuf::from("spendkeep.sqlite3"));
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse(
            r#"
            [storage]
            path = "/data/books.sqlite3"

            [logging]
            level = "warn"
            dir = "diag"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.path, PathBuf::from("/data/books.sqlite3"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.log_dir(Path::new("/home/me")), PathBuf::from("/home/me/diag"));
    }

    #[test]
    fn missing_config_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spendkeep.toml");
        std::fs::write(&path, "[storage\npath = 1").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.contains("invalid config"));
    }
}
