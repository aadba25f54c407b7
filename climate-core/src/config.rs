use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Bind address used when neither the config file nor the CLI sets one.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Database path used when neither the config file nor the CLI sets one.
pub const DEFAULT_DATABASE: &str = "climate.sqlite";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// database = "/var/lib/climate/hawaii.sqlite"
/// bind = "0.0.0.0:5000"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Path to the SQLite database file.
    pub database: Option<PathBuf>,

    /// Socket address to bind the HTTP server on, e.g. "127.0.0.1:5000".
    pub bind: Option<String>,
}

impl Config {
    /// Load config from the platform config directory, or return an empty
    /// default if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, fall back to built-in defaults.
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path. Unlike [`Config::load`], a missing
    /// file here is an error: the operator asked for this file specifically.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "climate-api", "climate-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Database path with the built-in default applied.
    pub fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    /// Bind address with the built-in default applied.
    pub fn bind_addr(&self) -> String {
        self.bind.clone().unwrap_or_else(|| DEFAULT_BIND.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = Config::default();

        assert_eq!(cfg.database_path(), PathBuf::from(DEFAULT_DATABASE));
        assert_eq!(cfg.bind_addr(), DEFAULT_BIND);
    }

    #[test]
    fn load_from_parses_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "database = \"/data/hawaii.sqlite\"").expect("write");
        writeln!(file, "bind = \"0.0.0.0:8080\"").expect("write");

        let cfg = Config::load_from(file.path()).expect("config must parse");

        assert_eq!(cfg.database_path(), PathBuf::from("/data/hawaii.sqlite"));
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn load_from_errors_on_missing_explicit_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("config.toml");

        let err = Config::load_from(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_from_errors_on_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "database = [not toml").expect("write");

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn partial_config_keeps_defaults_for_the_rest() {
        let cfg: Config = toml::from_str("bind = \"127.0.0.1:9000\"").expect("parse");

        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.database_path(), PathBuf::from(DEFAULT_DATABASE));
    }
}
