//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "SHIPTRACK_CONFIG";

/// Environment variable naming the dataset file
pub const DATA_ENV: &str = "SHIPTRACK_DATA";

/// Get the config file path
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shiptrack")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset loaded when `--data` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Default output format
    pub format: String,

    /// Default direction for `sort --by`
    pub descending: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            format: "table".to_string(),
            descending: false,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        let path = config_file_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Save to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&config_file_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["data_file", "format", "descending"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in sample)".to_string()),
            ),
            "format" => Some(self.format.clone()),
            "descending" => Some(self.descending.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "data_file" => {
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "format" => {
                if !OutputFormat::is_known(value) {
                    anyhow::bail!("Invalid format '{}': expected table, json or csv", value);
                }
                self.format = value.to_lowercase();
            }
            "descending" => {
                self.descending = value
                    .parse()
                    .with_context(|| format!("Invalid value for descending: '{}'", value))?;
            }
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}

/// Where the shipment dataset comes from, highest precedence first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// `--data <path>`; `-` means stdin
    Flag(PathBuf),
    /// `SHIPTRACK_DATA`
    Env(PathBuf),
    /// `data_file` in the config file
    ConfigFile(PathBuf),
    /// Built-in sample dataset
    Sample,
}

impl DataSource {
    /// Pick the dataset source.
    ///
    /// clap folds `SHIPTRACK_DATA` into `--data`, so a flag value equal to
    /// the environment value is attributed to the environment.
    pub fn resolve(flag: Option<&Path>, env: Option<&Path>, config: &Config) -> Self {
        match (flag, env) {
            (Some(flag), Some(env)) if flag == env => Self::Env(env.to_path_buf()),
            (Some(flag), _) => Self::Flag(flag.to_path_buf()),
            (None, Some(env)) => Self::Env(env.to_path_buf()),
            (None, None) => match &config.data_file {
                Some(path) => Self::ConfigFile(path.clone()),
                None => Self::Sample,
            },
        }
    }

    /// Resolve using the process environment
    pub fn from_env(flag: Option<&Path>, config: &Config) -> Self {
        let env = std::env::var_os(DATA_ENV).map(PathBuf::from);
        Self::resolve(flag, env.as_deref(), config)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Flag(path) | Self::Env(path) | Self::ConfigFile(path) => Some(path),
            Self::Sample => None,
        }
    }

    pub fn is_stdin(&self) -> bool {
        self.path().is_some_and(|p| p.as_os_str() == "-")
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(path) if path.as_os_str() == "-" => write!(f, "stdin (--data -)"),
            Self::Flag(path) => write!(f, "{} (--data)", path.display()),
            Self::Env(path) => write!(f, "{} ({})", path.display(), DATA_ENV),
            Self::ConfigFile(path) => write!(f, "{} (config data_file)", path.display()),
            Self::Sample => write!(f, "built-in sample"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.format, "table");
        assert!(!config.descending);
        assert_eq!(config.get("data_file").unwrap(), "(built-in sample)");
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("format", "JSON").unwrap();
        config.set("descending", "true").unwrap();
        config.set("data_file", "/tmp/shipments.csv").unwrap();

        assert_eq!(config.get("format").unwrap(), "json");
        assert_eq!(config.get("descending").unwrap(), "true");
        assert_eq!(config.get("data_file").unwrap(), "/tmp/shipments.csv");

        config.set("data_file", "").unwrap();
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("format", "xml").is_err());
        assert!(config.set("descending", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("format", "csv").unwrap();
        config.set("data_file", "shipments.csv").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "descending = true\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.descending);
        assert_eq!(loaded.format, "table");
        assert!(loaded.data_file.is_none());
    }

    #[test]
    fn test_data_source_precedence() {
        let mut config = Config::default();
        assert_eq!(DataSource::resolve(None, None, &config), DataSource::Sample);

        config.set("data_file", "cfg.csv").unwrap();
        assert_eq!(
            DataSource::resolve(None, None, &config),
            DataSource::ConfigFile(PathBuf::from("cfg.csv"))
        );

        let env = Path::new("env.csv");
        assert_eq!(
            DataSource::resolve(Some(env), Some(env), &config),
            DataSource::Env(env.to_path_buf())
        );

        let flag = Path::new("flag.csv");
        let source = DataSource::resolve(Some(flag), Some(env), &config);
        assert_eq!(source, DataSource::Flag(flag.to_path_buf()));
        assert_eq!(source.to_string(), "flag.csv (--data)");
    }

    #[test]
    fn test_stdin_source() {
        let source = DataSource::resolve(Some(Path::new("-")), None, &Config::default());
        assert!(source.is_stdin());
        assert_eq!(source.to_string(), "stdin (--data -)");
        assert!(!DataSource::Sample.is_stdin());
        assert!(DataSource::Sample.path().is_none());
    }
}
