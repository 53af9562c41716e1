//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use chanmon_janitor::JanitorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration, stored at `~/.chanmon/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the event log state file lives
    #[serde(default)]
    pub state_path: Option<PathBuf>,

    /// Where rendered log lines are mirrored; empty disables mirroring
    #[serde(default)]
    pub destination_channel: String,

    /// Age threshold (days) for evicting the oldest bucket
    #[serde(default = "default_retention_days")]
    pub retention_days: u64,

    /// Janitor timer period in seconds
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

fn default_retention_days() -> u64 {
    90
}

fn default_sweep_interval_seconds() -> u64 {
    600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: None,
            destination_channel: String::new(),
            retention_days: 90,
            sweep_interval_seconds: 600,
        }
    }
}

impl Config {
    /// The default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".chanmon").join("config.toml"))
    }

    /// Load configuration from the given path, or the default location.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the given path, or the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Could not serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// The state file path, falling back to `~/.chanmon/log.json`.
    pub fn state_path(&self) -> Result<PathBuf> {
        match &self.state_path {
            Some(p) => Ok(p.clone()),
            None => {
                let home = dirs::home_dir()
                    .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
                Ok(home.join(".chanmon").join("log.json"))
            }
        }
    }

    /// The janitor configuration derived from the retention settings.
    pub fn janitor_config(&self) -> JanitorConfig {
        JanitorConfig {
            retention_days: self.retention_days,
            sweep_interval_seconds: self.sweep_interval_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.retention_days, 90);
        assert_eq!(config.sweep_interval_seconds, 600);
        assert_eq!(config.destination_channel, "");
        assert!(config.state_path.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config.retention_days, 90);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("config.toml");

        let config = Config {
            state_path: Some(dir.path().join("log.json")),
            destination_channel: "#audit".into(),
            retention_days: 30,
            sweep_interval_seconds: 120,
        };
        config.save(Some(&path)).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.retention_days, 30);
        assert_eq!(loaded.sweep_interval_seconds, 120);
        assert_eq!(loaded.destination_channel, "#audit");
        assert_eq!(loaded.state_path, config.state_path);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("retention_days = 7").unwrap();
        assert_eq!(config.retention_days, 7);
        assert_eq!(config.sweep_interval_seconds, 600);
    }

    #[test]
    fn test_janitor_config_mirrors_settings() {
        let config = Config {
            retention_days: 14,
            sweep_interval_seconds: 60,
            ..Default::default()
        };
        let janitor = config.janitor_config();
        assert_eq!(janitor.retention_days, 14);
        assert_eq!(janitor.sweep_interval_seconds, 60);
    }
}
