//! Configuration management for Reframe CLI
//!
//! Stores file locations in ~/.config/reframe/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "reframe";
const CONFIG_FILE: &str = "config.toml";
const DATA_FILE: &str = "user_data.json";
const PASSWORD_FILE: &str = ".owner_password";

/// CLI Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the user record is stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Where the owner password is stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_file: Option<PathBuf>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Data file: explicit override, then config, then the platform data directory
    pub fn resolve_data_file(&self, overridden: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = overridden.or(self.data_file.as_deref()) {
            return Ok(path.to_path_buf());
        }
        let data_dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join(APP_DIR);
        Ok(data_dir.join(DATA_FILE))
    }

    /// Password file: explicit override, then config, then the config directory
    pub fn resolve_password_file(&self, overridden: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = overridden.or(self.password_file.as_deref()) {
            return Ok(path.to_path_buf());
        }
        Ok(Self::config_dir()?.join(PASSWORD_FILE))
    }
}
