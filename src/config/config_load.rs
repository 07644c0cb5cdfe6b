// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{AnimationConfig, ConfigError, StyleConfig, WindowConfig};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then the working
    /// directory. Falls back to defaults if neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        let candidates = [Self::exe_dir_path(), Some(PathBuf::from(CONFIG_FILE))];

        for path in candidates.into_iter().flatten() {
            if path.exists() {
                let config = Self::load_from_path(&path)?;
                info!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        warn!("no {} found, using built-in defaults", CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.animation.validate()?;
        self.style.validate()
    }

    /// One node per palette entry.
    pub fn node_count(&self) -> usize {
        self.style.palette.len()
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        Some(exe_path.parent()?.join(CONFIG_FILE))
    }
}
