//! Application configuration.
//!
//! Loaded from `config.toml` in the platform config directory
//! (`~/.config/clipcite/` on Linux). A missing file means defaults; a
//! malformed file is an error rather than a silent fallback.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub watch: WatchConfig,
}

/// Settings for the clipboard watch loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Poll interval in milliseconds.
    pub interval_ms: u64,
    /// Skip the rule table unless the text mentions the citation literal.
    pub precheck: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            precheck: true,
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Path to the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("clipcite").join("config.toml"))
    }
}
