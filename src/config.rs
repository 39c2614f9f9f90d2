//! User configuration for the termspan CLI.
//!
//! Loaded from `<config_dir>/termspan/config.toml`, or from the path in
//! `TERMSPAN_CONFIG`. A missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TERMSPAN_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine the user config directory")]
    NoConfigDir,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
}

/// Settings for wrapping output in a standalone page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Wrap output in a full HTML page
    pub enabled: bool,
    /// Page title
    pub title: String,
    /// Embed the class stylesheet in the page
    pub stylesheet: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            title: "Terminal output".to_string(),
            stylesheet: true,
        }
    }
}

impl DocumentConfig {
    pub fn to_document(&self) -> Document {
        Document::new(self.title.clone()).with_stylesheet(self.stylesheet)
    }
}

impl Config {
    /// Resolve the config file path.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("termspan").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
