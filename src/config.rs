//! Configuration loading and merging for the CLI output.
//!
//! Configuration never changes parse semantics, only how results are printed.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Output format for parsed commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Re-quoted command lines, one per command.
    #[default]
    Text,
    /// A single JSON array of command objects.
    Json,
    /// One JSON object per line.
    Jsonl,
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output format; text when unset.
    pub format: Option<Format>,

    /// JSON output settings.
    pub json: JsonConfig,

    /// Text output settings.
    pub text: TextConfig,
}

/// Settings for the `json` format.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct JsonConfig {
    /// Pretty-print the array.
    pub pretty: bool,
}

/// Settings for the `text` format.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TextConfig {
    /// Prefix each line with its 1-based position in the script.
    pub indexed: bool,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // User config (~/.config/shline/config.toml)
        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        // Project config (.shline.toml in cwd) takes precedence
        if let Some(cwd) = cwd
            && let Some(project_config) = Self::load_project_config(cwd)?
        {
            config.merge(project_config);
        }

        Ok(config)
    }

    /// The effective output format.
    pub fn format(&self) -> Format {
        self.format.unwrap_or_default()
    }

    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(toml::from_str(&content)?));
        }
        Ok(None)
    }

    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        let path = cwd.join(".shline.toml");
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(toml::from_str(&content)?));
        }
        Ok(None)
    }

    /// User config path. Respects SHLINE_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("SHLINE_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("shline/config.toml"))
    }

    /// Merge another config into this one (other takes precedence).
    fn merge(&mut self, other: Config) {
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.json.pretty {
            self.json.pretty = true;
        }
        if other.text.indexed {
            self.text.indexed = true;
        }
    }
}
