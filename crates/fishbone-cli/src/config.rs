//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use fishbone_correlation::CorrelationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog JSON file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Selection snapshot file; defaults to `~/.fishbone/selection.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_path: Option<String>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Correlation engine defaults
    #[serde(default)]
    pub correlation: CorrelationConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Directory holding the config and default selection file.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".fishbone"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a specific file, or defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolved catalog path.
    pub fn catalog_file(&self) -> Result<PathBuf> {
        expand_home(&self.catalog_path)
    }

    /// Resolved selection snapshot path.
    pub fn selection_file(&self) -> Result<PathBuf> {
        match &self.selection_path {
            Some(path) => expand_home(path),
            None => Ok(Self::dir()?.join("selection.json")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            selection_path: None,
            settings: Settings::default(),
            correlation: CorrelationConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home =
                dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
