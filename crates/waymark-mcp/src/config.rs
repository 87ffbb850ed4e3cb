//! Configuration file parsing for the MCP server.
//!
//! Loads settings from a TOML file: where (and whether) to archive the
//! roadmap, and whether to save after every mutation.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// MCP server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// SQLite archive path; the roadmap lives only in memory when absent
    #[serde(default)]
    pub archive_path: Option<PathBuf>,

    /// Save to the archive after every mutating tool call (default: true)
    #[serde(default = "default_autosave")]
    pub autosave: bool,
}

/// Default autosave: on
fn default_autosave() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            archive_path: None,
            autosave: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}
