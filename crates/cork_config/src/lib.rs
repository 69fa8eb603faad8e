//! Configuration management for Corkboard
//!
//! This crate handles loading and validating `.corkboard/config.toml`

use cork_common::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Workspace root path (set programmatically, not in TOML)
    #[serde(skip)]
    pub root: PathBuf,

    /// Undo/redo history settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Durable storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cross-tab sync settings
    #[serde(default)]
    pub sync: SyncSettings,
}

/// History configuration ([history])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum undo depth; the oldest snapshot is discarded beyond this.
    /// 0 means unbounded.
    #[serde(default = "default_history_depth")]
    pub depth: usize,
}

fn default_history_depth() -> usize {
    100
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            depth: default_history_depth(),
        }
    }
}

/// Storage configuration ([storage])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the durable record, relative to the workspace root
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".corkboard".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Sync configuration ([sync])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Per-subscriber queue capacity on the in-process bus. A receiver that
    /// falls further behind drops the oldest frames and logs a warning.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_channel_capacity() -> usize {
    64
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Load configuration from workspace root
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let config_path = workspace_root.join(".corkboard/config.toml");

        if !config_path.exists() {
            return Ok(Self {
                root: workspace_root.to_path_buf(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| BoardError::ConfigError(format!("Failed to read config: {}", e)))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| BoardError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.root = workspace_root.to_path_buf();
        Ok(config)
    }
}
