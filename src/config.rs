//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/findpad/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_HISTORY_LIMIT;
use crate::search::MatchMode;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Default state of the case-sensitive toggle
    #[serde(default)]
    pub case_sensitive: bool,
    /// Default match mode (`exact` or `fuzzy`)
    #[serde(default)]
    pub match_mode: MatchMode,
    /// Default state of the wraparound toggle
    #[serde(default = "default_wrap_search")]
    pub wrap_search: bool,
    /// Files larger than this are refused on open
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
    /// Undo steps retained per document
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_wrap_search() -> bool {
    true
}

fn default_max_file_size_mb() -> u64 {
    10
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            match_mode: MatchMode::default(),
            wrap_search: default_wrap_search(),
            max_file_size_mb: default_max_file_size_mb(),
            history_limit: default_history_limit(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Size limit in bytes
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}
