//! Shell configuration persistence
//!
//! Stores user preferences in `~/.config/markpad/config.yaml`

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::scroll::DEFAULT_ALIGN_OFFSET;

/// Shell configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Carry the reading position across view mode switches
    #[serde(default = "default_preserve_position")]
    pub preserve_position: bool,
    /// Debounce between a text commit and the heading reindex
    #[serde(default = "default_index_debounce_ms")]
    pub index_debounce_ms: u64,
    /// Layout units between the container top and an aligned heading
    #[serde(default = "default_align_offset")]
    pub align_offset: f32,
}

fn default_preserve_position() -> bool {
    true
}

fn default_index_debounce_ms() -> u64 {
    150
}

fn default_align_offset() -> f32 {
    DEFAULT_ALIGN_OFFSET
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            preserve_position: default_preserve_position(),
            index_debounce_ms: default_index_debounce_ms(),
            align_offset: default_align_offset(),
        }
    }
}

impl ShellConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
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

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .context("no config directory available")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("serializing config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("writing config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
