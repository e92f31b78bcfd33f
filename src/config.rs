//! Inspector configuration persistence
//!
//! Stores user preferences in `~/.config/syntax-inspector/inspector.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::panel::DockPosition;

/// Inspector configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Where the panel docks relative to the editor
    #[serde(default)]
    pub dock: DockPosition,

    /// Panel width (left/right) or height (bottom) in logical pixels
    #[serde(default = "default_panel_size")]
    pub panel_size: f32,

    /// Columns of indentation per tree level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Height of one outline row in logical pixels
    #[serde(default = "default_row_height")]
    pub row_height: f32,

    /// List anonymous grammar nodes (punctuation, keywords)
    #[serde(default)]
    pub show_anonymous_nodes: bool,

    /// Show the position footer under the rows
    #[serde(default = "default_true")]
    pub footer: bool,
}

fn default_panel_size() -> f32 {
    280.0
}

fn default_indent_width() -> usize {
    2
}

fn default_row_height() -> f32 {
    18.0
}

fn default_true() -> bool {
    true
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            dock: DockPosition::default(),
            panel_size: default_panel_size(),
            indent_width: default_indent_width(),
            row_height: default_row_height(),
            show_anonymous_nodes: false,
            footer: true,
        }
    }
}

impl InspectorConfig {
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

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: InspectorConfig = serde_yaml::from_str("dock: left\n").unwrap();
        assert_eq!(config.dock, DockPosition::Left);
        assert_eq!(config.panel_size, 280.0);
        assert_eq!(config.indent_width, 2);
        assert!(config.footer);
        assert!(!config.show_anonymous_nodes);
    }

    #[test]
    fn test_empty_mapping_is_default() {
        let config: InspectorConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, InspectorConfig::default());
    }
}
