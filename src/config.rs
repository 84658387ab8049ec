//! Shell configuration
//!
//! Stores panel defaults and bounds in `~/.config/modeler-shell/config.yaml`.
//! A missing file means defaults; a file that is present but malformed (for
//! example a size typed as `"300"` instead of `300` or `"30%"`) is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resize::{ResizeBounds, ResizeError, SizeSpec};

/// Errors loading or saving configuration and layout files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid bounds for the {panel} panel: {source}")]
    Bounds {
        panel: &'static str,
        source: ResizeError,
    },
    #[error("invalid size for the {panel} panel: {source}")]
    Size {
        panel: &'static str,
        source: ResizeError,
    },
}

/// Defaults and bounds for one resizable panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Whether the panel starts open
    #[serde(default)]
    pub open: bool,
    /// Initial size (pixels or percentage of the viewport)
    pub size: SizeSpec,
    pub min_size: SizeSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<SizeSpec>,
}

impl PanelConfig {
    fn new(open: bool, size: f64, min_size: f64, max_percent: f64) -> Self {
        Self {
            open,
            size: SizeSpec::Pixels(size),
            min_size: SizeSpec::Pixels(min_size),
            max_size: Some(SizeSpec::Percent(max_percent)),
        }
    }

    pub fn bounds(&self) -> Result<ResizeBounds, ResizeError> {
        ResizeBounds::new(self.min_size, self.max_size)
    }
}

fn default_bottom() -> PanelConfig {
    PanelConfig::new(false, 300.0, 130.0, 80.0)
}

fn default_side() -> PanelConfig {
    PanelConfig::new(true, 280.0, 280.0, 70.0)
}

fn default_variables() -> PanelConfig {
    PanelConfig::new(false, 280.0, 280.0, 70.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelsConfig {
    #[serde(default = "default_bottom")]
    pub bottom: PanelConfig,
    #[serde(default = "default_side")]
    pub side: PanelConfig,
    #[serde(default = "default_variables")]
    pub variables: PanelConfig,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            bottom: default_bottom(),
            side: default_side(),
            variables: default_variables(),
        }
    }
}

fn default_max_log_entries() -> usize {
    500
}

/// Settings of the built-in log tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Oldest entries are dropped beyond this count
    #[serde(default = "default_max_log_entries")]
    pub max_entries: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_log_entries(),
        }
    }
}

/// Shell configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub panels: PanelsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl ShellConfig {
    /// Load config from the default location, or defaults if there is none
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Ok(Self::default());
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check that every panel has a usable size and bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        let panels = [
            ("bottom", &self.panels.bottom),
            ("side", &self.panels.side),
            ("variables", &self.panels.variables),
        ];
        for (panel, config) in panels {
            config
                .size
                .validate()
                .map_err(|source| ConfigError::Size { panel, source })?;
            config
                .bounds()
                .map_err(|source| ConfigError::Bounds { panel, source })?;
        }
        Ok(())
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_yaml::to_string(self).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
