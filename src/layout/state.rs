//! Persisted layout object
//!
//! Each panel keeps its committed geometry in its own slice of one larger
//! layout object. Persistence is someone else's job; this module only knows
//! how to (de)serialize the object and where each panel's slice lives.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, PanelConfig, ShellConfig};
use crate::resize::{Direction, Geometry, ResizeError, SizeSpec};
use crate::slot::names;

/// The resizable panels of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelKind {
    /// Output/problems/log panel below the editor
    Bottom,
    /// Properties/test panel on the right
    Side,
    /// Variables outline on the left
    Variables,
}

impl PanelKind {
    pub const ALL: [PanelKind; 3] = [PanelKind::Bottom, PanelKind::Side, PanelKind::Variables];

    /// Edge of the panel that carries the resizer
    pub fn direction(&self) -> Direction {
        match self {
            PanelKind::Bottom => Direction::Top,
            PanelKind::Side => Direction::Left,
            PanelKind::Variables => Direction::Right,
        }
    }

    /// Slot whose fills become the panel's tabs
    pub fn tabs_slot(&self) -> &'static str {
        match self {
            PanelKind::Bottom => names::BOTTOM_PANEL,
            PanelKind::Side => names::SIDE_PANEL_CONTENT,
            PanelKind::Variables => names::VARIABLES_PANEL,
        }
    }

    /// Slot rendered in the panel header, if any
    pub fn header_slot(&self) -> Option<&'static str> {
        match self {
            PanelKind::Bottom => Some(names::TAB_ACTIONS),
            PanelKind::Side => Some(names::SIDE_PANEL_NAVIGATION),
            PanelKind::Variables => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PanelKind::Bottom => "Panel",
            PanelKind::Side => "Side panel",
            PanelKind::Variables => "Variables",
        }
    }

    /// Key of the panel's section in the config file
    pub fn config_name(&self) -> &'static str {
        match self {
            PanelKind::Bottom => "bottom",
            PanelKind::Side => "side",
            PanelKind::Variables => "variables",
        }
    }

    /// Parse a panel name as typed on the command line
    pub fn from_name(name: &str) -> Option<PanelKind> {
        match name.to_ascii_lowercase().as_str() {
            "bottom" | "panel" => Some(PanelKind::Bottom),
            "side" | "side-panel" | "sidepanel" | "properties" => Some(PanelKind::Side),
            "variables" | "variables-panel" => Some(PanelKind::Variables),
            _ => None,
        }
    }
}

/// Committed state of one panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub open: bool,
    pub size: SizeSpec,
    /// Key of the last active tab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
}

impl PanelLayout {
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.open, self.size)
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.open = geometry.open;
        self.size = geometry.size;
    }
}

impl From<&PanelConfig> for PanelLayout {
    fn from(config: &PanelConfig) -> Self {
        Self {
            open: config.open,
            size: config.size,
            tab: None,
        }
    }
}

/// Layout of all panels, persisted as one object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub panel: PanelLayout,
    pub side_panel: PanelLayout,
    pub variables_panel: PanelLayout,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::from_config(&ShellConfig::default())
    }
}

impl LayoutState {
    /// Initial layout from configured panel defaults
    pub fn from_config(config: &ShellConfig) -> Self {
        Self {
            panel: PanelLayout::from(&config.panels.bottom),
            side_panel: PanelLayout::from(&config.panels.side),
            variables_panel: PanelLayout::from(&config.panels.variables),
        }
    }

    /// Slice owned by a panel
    pub fn slice(&self, kind: PanelKind) -> &PanelLayout {
        match kind {
            PanelKind::Bottom => &self.panel,
            PanelKind::Side => &self.side_panel,
            PanelKind::Variables => &self.variables_panel,
        }
    }

    pub fn slice_mut(&mut self, kind: PanelKind) -> &mut PanelLayout {
        match kind {
            PanelKind::Bottom => &mut self.panel,
            PanelKind::Side => &mut self.side_panel,
            PanelKind::Variables => &mut self.variables_panel,
        }
    }

    pub fn geometry(&self, kind: PanelKind) -> Geometry {
        self.slice(kind).geometry()
    }

    pub fn set_geometry(&mut self, kind: PanelKind, geometry: Geometry) {
        self.slice_mut(kind).set_geometry(geometry);
    }

    /// Replace a slice with geometry from outside the drag machinery
    ///
    /// The layout is left untouched when the size is not usable.
    pub fn try_set_geometry(
        &mut self,
        kind: PanelKind,
        geometry: Geometry,
    ) -> Result<(), ResizeError> {
        let geometry = geometry.validate()?;
        self.set_geometry(kind, geometry);
        Ok(())
    }

    /// Check every slice holds a usable size
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in PanelKind::ALL {
            self.geometry(kind)
                .validate()
                .map_err(|source| ConfigError::Size {
                    panel: kind.config_name(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Read a layout file; a missing file yields `None`
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!("Layout file not found at {}", path.display());
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let layout = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded layout from {}", path.display());
        Ok(Some(layout))
    }

    /// Write the layout file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved layout to {}", path.display());
        Ok(())
    }
}
