//! Command-line argument parsing for the shell inspector
//!
//! Supports:
//! - Alternate config and layout files
//! - Viewport size for resolving percentage sizes
//! - Scripted resizer drags and panel toggles
//! - Saving the resulting layout

use clap::Parser;
use std::path::PathBuf;

use crate::layout::PanelKind;

/// Headless inspector for the modeler shell chrome
#[derive(Parser, Debug)]
#[command(
    name = "modeler-shell",
    version,
    about = "Inspect and script the modeler shell layout"
)]
pub struct CliArgs {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Layout file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, value_name = "PX", default_value_t = 1280.0)]
    pub width: f64,

    /// Viewport height in pixels
    #[arg(long, value_name = "PX", default_value_t = 800.0)]
    pub height: f64,

    /// Drag a panel's resizer by DELTA pixels (positive grows)
    #[arg(long, num_args = 2, value_names = ["PANEL", "DELTA"], allow_hyphen_values = true)]
    pub drag: Option<Vec<String>>,

    /// Toggle a panel open or closed (bottom, side, variables)
    #[arg(long, value_name = "PANEL")]
    pub toggle: Option<String>,

    /// Write the resulting layout back to the layout file
    #[arg(long)]
    pub save: bool,
}

/// A resizer drag to replay before rendering
#[derive(Debug, Clone, PartialEq)]
pub struct DragRequest {
    pub panel: PanelKind,
    /// Growth in pixels; negative shrinks
    pub delta: f64,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub config_path: Option<PathBuf>,
    pub layout_path: Option<PathBuf>,
    pub viewport: (f64, f64),
    pub drag: Option<DragRequest>,
    pub toggle: Option<PanelKind>,
    pub save: bool,
}

fn parse_panel(name: &str) -> Result<PanelKind, String> {
    PanelKind::from_name(name).ok_or_else(|| format!("Unknown panel: {}", name))
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err("Viewport must be positive".to_string());
        }

        let drag = match self.drag.as_deref() {
            None => None,
            Some([panel, delta]) => Some(DragRequest {
                panel: parse_panel(panel)?,
                delta: delta
                    .parse()
                    .map_err(|_| format!("Invalid drag delta: {}", delta))?,
            }),
            Some(_) => return Err("--drag takes PANEL and DELTA".to_string()),
        };

        let toggle = self.toggle.as_deref().map(parse_panel).transpose()?;

        Ok(StartupConfig {
            config_path: self.config,
            layout_path: self.layout,
            viewport: (self.width, self.height),
            drag,
            toggle,
            save: self.save,
        })
    }
}
