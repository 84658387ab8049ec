//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::layout::PanelKind;
use crate::resize::{Geometry, PointerPosition};

/// Layout messages (panel visibility, tabs, external geometry changes)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Open or close a panel (menu item, keybinding)
    TogglePanel(PanelKind),
    /// Activate a tab by key, opening its panel
    SelectTab { panel: PanelKind, key: String },
    /// Geometry set from outside the resizer (restored session, reset layout)
    SetGeometry { panel: PanelKind, geometry: Geometry },
    /// Restore every panel to its configured defaults
    ResetLayout,
}

/// Pointer messages for resizer drags
#[derive(Debug, Clone, PartialEq)]
pub enum PointerMsg {
    /// Press on a panel's resizer; `measured` is the live laid-out size
    PressResizer {
        panel: PanelKind,
        at: PointerPosition,
        measured: Option<f64>,
    },
    /// Pointer moved anywhere in the window
    Move(PointerPosition),
    /// Pointer released anywhere in the window
    Release(PointerPosition),
    /// Gesture interrupted (window lost focus, pointer capture lost)
    Cancel,
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window inner size changed
    ViewportResized { width: f64, height: f64 },
    /// Re-render all plugins (their shared state changed)
    RenderPlugins,
    /// Action dispatched by a clicked fill (tab action, status-bar button)
    Action(String),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Layout(LayoutMsg),
    Pointer(PointerMsg),
    App(AppMsg),
}
