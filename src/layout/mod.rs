//! Panel layout - committed geometry and the composers that render it
//!
//! ## Architecture
//!
//! - `LayoutState`: one persisted object with a slice per panel
//!   (`panel`, `sidePanel`, `variablesPanel`)
//! - `PanelKind`: which edge resizes and which slots feed each panel
//! - `PanelComposer`: tabs from a slot plus a `ResizableContainer`, committing
//!   into its own slice only
//! - `StatusBar`: the two additive status-bar regions

mod panel;
mod state;
mod status_bar;

pub use panel::{PanelComposer, PanelView, TabView, TAB_PROP};
pub use state::{LayoutState, PanelKind, PanelLayout};
pub use status_bar::{StatusBar, StatusBarView};
