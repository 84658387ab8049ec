//! Slot-fill composition
//!
//! Producers publish content under a slot name through a [`Fill`]; consumers
//! render everything published under a name through a [`Slot`]. Neither side
//! knows about the other: the [`SlotRegistry`] handle is the only channel.
//!
//! ## Architecture
//!
//! - `SlotRegistry`: shared, append-ordered map of registrations for one UI root
//! - `Fill`: producer handle; re-renders update in place, drop unregisters
//! - `Slot`: consumer view with an ordering (`Append`, `Priority`, `Grouped`)
//! - `names`: the shell's slot vocabulary (the registry accepts any string)

mod consumer;
mod fill;
mod registry;

pub use consumer::Slot;
pub use fill::Fill;
pub use registry::{order_registrations, FillId, FillMeta, Registration, SlotOrder, SlotRegistry};

/// Slot names defined by the shell
pub mod names {
    /// Tabs of the bottom panel (output, problems, log)
    pub const BOTTOM_PANEL: &str = "bottom-panel";
    /// Status-bar items scoped to the active file
    pub const STATUS_BAR_FILE: &str = "status-bar__file";
    /// Application-wide status-bar items
    pub const STATUS_BAR_APP: &str = "status-bar__app";
    /// Actions shown next to the active tab
    pub const TAB_ACTIONS: &str = "tab-actions";
    /// Navigation entries of the left side panel
    pub const SIDE_PANEL_NAVIGATION: &str = "side-panel__navigation";
    /// Content of the left side panel
    pub const SIDE_PANEL_CONTENT: &str = "side-panel__content";
    /// Content of the variables panel
    pub const VARIABLES_PANEL: &str = "variables-panel";
}
