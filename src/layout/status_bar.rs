//! Status bar composer
//!
//! Two additive regions: items about the active file on the left, app-wide
//! items on the right. Both render in registration order.

use crate::slot::{names, Slot, SlotOrder, SlotRegistry};

/// Status bar contents ready for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarView<C> {
    pub file: Vec<C>,
    pub app: Vec<C>,
}

#[derive(Debug)]
pub struct StatusBar<C> {
    file: Slot<C>,
    app: Slot<C>,
}

impl<C> StatusBar<C> {
    pub fn new(registry: &SlotRegistry<C>) -> Self {
        Self {
            file: Slot::new(registry, names::STATUS_BAR_FILE, SlotOrder::Append),
            app: Slot::new(registry, names::STATUS_BAR_APP, SlotOrder::Append),
        }
    }

    pub fn needs_render(&self) -> bool {
        self.file.poll_changed() || self.app.poll_changed()
    }
}

impl<C: Clone> StatusBar<C> {
    pub fn render(&mut self) -> StatusBarView<C> {
        StatusBarView {
            file: self.file.map(|fill| fill.content.clone()),
            app: self.app.map(|fill| fill.content.clone()),
        }
    }
}
