//! Fill producer handle
//!
//! A `Fill` is the producer side of a slot: it remembers the id the registry
//! handed out on first render so every later render updates in place, and it
//! unregisters itself when dropped (unmount).

use super::registry::{FillId, FillMeta, SlotRegistry};

/// Producer publishing content into one named slot
#[derive(Debug)]
pub struct Fill<C> {
    registry: SlotRegistry<C>,
    name: String,
    id: Option<FillId>,
}

impl<C> Fill<C> {
    /// Create an unmounted producer; nothing is registered until `render`
    pub fn new(registry: &SlotRegistry<C>, name: impl Into<String>) -> Self {
        Self {
            registry: registry.clone(),
            name: name.into(),
            id: None,
        }
    }

    /// Publish (first call) or replace (later calls) this producer's content
    pub fn render(&mut self, content: C, meta: FillMeta) -> FillId {
        let id = self
            .registry
            .register(self.id, self.name.clone(), content, meta);
        self.id = Some(id);
        id
    }

    /// Move this producer to another slot, keeping its id
    ///
    /// Takes effect on the next `render`.
    pub fn retarget(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Withdraw the content but keep the handle (and its id) for a later render
    pub fn clear(&mut self) {
        if let Some(id) = self.id {
            self.registry.unregister(id);
        }
    }

    pub fn id(&self) -> Option<FillId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the content is currently visible to consumers
    pub fn is_mounted(&self) -> bool {
        self.id.is_some_and(|id| self.registry.contains(id))
    }
}

impl<C> Drop for Fill<C> {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.registry.unregister(id);
        }
    }
}
