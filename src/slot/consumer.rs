//! Slot consumer
//!
//! A `Slot` is a derived view: it stores only its name, ordering and the
//! revision it last rendered, and re-queries the registry on every read.

use super::registry::{Registration, SlotOrder, SlotRegistry};

/// Consumer rendering the live fills of one named slot
#[derive(Debug, Clone)]
pub struct Slot<C> {
    registry: SlotRegistry<C>,
    name: String,
    order: SlotOrder,
    limit: Option<usize>,
    seen_revision: Option<u64>,
}

impl<C> Slot<C> {
    pub fn new(registry: &SlotRegistry<C>, name: impl Into<String>, order: SlotOrder) -> Self {
        Self {
            registry: registry.clone(),
            name: name.into(),
            order,
            limit: None,
            seen_revision: None,
        }
    }

    /// Render at most `limit` fills (builder pattern)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> SlotOrder {
        self.order
    }

    /// Whether the registration set for this slot changed since the last read
    pub fn poll_changed(&self) -> bool {
        self.seen_revision != Some(self.registry.revision(&self.name))
    }

    /// Mark the current registration set as seen without reading it
    pub fn mark_seen(&mut self) {
        self.seen_revision = Some(self.registry.revision(&self.name));
    }

    /// Map over the ordered fills without cloning their content
    pub fn map<T>(&mut self, mut f: impl FnMut(&Registration<C>) -> T) -> Vec<T> {
        self.mark_seen();
        let limit = self.limit.unwrap_or(usize::MAX);
        self.registry.with_fills(&self.name, self.order, |fills| {
            fills.iter().take(limit).map(|r| f(r)).collect()
        })
    }

    /// Number of fills this slot would currently render
    pub fn count(&self) -> usize {
        let limit = self.limit.unwrap_or(usize::MAX);
        self.registry
            .with_fills(&self.name, self.order, |fills| fills.len().min(limit))
    }
}

impl<C: Clone> Slot<C> {
    /// Read the current ordered fills
    pub fn items(&mut self) -> Vec<Registration<C>> {
        self.map(|r| r.clone())
    }
}
