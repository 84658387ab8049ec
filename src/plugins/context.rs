//! Per-plugin render context
//!
//! Everything a plugin publishes or holds goes through its context, so the
//! loader can take all of it back in one step when the plugin fails or is
//! unmounted.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::slot::{Fill, FillId, FillMeta, SlotRegistry};

/// Handle to something a plugin keeps running between renders
/// (an event subscription, a timer); cancelled when dropped
pub struct Subscription {
    label: String,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(label: impl Into<String>, cancel: impl FnOnce() + 'static) -> Self {
        Self {
            label: label.into(),
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            tracing::trace!(subscription = %self.label, "subscription cancelled");
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .finish()
    }
}

/// What a plugin may touch while rendering
pub struct PluginContext<C> {
    registry: SlotRegistry<C>,
    fills: HashMap<String, Fill<C>>,
    rendered: HashSet<String>,
    subscriptions: Vec<Subscription>,
}

impl<C> PluginContext<C> {
    pub(crate) fn new(registry: &SlotRegistry<C>) -> Self {
        Self {
            registry: registry.clone(),
            fills: HashMap::new(),
            rendered: HashSet::new(),
            subscriptions: Vec::new(),
        }
    }

    /// Publish content into `slot`
    ///
    /// `key` identifies the fill within this plugin: rendering the same key
    /// again updates the fill in place, even if it moved to another slot.
    pub fn fill(&mut self, key: &str, slot: &str, content: C, meta: FillMeta) -> FillId {
        let fill = self
            .fills
            .entry(key.to_string())
            .or_insert_with(|| Fill::new(&self.registry, slot));
        if fill.name() != slot {
            fill.retarget(slot);
        }
        self.rendered.insert(key.to_string());
        fill.render(content, meta)
    }

    /// Keep a subscription alive until the plugin fails or unmounts
    pub fn subscribe(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Number of fills currently published by this plugin
    pub fn fill_count(&self) -> usize {
        self.fills.len()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub(crate) fn begin_render(&mut self) {
        self.rendered.clear();
    }

    /// Withdraw fills the plugin did not publish in this render
    pub(crate) fn finish_render(&mut self) {
        self.fills.retain(|key, _| self.rendered.contains(key));
    }

    /// Withdraw every fill and cancel every subscription
    pub(crate) fn teardown(&mut self) {
        self.fills.clear();
        self.subscriptions.clear();
        self.rendered.clear();
    }
}

impl<C> fmt::Debug for PluginContext<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginContext")
            .field("fills", &self.fills.len())
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
