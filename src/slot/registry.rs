//! Fill registry and query ordering
//!
//! The registry is a flat, append-ordered list of registrations keyed by
//! [`FillId`]. Consumers filter by slot name and pick an ordering at read time;
//! nothing about a consumer is stored here except per-name revision counters
//! used for change detection.

use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Opaque identifier of one fill registration
///
/// Allocated by the registry on first registration and handed back to the
/// producer, which passes it on every re-render and on removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FillId(u64);

impl FillId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fill-{}", self.0)
    }
}

/// Producer-supplied metadata travelling alongside the opaque content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FillMeta {
    /// Sort key for priority consumers (higher first)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Bucket name for grouped consumers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Display label (tab title, button text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Action identifiers offered by the fill (tab actions, context menu)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    /// Arbitrary extra props, passed through untouched
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, serde_json::Value>,
}

impl FillMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the priority (builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the group (builder pattern)
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the label (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add an action identifier (builder pattern)
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Attach an extra prop (builder pattern)
    pub fn with_prop(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    /// Set the stable `id` prop consumers use to address this fill (builder pattern)
    pub fn with_key(self, key: impl Into<String>) -> Self {
        self.with_prop("id", serde_json::Value::String(key.into()))
    }

    /// The stable `id` prop, if the producer set one
    pub fn key(&self) -> Option<&str> {
        self.prop_str("id")
    }

    /// A string-valued extra prop
    pub fn prop_str(&self, name: &str) -> Option<&str> {
        self.props.get(name).and_then(|v| v.as_str())
    }
}

/// One live registration as seen by consumers
#[derive(Debug, Clone, PartialEq)]
pub struct Registration<C> {
    pub id: FillId,
    /// Slot name this content is published to
    pub name: String,
    pub content: C,
    pub meta: FillMeta,
}

/// How a consumer wants its fills ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotOrder {
    /// Registration order (status bar and other additive regions)
    #[default]
    Append,
    /// Only fills carrying a priority, highest first; ties keep registration order
    Priority,
    /// Bucketed by group in first-appearance order, ungrouped fills last,
    /// each bucket sorted by priority (fills without one sink to the end)
    Grouped,
}

/// Order a name-filtered set of registrations for one consumer
pub fn order_registrations<'a, C>(
    registrations: impl IntoIterator<Item = &'a Registration<C>>,
    order: SlotOrder,
) -> Vec<&'a Registration<C>> {
    let mut items: Vec<&Registration<C>> = registrations.into_iter().collect();

    match order {
        SlotOrder::Append => {}
        SlotOrder::Priority => {
            items.retain(|r| r.meta.priority.is_some());
            items.sort_by_key(|r| Reverse(r.meta.priority));
        }
        SlotOrder::Grouped => {
            let mut groups: Vec<Option<&str>> = Vec::new();
            for r in &items {
                let group = r.meta.group.as_deref();
                if group.is_some() && !groups.contains(&group) {
                    groups.push(group);
                }
            }
            groups.push(None);

            let rank = |r: &Registration<C>| {
                groups
                    .iter()
                    .position(|g| *g == r.meta.group.as_deref())
                    .unwrap_or(groups.len())
            };
            items.sort_by_key(|r| (rank(r), Reverse(r.meta.priority)));
        }
    }

    items
}

#[derive(Debug)]
struct RegistryInner<C> {
    next_id: u64,
    registrations: Vec<Registration<C>>,
    revisions: HashMap<String, u64>,
}

impl<C> RegistryInner<C> {
    fn bump(&mut self, name: &str) {
        *self.revisions.entry(name.to_string()).or_insert(0) += 1;
    }
}

/// Shared registry handle for one UI root
///
/// Cloning the handle shares the same registry; producers and consumers each
/// keep a clone. Not `Send`: all mutation happens on the UI thread.
pub struct SlotRegistry<C> {
    inner: Rc<RefCell<RegistryInner<C>>>,
}

impl<C> Clone for SlotRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C> Default for SlotRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for SlotRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SlotRegistry")
            .field("registrations", &inner.registrations.len())
            .field("next_id", &inner.next_id)
            .finish()
    }
}

impl<C> SlotRegistry<C> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RegistryInner {
                next_id: 1,
                registrations: Vec::new(),
                revisions: HashMap::new(),
            })),
        }
    }

    /// Register a new fill or update an existing one in place
    ///
    /// With `id == None` a fresh id is allocated and the fill is appended.
    /// With a known id the content and metadata are replaced without moving the
    /// entry. A known-but-removed id is re-inserted at the end under that id.
    pub fn register(
        &self,
        id: Option<FillId>,
        name: impl Into<String>,
        content: C,
        meta: FillMeta,
    ) -> FillId {
        let name = name.into();
        let mut inner = self.inner.borrow_mut();

        let id = match id {
            Some(id) => id,
            None => {
                let id = FillId(inner.next_id);
                inner.next_id = inner.next_id.saturating_add(1);
                id
            }
        };

        let existing = inner.registrations.iter().position(|r| r.id == id);
        match existing {
            Some(index) => {
                let previous_name = std::mem::replace(
                    &mut inner.registrations[index].name,
                    name.clone(),
                );
                inner.registrations[index].content = content;
                inner.registrations[index].meta = meta;
                if previous_name != name {
                    inner.bump(&previous_name);
                }
                tracing::trace!(%id, slot = %name, "fill updated");
            }
            None => {
                // Keep allocation ahead of ids the caller handed back to us
                inner.next_id = inner.next_id.max(id.0.saturating_add(1));
                inner.registrations.push(Registration {
                    id,
                    name: name.clone(),
                    content,
                    meta,
                });
                tracing::trace!(%id, slot = %name, "fill registered");
            }
        }

        inner.bump(&name);
        id
    }

    /// Remove a fill; unknown ids are ignored
    pub fn unregister(&self, id: FillId) {
        let mut inner = self.inner.borrow_mut();
        let Some(index) = inner.registrations.iter().position(|r| r.id == id) else {
            return;
        };
        let removed = inner.registrations.remove(index);
        inner.bump(&removed.name);
        tracing::trace!(%id, slot = %removed.name, "fill unregistered");
    }

    /// Whether a fill with this id is currently registered
    pub fn contains(&self, id: FillId) -> bool {
        self.inner.borrow().registrations.iter().any(|r| r.id == id)
    }

    /// Number of registrations across all slots
    pub fn len(&self) -> usize {
        self.inner.borrow().registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Change counter for a slot name; bumps on every register, update or removal
    pub fn revision(&self, name: &str) -> u64 {
        self.inner.borrow().revisions.get(name).copied().unwrap_or(0)
    }

    /// Run `f` over the ordered fills of a slot without cloning content
    ///
    /// The registry is borrowed for the duration of `f`; registering or
    /// dropping a [`Fill`](super::Fill) from inside `f` panics.
    pub fn with_fills<R>(
        &self,
        name: &str,
        order: SlotOrder,
        f: impl FnOnce(&[&Registration<C>]) -> R,
    ) -> R {
        let inner = self.inner.borrow();
        let matching = inner.registrations.iter().filter(|r| r.name == name);
        let ordered = order_registrations(matching, order);
        f(&ordered)
    }
}

impl<C: Clone> SlotRegistry<C> {
    /// Snapshot the ordered fills of a slot
    pub fn query(&self, name: &str, order: SlotOrder) -> Vec<Registration<C>> {
        self.with_fills(name, order, |fills| {
            fills.iter().map(|r| (*r).clone()).collect()
        })
    }

    /// Look up a single registration by id
    pub fn get(&self, id: FillId) -> Option<Registration<C>> {
        self.inner
            .borrow()
            .registrations
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }
}
