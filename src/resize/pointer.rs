//! Global pointer stream and drag-scoped listener guards
//!
//! While a drag is in progress the container needs move and release events
//! from the whole window, not just its own resizer, so a release outside the
//! element still ends the gesture. The host event loop consults the stream to
//! decide whether pointer events must be routed to a captured container.

use std::cell::RefCell;
use std::rc::Rc;

/// Pointer position in window coordinates (logical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kind of global pointer listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerListenerKind {
    Move,
    Release,
}

#[derive(Debug, Default)]
struct StreamInner {
    next_id: u64,
    listeners: Vec<(u64, PointerListenerKind)>,
}

/// Window-wide pointer stream shared by every container of one UI root
#[derive(Debug, Clone, Default)]
pub struct PointerStream {
    inner: Rc<RefCell<StreamInner>>,
}

impl PointerStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener; it stays attached until the guard is dropped
    pub fn listen(&self, kind: PointerListenerKind) -> ListenerGuard {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, kind));
        ListenerGuard {
            stream: self.clone(),
            id,
        }
    }

    /// Number of attached listeners of a kind
    pub fn listener_count(&self, kind: PointerListenerKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k)| *k == kind)
            .count()
    }

    /// Whether any drag currently holds the stream
    pub fn is_captured(&self) -> bool {
        !self.inner.borrow().listeners.is_empty()
    }

    fn detach(&self, id: u64) {
        self.inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
    }
}

/// Attached listener; detaches on drop
#[derive(Debug)]
pub struct ListenerGuard {
    stream: PointerStream,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.stream.detach(self.id);
    }
}
