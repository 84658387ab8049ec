//! Drag-resize / collapse state machine
//!
//! The container never owns the committed geometry. Every call receives the
//! owner's current [`Geometry`], and the only way the container changes it is
//! by returning a new one from [`ResizableContainer::release`] or
//! [`ResizableContainer::toggle`]. The live preview of a gesture lives in the
//! drag session and is thrown away when the gesture ends.

use serde::{Deserialize, Serialize};

use super::pointer::{ListenerGuard, PointerListenerKind, PointerPosition, PointerStream};
use super::size::{Axis, ResizeBounds, ResizeError, SizeSpec, Viewport};

/// Prospective sizes at or below this count as closed
pub const CLOSED_THRESHOLD: f64 = 50.0;

/// Rendered size of a closed container (the resizer affordance)
pub const COLLAPSED_SIZE: f64 = 32.0;

/// Edge of the container that carries the resizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// Axis whose dimension this container resizes
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Top | Direction::Bottom => Axis::Vertical,
        }
    }

    /// Size delta for a pointer moving from `from` to `to`
    ///
    /// A resizer on the left or top edge grows the container when dragged
    /// towards the origin, so the sign flips relative to right/bottom.
    pub fn delta(&self, from: PointerPosition, to: PointerPosition) -> f64 {
        match self {
            Direction::Right => to.x - from.x,
            Direction::Left => from.x - to.x,
            Direction::Bottom => to.y - from.y,
            Direction::Top => from.y - to.y,
        }
    }

    /// Pointer position that grows the container by `delta` when dragged to from `from`
    pub fn offset(&self, from: PointerPosition, delta: f64) -> PointerPosition {
        match self {
            Direction::Right => PointerPosition::new(from.x + delta, from.y),
            Direction::Left => PointerPosition::new(from.x - delta, from.y),
            Direction::Bottom => PointerPosition::new(from.x, from.y + delta),
            Direction::Top => PointerPosition::new(from.x, from.y - delta),
        }
    }
}

/// Committed geometry, owned by the layout that hosts the container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub open: bool,
    pub size: SizeSpec,
}

impl Geometry {
    pub fn new(open: bool, size: SizeSpec) -> Self {
        Self { open, size }
    }

    /// Check a geometry handed in by the host or a persisted layout
    pub fn validate(self) -> Result<Self, ResizeError> {
        Ok(Self {
            open: self.open,
            size: self.size.validate()?,
        })
    }
}

/// Live preview of an in-progress drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    /// Unclamped start size plus delta
    pub prospective: f64,
    /// Size to render right now (collapsed or clamped)
    pub size: f64,
    /// Whether the container would be open if released here
    pub open: bool,
}

/// One drag gesture; holds the global pointer listeners until dropped
#[derive(Debug)]
struct DragSession {
    origin: PointerPosition,
    start_size: f64,
    moved: bool,
    preview: Option<Preview>,
    _move_listener: ListenerGuard,
    _release_listener: ListenerGuard,
}

/// Content-agnostic resizable container
#[derive(Debug)]
pub struct ResizableContainer {
    direction: Direction,
    bounds: ResizeBounds,
    pointer: PointerStream,
    session: Option<DragSession>,
}

impl ResizableContainer {
    pub fn new(direction: Direction, bounds: ResizeBounds, pointer: &PointerStream) -> Self {
        Self {
            direction,
            bounds,
            pointer: pointer.clone(),
            session: None,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn bounds(&self) -> &ResizeBounds {
        &self.bounds
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Preview of the current gesture, once the pointer has moved
    pub fn preview(&self) -> Option<Preview> {
        self.session.as_ref().and_then(|s| s.preview)
    }

    /// Size to render for the given committed geometry
    ///
    /// During a drag the preview wins; otherwise a closed container renders
    /// the collapsed affordance and an open one its resolved committed size.
    pub fn rendered_size(&self, committed: &Geometry, viewport: Viewport) -> f64 {
        if let Some(preview) = self.preview() {
            return preview.size;
        }
        if committed.open {
            committed.size.resolve(self.direction.axis(), viewport)
        } else {
            COLLAPSED_SIZE
        }
    }

    /// Open state to render for the given committed geometry
    pub fn rendered_open(&self, committed: &Geometry) -> bool {
        self.preview().map_or(committed.open, |p| p.open)
    }

    /// Pointer pressed on the resizer
    ///
    /// `measured` is the live size of the element as laid out, which may
    /// differ from the committed size when outside styling interferes. Any
    /// gesture still in progress is abandoned without committing.
    pub fn press(
        &mut self,
        at: PointerPosition,
        committed: &Geometry,
        measured: Option<f64>,
        viewport: Viewport,
    ) {
        self.session = None;

        let start_size = measured.unwrap_or_else(|| self.rendered_size(committed, viewport));
        tracing::trace!(direction = ?self.direction, start_size, "resize drag started");

        self.session = Some(DragSession {
            origin: at,
            start_size,
            moved: false,
            preview: None,
            _move_listener: self.pointer.listen(PointerListenerKind::Move),
            _release_listener: self.pointer.listen(PointerListenerKind::Release),
        });
    }

    /// Pointer moved anywhere in the window during a drag
    ///
    /// Returns the updated preview, or `None` when no drag is in progress.
    pub fn pointer_move(&mut self, at: PointerPosition, viewport: Viewport) -> Option<Preview> {
        let direction = self.direction;
        let bounds = self.bounds;
        let session = self.session.as_mut()?;

        if at != session.origin {
            session.moved = true;
        }
        let preview = compute_preview(direction, &bounds, session, at, viewport);
        session.preview = Some(preview);
        Some(preview)
    }

    /// Pointer released anywhere in the window
    ///
    /// Ends the gesture and returns the geometry to commit, or `None` when no
    /// drag was in progress. A release without any movement is a click on the
    /// resizer and toggles the container.
    pub fn release(
        &mut self,
        at: PointerPosition,
        committed: &Geometry,
        viewport: Viewport,
    ) -> Option<Geometry> {
        let session = self.session.take()?;

        if !session.moved && at == session.origin {
            return Some(self.toggle(committed, viewport));
        }

        let preview = compute_preview(self.direction, &self.bounds, &session, at, viewport);
        let geometry = if preview.open {
            Geometry::new(true, SizeSpec::Pixels(preview.size))
        } else {
            Geometry::new(false, committed.size)
        };

        tracing::debug!(
            direction = ?self.direction,
            prospective = preview.prospective,
            open = geometry.open,
            size = %geometry.size,
            "resize committed"
        );
        Some(geometry)
    }

    /// Abort the current gesture without committing anything
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            tracing::trace!(direction = ?self.direction, "resize drag cancelled");
        }
    }

    /// Flip the open state, snapping up to the minimum size when opening
    pub fn toggle(&self, committed: &Geometry, viewport: Viewport) -> Geometry {
        let open = !committed.open;
        let axis = self.direction.axis();
        let min = self.bounds.min_px(axis, viewport);

        let size = if open && committed.size.resolve(axis, viewport) < min {
            self.bounds.min
        } else {
            committed.size
        };

        tracing::debug!(direction = ?self.direction, open, size = %size, "resize toggled");
        Geometry::new(open, size)
    }
}

fn compute_preview(
    direction: Direction,
    bounds: &ResizeBounds,
    session: &DragSession,
    at: PointerPosition,
    viewport: Viewport,
) -> Preview {
    let prospective = session.start_size + direction.delta(session.origin, at);
    let open = prospective > CLOSED_THRESHOLD;
    let size = if open {
        bounds.clamp(prospective, direction.axis(), viewport)
    } else {
        COLLAPSED_SIZE
    };
    Preview {
        prospective,
        size,
        open,
    }
}
