//! Resizable containers - drag to resize, drag shut or click to collapse
//!
//! One state machine serves every panel. It is parameterized only by the edge
//! carrying the resizer ([`Direction`]) and its [`ResizeBounds`], and hands
//! committed [`Geometry`] back to whoever owns it.
//!
//! ## Size policy
//!
//! - prospective size at or below [`CLOSED_THRESHOLD`]: closed, rendered at
//!   [`COLLAPSED_SIZE`], committed size left untouched
//! - between the threshold and the minimum: open at the minimum
//! - above the maximum: open at the maximum

mod container;
mod pointer;
mod size;

pub use container::{
    Direction, Geometry, Preview, ResizableContainer, CLOSED_THRESHOLD, COLLAPSED_SIZE,
};
pub use pointer::{ListenerGuard, PointerListenerKind, PointerPosition, PointerStream};
pub use size::{Axis, ResizeBounds, ResizeError, SizeSpec, SizeValue, Viewport};
