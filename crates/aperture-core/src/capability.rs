//! Capabilities the controllers borrow from the hosting environment.
//!
//! The core never touches a real document. Hosts implement these traits
//! (the terminal showcase does, and so do the test doubles) and hand them to
//! controllers on mount, on events and on teardown.

use uuid::Uuid;

use crate::geometry::{Point, Rect};
use crate::viewport::ObserverOptions;

/// Handle for one registered intersection observation
pub type ObserverId = Uuid;

/// Handle for one pointer listener registration
pub type SubscriptionId = Uuid;

/// Layout engine that reports when observed targets cross a visibility threshold
pub trait ViewportQuery {
    /// Start observing `target` and return a handle for it
    fn observe(&mut self, target: Rect, options: &ObserverOptions) -> ObserverId;

    /// Stop observing. Unknown handles are ignored.
    fn unobserve(&mut self, id: ObserverId);
}

/// Which part of a press/move/release gesture an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
}

/// Input device that produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerModality {
    Mouse,
    Touch,
}

/// A single pointer or touch event in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub modality: PointerModality,
    pub position: Point,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            phase,
            modality: PointerModality::Mouse,
            position: Point::new(x, y),
        }
    }

    pub fn touch(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            phase,
            modality: PointerModality::Touch,
            position: Point::new(x, y),
        }
    }
}

/// Document-wide pointer listener registry (mouse and touch alike)
pub trait PointerEventSource {
    /// Register a global listener for the given phases
    fn subscribe(&mut self, phases: &[PointerPhase]) -> SubscriptionId;

    /// Remove a listener. Unknown handles are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Current scroll geometry of the document
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Synchronous read of scroll geometry, queried when a scroll notification fires
pub trait ScrollGeometry {
    fn metrics(&self) -> ScrollMetrics;
}

impl ScrollGeometry for ScrollMetrics {
    fn metrics(&self) -> ScrollMetrics {
        *self
    }
}

/// Toggle for document-wide scrolling while an overlay is open
pub trait ScrollLock {
    fn set_locked(&mut self, locked: bool);
}
