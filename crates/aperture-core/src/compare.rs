//! Before/after image comparison slider
//!
//! The split ratio is a percentage along the horizontal axis of the
//! comparison region. A press inside the region starts a drag; from then on
//! moves and the release are taken from anywhere in the document through a
//! `DragSubscription` the controller owns until the drag ends or the
//! controller is unmounted.

use tracing::debug;

use crate::capability::{PointerEvent, PointerEventSource, PointerPhase, SubscriptionId};
use crate::geometry::{Point, Rect};

/// Ratio shown before any interaction
pub const DEFAULT_RATIO: f64 = 50.0;

/// Document-wide move/release registration held for the length of one drag
#[derive(Debug, PartialEq, Eq)]
pub struct DragSubscription {
    id: SubscriptionId,
}

impl DragSubscription {
    const PHASES: [PointerPhase; 2] = [PointerPhase::Move, PointerPhase::Release];

    fn acquire<S>(source: &mut S) -> Self
    where
        S: PointerEventSource + ?Sized,
    {
        Self {
            id: source.subscribe(&Self::PHASES),
        }
    }

    fn release<S>(self, source: &mut S)
    where
        S: PointerEventSource + ?Sized,
    {
        source.unsubscribe(self.id);
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

/// Percentage of `region` left of `x`, clamped to `[0, 100]`
///
/// Returns `None` for a region with no width or a non-finite position.
pub fn ratio_at(region: &Rect, x: f64) -> Option<f64> {
    if !x.is_finite() || !region.width.is_finite() || region.width <= 0.0 {
        return None;
    }
    let offset = (x - region.left).clamp(0.0, region.width);
    Some((offset / region.width * 100.0).clamp(0.0, 100.0))
}

#[derive(Debug)]
pub struct DragComparison {
    region: Rect,
    ratio: f64,
    drag: Option<DragSubscription>,
    mounted: bool,
}

impl DragComparison {
    pub fn new(region: Rect) -> Self {
        Self::with_ratio(region, DEFAULT_RATIO)
    }

    pub fn with_ratio(region: Rect, ratio: f64) -> Self {
        Self {
            region,
            ratio: ratio.clamp(0.0, 100.0),
            drag: None,
            mounted: false,
        }
    }

    /// Current split in `[0, 100]`
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    /// Relayout: the ratio is kept, the next move uses the new bounds
    pub fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    /// Handle subscription while dragging
    pub fn subscription(&self) -> Option<&DragSubscription> {
        self.drag.as_ref()
    }

    /// Width of the clipped overlay, in region units
    pub fn clip_width(&self) -> f64 {
        self.region.width * self.ratio / 100.0
    }

    /// Horizontal document position of the slider handle
    pub fn handle_x(&self) -> f64 {
        self.region.left + self.clip_width()
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Tear down, releasing any drag subscription still held
    pub fn unmount<S>(&mut self, source: &mut S)
    where
        S: PointerEventSource + ?Sized,
    {
        self.end_drag(source);
        self.mounted = false;
    }

    /// Mouse-down / touch-start. Returns true if a drag started.
    pub fn press<S>(&mut self, source: &mut S, at: Point) -> bool
    where
        S: PointerEventSource + ?Sized,
    {
        if !self.mounted || self.is_dragging() || !self.region.contains(at) {
            return false;
        }
        let drag = DragSubscription::acquire(source);
        debug!(subscription = %drag.id(), "comparison drag started");
        self.drag = Some(drag);
        true
    }

    /// Global mouse-move / touch-move. Returns the new ratio if it was applied.
    pub fn pointer_move(&mut self, at: Point) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        let ratio = ratio_at(&self.region, at.x)?;
        self.ratio = ratio;
        Some(ratio)
    }

    /// Global mouse-up / touch-end, wherever it happens
    pub fn release<S>(&mut self, source: &mut S)
    where
        S: PointerEventSource + ?Sized,
    {
        self.end_drag(source);
    }

    /// Route one event to the matching handler
    pub fn handle<S>(&mut self, source: &mut S, event: &PointerEvent) -> bool
    where
        S: PointerEventSource + ?Sized,
    {
        match event.phase {
            PointerPhase::Press => self.press(source, event.position),
            PointerPhase::Move => self.pointer_move(event.position).is_some(),
            PointerPhase::Release => {
                let was_dragging = self.is_dragging();
                self.release(source);
                was_dragging
            }
        }
    }

    fn end_drag<S>(&mut self, source: &mut S)
    where
        S: PointerEventSource + ?Sized,
    {
        if let Some(drag) = self.drag.take() {
            debug!(subscription = %drag.id(), ratio = self.ratio, "comparison drag ended");
            drag.release(source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::PointerModality;
    use crate::pointer::PointerHub;

    fn mounted(region: Rect) -> DragComparison {
        let mut compare = DragComparison::new(region);
        compare.mount();
        compare
    }

    #[test]
    fn test_default_ratio_is_half() {
        let compare = DragComparison::new(Rect::new(0.0, 0.0, 300.0, 200.0));
        assert_eq!(compare.ratio(), 50.0);
        assert!(!compare.is_dragging());
    }

    #[test]
    fn test_ratio_clamped_outside_region() {
        let region = Rect::new(0.0, 0.0, 300.0, 200.0);
        assert_eq!(ratio_at(&region, -200.0), Some(0.0));
        assert_eq!(ratio_at(&region, 150.0), Some(50.0));
        assert_eq!(ratio_at(&region, 900.0), Some(100.0));
        assert_eq!(ratio_at(&Rect::new(0.0, 0.0, 0.0, 10.0), 5.0), None);
    }

    #[test]
    fn test_non_finite_pointer_keeps_ratio() {
        let region = Rect::new(0.0, 0.0, 300.0, 200.0);
        assert_eq!(ratio_at(&region, f64::NAN), None);
        assert_eq!(ratio_at(&region, f64::INFINITY), None);

        let mut hub = PointerHub::new();
        let mut compare = mounted(region);
        assert!(compare.press(&mut hub, Point::new(30.0, 10.0)));
        assert_eq!(compare.pointer_move(Point::new(f64::NAN, 10.0)), None);
        assert_eq!(compare.ratio(), 50.0);
        assert!(compare.is_dragging());
    }

    #[test]
    fn test_drag_updates_ratio_with_offset_region() {
        let mut hub = PointerHub::new();
        let mut compare = mounted(Rect::new(100.0, 50.0, 300.0, 200.0));

        assert!(compare.press(&mut hub, Point::new(120.0, 60.0)));
        assert_eq!(compare.pointer_move(Point::new(250.0, 500.0)), Some(50.0));
        assert_eq!(compare.pointer_move(Point::new(-100.0, 0.0)), Some(0.0));
        assert_eq!(compare.handle_x(), 100.0);
    }

    #[test]
    fn test_moves_ignored_when_not_dragging() {
        let mut compare = mounted(Rect::new(0.0, 0.0, 300.0, 200.0));
        assert_eq!(compare.pointer_move(Point::new(10.0, 10.0)), None);
        assert_eq!(compare.ratio(), 50.0);
    }

    #[test]
    fn test_press_outside_region_does_not_drag() {
        let mut hub = PointerHub::new();
        let mut compare = mounted(Rect::new(0.0, 0.0, 300.0, 200.0));
        assert!(!compare.press(&mut hub, Point::new(400.0, 10.0)));
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_release_outside_region_ends_drag() {
        let mut hub = PointerHub::new();
        let mut compare = mounted(Rect::new(0.0, 0.0, 300.0, 200.0));
        compare.press(&mut hub, Point::new(10.0, 10.0));
        assert_eq!(hub.listener_count(), 1);

        let release = PointerEvent::mouse(PointerPhase::Release, 5000.0, -40.0);
        assert!(compare.handle(&mut hub, &release));
        assert!(!compare.is_dragging());
        assert_eq!(hub.listener_count(), 0);

        // Later moves no longer change the ratio
        compare.pointer_move(Point::new(0.0, 0.0));
        assert_eq!(compare.ratio(), 50.0);
    }

    #[test]
    fn test_touch_gesture_drives_ratio() {
        let mut hub = PointerHub::new();
        let mut compare = mounted(Rect::new(0.0, 0.0, 200.0, 100.0));
        let events = [
            PointerEvent::touch(PointerPhase::Press, 100.0, 50.0),
            PointerEvent::touch(PointerPhase::Move, 150.0, 50.0),
            PointerEvent::touch(PointerPhase::Release, 150.0, 50.0),
        ];
        for event in &events {
            assert_eq!(event.modality, PointerModality::Touch);
            compare.handle(&mut hub, event);
        }
        assert_eq!(compare.ratio(), 75.0);
        assert!(!compare.is_dragging());
    }

    #[test]
    fn test_unmount_releases_subscription() {
        let mut hub = PointerHub::new();
        let mut compare = mounted(Rect::new(0.0, 0.0, 300.0, 200.0));
        compare.press(&mut hub, Point::new(10.0, 10.0));
        compare.unmount(&mut hub);

        assert_eq!(hub.listener_count(), 0);
        assert!(!compare.press(&mut hub, Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_second_press_keeps_single_subscription() {
        let mut hub = PointerHub::new();
        let mut compare = mounted(Rect::new(0.0, 0.0, 300.0, 200.0));
        compare.press(&mut hub, Point::new(10.0, 10.0));
        assert!(!compare.press(&mut hub, Point::new(20.0, 10.0)));
        assert_eq!(hub.listener_count(), 1);
    }
}
