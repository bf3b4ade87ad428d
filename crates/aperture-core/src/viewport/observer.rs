//! Geometry-backed viewport query
//!
//! Stands in for a platform intersection engine: hosts report where the
//! viewport and each target sit in document space, call `update()` after
//! scrolling or relayout, and receive entries only for targets whose
//! intersecting flag flipped (plus one initial entry per observation).

use uuid::Uuid;

use super::ObserverOptions;
use crate::capability::{ObserverId, ViewportQuery};
use crate::geometry::Rect;

/// One threshold-crossing report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub id: ObserverId,
    /// Visible fraction of the target in `[0, 1]`
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone)]
struct Registration {
    id: ObserverId,
    target: Rect,
    options: ObserverOptions,
    /// Last reported flag, `None` until the initial entry is delivered
    reported: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct LayoutObserver {
    viewport: Rect,
    registrations: Vec<Registration>,
}

impl LayoutObserver {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            registrations: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Move or resize the document viewport (scroll, terminal resize)
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Update the document-space bounds of an observed target
    pub fn set_target(&mut self, id: ObserverId, target: Rect) {
        if let Some(registration) = self.registrations.iter_mut().find(|r| r.id == id) {
            registration.target = target;
        }
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Current visible fraction of a target, if it is observed
    pub fn ratio(&self, id: ObserverId) -> Option<f64> {
        self.registrations
            .iter()
            .find(|r| r.id == id)
            .map(|r| self.compute_ratio(r))
    }

    /// Recompute every observation and return entries for those that crossed
    /// their threshold, in registration order
    pub fn update(&mut self) -> Vec<IntersectionEntry> {
        let viewport = self.viewport;
        let mut entries = Vec::new();

        for registration in &mut self.registrations {
            let ratio = Self::ratio_against(viewport, registration);
            let is_intersecting = registration.options.is_intersecting(ratio);
            if registration.reported != Some(is_intersecting) {
                registration.reported = Some(is_intersecting);
                entries.push(IntersectionEntry {
                    id: registration.id,
                    ratio,
                    is_intersecting,
                });
            }
        }

        entries
    }

    fn compute_ratio(&self, registration: &Registration) -> f64 {
        Self::ratio_against(self.viewport, registration)
    }

    fn ratio_against(viewport: Rect, registration: &Registration) -> f64 {
        let root = registration
            .options
            .root
            .unwrap_or(viewport)
            .with_margin(&registration.options.root_margin);
        registration.target.visible_fraction(&root)
    }
}

impl ViewportQuery for LayoutObserver {
    fn observe(&mut self, target: Rect, options: &ObserverOptions) -> ObserverId {
        let id = Uuid::new_v4();
        self.registrations.push(Registration {
            id,
            target,
            options: options.clone(),
            reported: None,
        });
        id
    }

    fn unobserve(&mut self, id: ObserverId) {
        self.registrations.retain(|r| r.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RootMargin;

    fn observer() -> LayoutObserver {
        LayoutObserver::new(Rect::new(0.0, 0.0, 100.0, 400.0))
    }

    #[test]
    fn test_initial_entry_always_delivered() {
        let mut layout = observer();
        let id = layout.observe(Rect::new(0.0, 1000.0, 100.0, 100.0), &ObserverOptions::default());
        let entries = layout.update();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert!(!entries[0].is_intersecting);

        // Nothing changed, nothing reported
        assert!(layout.update().is_empty());
    }

    #[test]
    fn test_bottom_margin_delays_entry() {
        let mut layout = observer();
        // Target top sits 50 units above the viewport bottom: inside the raw
        // viewport, but within the 100 unit shrink zone
        let id = layout.observe(Rect::new(0.0, 350.0, 100.0, 100.0), &ObserverOptions::default());
        assert!(!layout.update()[0].is_intersecting);

        layout.set_viewport(Rect::new(0.0, 100.0, 100.0, 400.0));
        let entries = layout.update();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert!(entries[0].is_intersecting);
    }

    #[test]
    fn test_zero_margin_uses_raw_viewport() {
        let mut layout = observer();
        let options = ObserverOptions {
            root_margin: RootMargin::ZERO,
            ..Default::default()
        };
        layout.observe(Rect::new(0.0, 350.0, 100.0, 100.0), &options);
        assert!(layout.update()[0].is_intersecting);
    }

    #[test]
    fn test_leaving_reports_once() {
        let mut layout = observer();
        let options = ObserverOptions {
            root_margin: RootMargin::ZERO,
            ..Default::default()
        };
        layout.observe(Rect::new(0.0, 0.0, 100.0, 100.0), &options);
        assert!(layout.update()[0].is_intersecting);

        layout.set_viewport(Rect::new(0.0, 500.0, 100.0, 400.0));
        let entries = layout.update();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);
        assert!(layout.update().is_empty());
    }

    #[test]
    fn test_explicit_root_overrides_viewport() {
        let mut layout = observer();
        let options = ObserverOptions {
            root: Some(Rect::new(0.0, 2000.0, 100.0, 100.0)),
            root_margin: RootMargin::ZERO,
            ..Default::default()
        };
        layout.observe(Rect::new(0.0, 2000.0, 50.0, 50.0), &options);
        assert!(layout.update()[0].is_intersecting);
    }

    #[test]
    fn test_unobserve_removes_registration() {
        let mut layout = observer();
        let id = layout.observe(Rect::default(), &ObserverOptions::default());
        assert_eq!(layout.len(), 1);
        layout.unobserve(id);
        assert!(layout.is_empty());
        assert!(layout.ratio(id).is_none());
    }
}
