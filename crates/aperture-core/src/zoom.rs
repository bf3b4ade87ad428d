//! Pointer-following magnifier

use crate::geometry::{Point, Rect};

/// Magnification used when none is configured
pub const DEFAULT_SCALE: f64 = 2.0;

/// Pointer position relative to the zoom region
///
/// `x` and `y` are not clamped; a move reported just outside the region
/// yields values slightly beyond `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalPoint {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            active: false,
        }
    }
}

/// Transform the renderer applies to the zoomed image
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomTransform {
    Identity,
    Magnify {
        /// Transform origin as a percentage of the region
        origin_x_pct: f64,
        origin_y_pct: f64,
        scale: f64,
    },
}

#[derive(Debug, Clone)]
pub struct ZoomFollow {
    region: Rect,
    focal: FocalPoint,
    scale: f64,
}

impl ZoomFollow {
    pub fn new(region: Rect) -> Self {
        Self::with_scale(region, DEFAULT_SCALE)
    }

    pub fn with_scale(region: Rect, scale: f64) -> Self {
        Self {
            region,
            focal: FocalPoint::default(),
            scale,
        }
    }

    #[inline]
    pub fn focal_point(&self) -> FocalPoint {
        self.focal
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pointer_enter(&mut self) {
        self.focal.active = true;
    }

    /// Recompute the focal point. A region with no extent leaves it unchanged.
    pub fn pointer_move(&mut self, at: Point) {
        if self.region.width <= 0.0 || self.region.height <= 0.0 {
            return;
        }
        self.focal.x = (at.x - self.region.left) / self.region.width;
        self.focal.y = (at.y - self.region.top) / self.region.height;
    }

    /// Deactivate, keeping the last focal coordinates
    pub fn pointer_leave(&mut self) {
        self.focal.active = false;
    }

    pub fn transform(&self) -> ZoomTransform {
        if !self.focal.active {
            return ZoomTransform::Identity;
        }
        ZoomTransform::Magnify {
            origin_x_pct: self.focal.x * 100.0,
            origin_y_pct: self.focal.y * 100.0,
            scale: self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoom() -> ZoomFollow {
        ZoomFollow::new(Rect::new(10.0, 20.0, 200.0, 100.0))
    }

    #[test]
    fn test_move_computes_relative_position() {
        let mut zoom = zoom();
        zoom.pointer_enter();
        zoom.pointer_move(Point::new(60.0, 95.0));
        let focal = zoom.focal_point();
        assert!((focal.x - 0.25).abs() < 1e-9);
        assert!((focal.y - 0.75).abs() < 1e-9);
        assert!(focal.active);
    }

    #[test]
    fn test_edges_are_not_clamped() {
        let mut zoom = zoom();
        zoom.pointer_move(Point::new(212.0, 19.0));
        let focal = zoom.focal_point();
        assert!(focal.x > 1.0);
        assert!(focal.y < 0.0);
    }

    #[test]
    fn test_leave_keeps_coordinates() {
        let mut zoom = zoom();
        zoom.pointer_enter();
        zoom.pointer_move(Point::new(110.0, 70.0));
        let before = zoom.focal_point();

        zoom.pointer_leave();
        let after = zoom.focal_point();
        assert!(!after.active);
        assert_eq!((after.x, after.y), (before.x, before.y));
        assert_eq!(zoom.transform(), ZoomTransform::Identity);

        // Re-entering without a move keeps the old point
        zoom.pointer_enter();
        assert_eq!(zoom.focal_point(), FocalPoint { active: true, ..before });
    }

    #[test]
    fn test_transform_when_active() {
        let mut zoom = zoom();
        zoom.pointer_enter();
        zoom.pointer_move(Point::new(110.0, 70.0));
        assert_eq!(
            zoom.transform(),
            ZoomTransform::Magnify {
                origin_x_pct: 50.0,
                origin_y_pct: 50.0,
                scale: DEFAULT_SCALE,
            }
        );
    }
}
