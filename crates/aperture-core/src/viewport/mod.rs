//! Viewport visibility tracking
//!
//! - `tracker` - per-target observation state (live + sticky flags)
//! - `observer` - geometry-backed `ViewportQuery` used by hosts without a layout engine

pub mod observer;
pub mod tracker;

pub use observer::{IntersectionEntry, LayoutObserver};
pub use tracker::{ObservationState, VisibilityTracker};

use crate::geometry::{Rect, RootMargin};

/// Default fraction of the target that must be visible
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Observation configuration. Equality is configuration identity: a tracker
/// re-subscribes whenever it is handed options that compare unequal.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target area in `[0, 1]`
    pub threshold: f64,
    /// Containing scroll region, `None` for the document viewport
    pub root: Option<Rect>,
    /// Adjustment applied to the root bounds before testing
    pub root_margin: RootMargin,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root: None,
            root_margin: RootMargin::default(),
        }
    }
}

impl ObserverOptions {
    /// Whether a visible fraction counts as intersecting under this threshold
    #[inline]
    pub fn is_intersecting(&self, ratio: f64) -> bool {
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let options = ObserverOptions::default();
        assert!(!options.is_intersecting(0.0));
        assert!(!options.is_intersecting(0.09));
        assert!(options.is_intersecting(0.1));
        assert!(options.is_intersecting(1.0));
    }

    #[test]
    fn test_zero_threshold_needs_some_overlap() {
        let options = ObserverOptions {
            threshold: 0.0,
            ..Default::default()
        };
        assert!(!options.is_intersecting(0.0));
        assert!(options.is_intersecting(0.001));
    }
}
