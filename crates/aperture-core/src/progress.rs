//! Page scroll progress

use crate::capability::{ScrollGeometry, ScrollMetrics};

/// Percentage of the scrollable distance already scrolled, in `[0, 100]`
///
/// A document with nothing to scroll reports 0 rather than dividing by zero.
pub fn scroll_progress(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let progress = metrics.scroll_top / scrollable * 100.0;
    if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Holds the latest progress value for a fixed progress bar
#[derive(Debug, Clone, Default)]
pub struct ScrollProgressReporter {
    progress: f64,
    mounted: bool,
}

impl ScrollProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Compute once from the current geometry and start accepting scrolls
    pub fn mount<G>(&mut self, geometry: &G) -> f64
    where
        G: ScrollGeometry + ?Sized,
    {
        self.mounted = true;
        self.on_scroll(geometry)
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Recompute from the geometry at the time of the scroll notification
    pub fn on_scroll<G>(&mut self, geometry: &G) -> f64
    where
        G: ScrollGeometry + ?Sized,
    {
        if self.mounted {
            self.progress = scroll_progress(&geometry.metrics());
        }
        self.progress
    }

    /// Bar width in cells for a bar `total` cells wide
    pub fn bar_width(&self, total: u16) -> u16 {
        ((self.progress / 100.0) * total as f64).round() as u16
    }
}
