//! Visibility tracker bound to one target region

use tracing::debug;

use super::{IntersectionEntry, ObserverOptions};
use crate::capability::{ObserverId, ViewportQuery};
use crate::geometry::Rect;

/// Live and sticky intersection flags for one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObservationState {
    pub is_intersecting: bool,
    /// Latches on the first entering report and never clears
    pub has_ever_intersected: bool,
}

impl ObservationState {
    pub const fn new(is_intersecting: bool, has_ever_intersected: bool) -> Self {
        Self {
            is_intersecting,
            has_ever_intersected,
        }
    }

    /// Apply one threshold report. Returns true if anything changed.
    pub fn record(&mut self, intersecting: bool) -> bool {
        let before = *self;
        self.is_intersecting = intersecting;
        if intersecting {
            self.has_ever_intersected = true;
        }
        *self != before
    }
}

/// Tracks whether a target is inside the (margin-adjusted) viewport
///
/// Observation starts on `mount` and stops on `unmount`; reports for any
/// other observation, or arriving after teardown, are ignored.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    options: ObserverOptions,
    state: ObservationState,
    observer: Option<ObserverId>,
    target: Option<Rect>,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(ObserverOptions::default())
    }
}

impl VisibilityTracker {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            state: ObservationState::default(),
            observer: None,
            target: None,
        }
    }

    #[inline]
    pub fn state(&self) -> ObservationState {
        self.state
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Handle of the active observation, if mounted
    pub fn observer_id(&self) -> Option<ObserverId> {
        self.observer
    }

    #[inline]
    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    /// Begin observing `target`. Re-mounting replaces the old observation.
    pub fn mount<Q>(&mut self, query: &mut Q, target: Rect)
    where
        Q: ViewportQuery + ?Sized,
    {
        if let Some(id) = self.observer.take() {
            query.unobserve(id);
        }
        let id = query.observe(target, &self.options);
        debug!(observer = %id, threshold = self.options.threshold, "visibility observation started");
        self.observer = Some(id);
        self.target = Some(target);
    }

    /// Stop observing. Safe to call when not mounted.
    pub fn unmount<Q>(&mut self, query: &mut Q)
    where
        Q: ViewportQuery + ?Sized,
    {
        if let Some(id) = self.observer.take() {
            query.unobserve(id);
            debug!(observer = %id, "visibility observation stopped");
        }
        self.target = None;
    }

    /// Swap in new options, re-subscribing if they differ from the current ones
    ///
    /// Returns true when a re-subscription happened. Observation state is
    /// kept, so the sticky flag survives reconfiguration.
    pub fn reconfigure<Q>(&mut self, query: &mut Q, options: ObserverOptions) -> bool
    where
        Q: ViewportQuery + ?Sized,
    {
        if options == self.options {
            return false;
        }
        self.options = options;

        match (self.observer.take(), self.target) {
            (Some(id), Some(target)) => {
                query.unobserve(id);
                let id = query.observe(target, &self.options);
                self.observer = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Feed a report from the viewport query. Returns true if the state changed.
    pub fn on_entry(&mut self, entry: &IntersectionEntry) -> bool {
        if self.observer != Some(entry.id) {
            return false;
        }
        self.state.record(entry.is_intersecting)
    }
}
