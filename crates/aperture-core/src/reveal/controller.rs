use tracing::debug;

use super::variant::{RevealVariant, StyleDescriptor, VariantStyles};
use crate::capability::ViewportQuery;
use crate::config::RevealConfig;
use crate::geometry::Rect;
use crate::viewport::{IntersectionEntry, ObservationState, ObserverOptions, VisibilityTracker};

/// Animation state exposed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn name(&self) -> &'static str {
        match self {
            RevealState::Hidden => "hidden",
            RevealState::Visible => "visible",
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, RevealState::Visible)
    }
}

/// When the reveal may fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerPolicy {
    pub once: bool,
}

impl Default for TriggerPolicy {
    fn default() -> Self {
        Self { once: true }
    }
}

/// Derive the animation state from observation flags
///
/// With `once`, the target follows live intersection until it is first
/// seen, and afterwards shows only while still intersecting:
/// `!has_ever_intersected || is_intersecting`. An element that scrolls back
/// out after its reveal therefore returns to hidden.
pub fn reveal_state(observation: ObservationState, policy: TriggerPolicy) -> RevealState {
    let visible = if policy.once {
        !observation.has_ever_intersected || observation.is_intersecting
    } else {
        observation.is_intersecting
    };

    if visible {
        RevealState::Visible
    } else {
        RevealState::Hidden
    }
}

/// Reveal-on-scroll controller for one section
#[derive(Debug, Clone)]
pub struct RevealController {
    tracker: VisibilityTracker,
    policy: TriggerPolicy,
    variant: RevealVariant,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(
            ObserverOptions::default(),
            TriggerPolicy::default(),
            RevealVariant::default(),
        )
    }
}

impl RevealController {
    pub fn new(options: ObserverOptions, policy: TriggerPolicy, variant: RevealVariant) -> Self {
        Self {
            tracker: VisibilityTracker::new(options),
            policy,
            variant,
        }
    }

    pub fn from_config(config: &RevealConfig) -> Self {
        Self::new(
            config.observer_options(),
            TriggerPolicy { once: config.once },
            config.variant,
        )
    }

    /// Same options and policy with a different variant
    pub fn with_variant(mut self, variant: RevealVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn tracker(&self) -> &VisibilityTracker {
        &self.tracker
    }

    pub fn policy(&self) -> TriggerPolicy {
        self.policy
    }

    pub fn variant(&self) -> RevealVariant {
        self.variant
    }

    #[inline]
    pub fn state(&self) -> RevealState {
        reveal_state(self.tracker.state(), self.policy)
    }

    pub fn styles(&self) -> VariantStyles {
        self.variant.styles()
    }

    /// Style for the current state
    pub fn active_style(&self) -> StyleDescriptor {
        let styles = self.styles();
        match self.state() {
            RevealState::Hidden => styles.hidden,
            RevealState::Visible => styles.visible,
        }
    }

    pub fn mount<Q>(&mut self, query: &mut Q, target: Rect)
    where
        Q: ViewportQuery + ?Sized,
    {
        self.tracker.mount(query, target);
    }

    pub fn unmount<Q>(&mut self, query: &mut Q)
    where
        Q: ViewportQuery + ?Sized,
    {
        self.tracker.unmount(query);
    }

    /// Forward an intersection report; returns the new state if it flipped
    pub fn on_entry(&mut self, entry: &IntersectionEntry) -> Option<RevealState> {
        let before = self.state();
        if !self.tracker.on_entry(entry) {
            return None;
        }
        let after = self.state();
        if after == before {
            return None;
        }
        debug!(
            variant = self.variant.name(),
            state = after.name(),
            "reveal state changed"
        );
        Some(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::tracker::tests::RecordingQuery;

    const ONCE: TriggerPolicy = TriggerPolicy { once: true };
    const REPEAT: TriggerPolicy = TriggerPolicy { once: false };

    #[test]
    fn test_once_truth_table() {
        let cases = [
            ((false, false), RevealState::Visible),
            ((false, true), RevealState::Visible),
            ((true, false), RevealState::Hidden),
            ((true, true), RevealState::Visible),
        ];
        for ((ever, live), expected) in cases {
            let observation = ObservationState::new(live, ever);
            assert_eq!(reveal_state(observation, ONCE), expected, "ever={ever} live={live}");
        }
    }

    #[test]
    fn test_repeatable_follows_live_flag() {
        for ever in [false, true] {
            for live in [false, true] {
                let state = reveal_state(ObservationState::new(live, ever), REPEAT);
                assert_eq!(state.is_visible(), live);
            }
        }
    }

    #[test]
    fn test_once_reverts_after_leaving() {
        let mut query = RecordingQuery::default();
        let mut reveal = RevealController::default();
        reveal.mount(&mut query, Rect::default());
        let id = reveal.tracker().observer_id().unwrap();

        let report = |is_intersecting| IntersectionEntry {
            id,
            ratio: if is_intersecting { 1.0 } else { 0.0 },
            is_intersecting,
        };

        // Initial not-intersecting report leaves the section visible
        assert_eq!(reveal.on_entry(&report(false)), None);
        assert_eq!(reveal.state(), RevealState::Visible);

        assert_eq!(reveal.on_entry(&report(true)), None);
        assert_eq!(reveal.on_entry(&report(false)), Some(RevealState::Hidden));
        assert_eq!(reveal.on_entry(&report(true)), Some(RevealState::Visible));
    }

    #[test]
    fn test_active_style_tracks_state() {
        let mut query = RecordingQuery::default();
        let mut reveal = RevealController::new(ObserverOptions::default(), REPEAT, RevealVariant::Scale);
        reveal.mount(&mut query, Rect::default());
        assert_eq!(reveal.active_style(), RevealVariant::Scale.styles().hidden);

        let id = reveal.tracker().observer_id().unwrap();
        reveal.on_entry(&IntersectionEntry {
            id,
            ratio: 0.5,
            is_intersecting: true,
        });
        assert_eq!(reveal.active_style(), RevealVariant::Scale.styles().visible);
    }
}
