//! Eased interpolation between reveal styles
//!
//! Renderers hold one transition per section and retarget it whenever the
//! controller reports a state flip. A retarget mid-flight starts from the
//! currently displayed style, so reversals never jump.

use std::time::{Duration, Instant};

use super::variant::{ResolvedStyle, StyleDescriptor};
use crate::config::EasingType;
use crate::motion::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone, Copy)]
struct Segment {
    from: ResolvedStyle,
    to: ResolvedStyle,
    start: Instant,
    duration: Duration,
}

#[derive(Debug, Clone)]
pub struct RevealTransition {
    easing: EasingType,
    fallback_duration: Duration,
    settled: ResolvedStyle,
    segment: Option<Segment>,
}

impl RevealTransition {
    /// Start at rest on `initial`
    pub fn new(initial: &StyleDescriptor, easing: EasingType, fallback_duration: Duration) -> Self {
        Self {
            easing,
            fallback_duration,
            settled: initial.resolve(),
            segment: None,
        }
    }

    /// Animate towards `target`, using its own duration or the fallback
    pub fn retarget(&mut self, target: &StyleDescriptor, now: Instant) {
        let from = self.sample(now);
        let to = target.resolve();
        let duration = if target.duration_ms > 0 {
            Duration::from_millis(target.duration_ms)
        } else {
            self.fallback_duration
        };

        if from == to || duration.is_zero() {
            self.settled = to;
            self.segment = None;
            return;
        }

        self.segment = Some(Segment {
            from,
            to,
            start: now,
            duration,
        });
    }

    /// Jump straight to `target` without animating
    pub fn snap(&mut self, target: &StyleDescriptor) {
        self.settled = target.resolve();
        self.segment = None;
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.segment
            .map(|s| !is_complete(s.start, s.duration, now))
            .unwrap_or(false)
    }

    /// Style to draw at `now`
    pub fn sample(&self, now: Instant) -> ResolvedStyle {
        let Some(segment) = self.segment else {
            return self.settled;
        };
        let t = self
            .easing
            .apply(progress(segment.start, segment.duration, now));
        ResolvedStyle {
            opacity: lerp(segment.from.opacity, segment.to.opacity, t),
            translate_x: lerp(segment.from.translate_x, segment.to.translate_x, t),
            translate_y: lerp(segment.from.translate_y, segment.to.translate_y, t),
            scale: lerp(segment.from.scale, segment.to.scale, t),
        }
    }

    /// Fold a finished segment into the resting style; returns the style at `now`
    pub fn update(&mut self, now: Instant) -> ResolvedStyle {
        if let Some(segment) = self.segment {
            if is_complete(segment.start, segment.duration, now) {
                self.settled = segment.to;
                self.segment = None;
            }
        }
        self.sample(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealVariant;

    fn fade() -> (StyleDescriptor, StyleDescriptor) {
        let styles = RevealVariant::FadeIn.styles();
        (styles.hidden, styles.visible)
    }

    #[test]
    fn test_linear_fade_midpoint() {
        let (hidden, visible) = fade();
        let start = Instant::now();
        let mut transition = RevealTransition::new(&hidden, EasingType::Linear, Duration::from_millis(300));
        transition.retarget(&visible, start);

        let mid = transition.sample(start + Duration::from_millis(300));
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!(transition.is_animating(start + Duration::from_millis(599)));
    }

    #[test]
    fn test_update_settles_at_target() {
        let (hidden, visible) = fade();
        let start = Instant::now();
        let mut transition = RevealTransition::new(&hidden, EasingType::Cubic, Duration::from_millis(300));
        transition.retarget(&visible, start);

        let end = start + Duration::from_millis(600);
        assert_eq!(transition.update(end), visible.resolve());
        assert!(!transition.is_animating(end));
    }

    #[test]
    fn test_reversal_starts_from_current_style() {
        let (hidden, visible) = fade();
        let start = Instant::now();
        let mut transition = RevealTransition::new(&hidden, EasingType::Linear, Duration::from_millis(600));
        transition.retarget(&visible, start);

        let reverse_at = start + Duration::from_millis(150);
        transition.retarget(&hidden, reverse_at);
        let right_after = transition.sample(reverse_at);
        assert!((right_after.opacity - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_empty_variant_never_animates() {
        let styles = RevealVariant::None.styles();
        let start = Instant::now();
        let mut transition = RevealTransition::new(&styles.hidden, EasingType::Cubic, Duration::from_millis(300));
        transition.retarget(&styles.visible, start);
        assert!(!transition.is_animating(start));
    }
}
