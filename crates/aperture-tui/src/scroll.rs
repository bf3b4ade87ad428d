//! Smooth page scrolling
//!
//! Scroll requests accumulate as a pending delta and are turned into one
//! eased animation on the next `update`, so a burst of wheel events becomes
//! a single glide instead of a queue of small ones.

use std::time::{Duration, Instant};

use aperture_core::config::UiConfig;
use aperture_core::motion::{is_complete, lerp, progress, EasingType};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    smooth: bool,
    duration: Duration,
    easing: EasingType,
    current_scroll: u16,
    pending_delta: i32,
}

impl ScrollAnimator {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            animation: None,
            smooth: config.is_smooth(),
            duration: Duration::from_millis(config.scroll_duration_ms),
            easing: config.easing,
            current_scroll: 0,
            pending_delta: 0,
        }
    }

    /// Animation or batched delta still waiting to be applied
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Where the page will rest once the current animation finishes
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Jump without animating
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Animate to an absolute row
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);
        if !self.smooth {
            self.set_scroll(target);
            return;
        }
        self.pending_delta = 0;
        if target == self.current_scroll {
            self.animation = None;
            return;
        }
        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current_scroll,
            to: target,
        });
    }

    /// Scroll by a delta (positive = down); batched until the next `update`
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.smooth {
            let scroll = (self.current_scroll as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.set_scroll(scroll);
            return;
        }
        self.pending_delta += delta;
    }

    /// Advance the animation and return the row to draw from
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = (self.target_scroll() as i32 + self.pending_delta)
                .clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;
            if target != self.current_scroll {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current_scroll,
                    to: target,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, self.duration, now) {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = self.easing.apply(progress(anim.start, self.duration, now));
                let row = lerp(anim.from as f64, anim.to as f64, t).round() as u16;
                self.current_scroll = row.min(max_scroll);
            }
        }

        self.current_scroll
    }
}
