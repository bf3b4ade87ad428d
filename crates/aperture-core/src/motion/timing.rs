//! Time calculation utilities for transitions
//!
//! Every function takes `now` explicitly so hosts and tests control the clock.

use std::time::{Duration, Instant};

/// Progress in `[0, 1]` of an animation started at `start`
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(-50.0, 0.0, 1.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert_eq!(progress(start, Duration::ZERO, start), 1.0);
    }

    #[test]
    fn test_progress_midway_and_clamped() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        let mid = progress(start, duration, start + Duration::from_millis(100));
        assert!((mid - 0.5).abs() < 1e-9);
        assert_eq!(progress(start, duration, start + Duration::from_secs(5)), 1.0);
        // A `now` before `start` reads as not started
        assert_eq!(progress(start + duration, duration, start), 0.0);
    }

    #[test]
    fn test_is_complete() {
        let start = Instant::now();
        let duration = Duration::from_millis(10);
        assert!(!is_complete(start, duration, start));
        assert!(is_complete(start, duration, start + duration));
    }
}
