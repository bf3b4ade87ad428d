use std::time::{Duration, Instant};

/// A timer slot holding at most one pending deadline
///
/// Scheduling always replaces whatever was pending, so two transitions can
/// never be queued at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleShotTimer {
    deadline: Option<Instant>,
}

impl SingleShotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel anything pending and fire once `delay` after `from`
    pub fn schedule(&mut self, from: Instant, delay: Duration) {
        self.cancel();
        self.deadline = Some(from + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Clear and return the deadline if it has passed
    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if deadline <= now => self.deadline.take(),
            _ => None,
        }
    }
}
