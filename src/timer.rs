//! Cancellable one-shot timers.
//!
//! Timers are polled rather than called back: the owner schedules a
//! deadline, then asks [`Timer::poll`] on every update whether it fired.
//! Rescheduling replaces the pending deadline, which gives debounce
//! semantics for free.

use std::time::Duration;

/// A one-shot timer measured against the caller's clock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Duration>,
}

impl Timer {
    /// Create an idle timer.
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Fire `delay` after `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline.
    #[inline]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
