//! Frame clock for driving per-frame simulation steps.
//!
//! A [`FrameClock`] hands out one [`Frame`] per display refresh while it is
//! *armed*, and nothing while it is cancelled. Each effect owns its own
//! clock: the background field arms at mount, the triangle swarm only while
//! the pointer hovers its region.
//!
//! Time is passed in explicitly as a [`Duration`] since mount, so the clock
//! is deterministic under test and the host decides where timestamps come
//! from.
//!
//! # Example
//!
//! ```ignore
//! use backdrop::time::FrameClock;
//! use std::time::Duration;
//!
//! let mut clock = FrameClock::new();
//! clock.arm();
//!
//! // In your event loop:
//! if let Some(frame) = clock.tick(Duration::from_millis(16)) {
//!     println!("Frame {} (+{:?})", frame.index, frame.delta);
//! }
//!
//! clock.cancel();
//! assert!(clock.tick(Duration::from_millis(32)).is_none());
//! ```

use std::time::Duration;

/// One armed step of a [`FrameClock`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Frames handed out since the clock was created.
    pub index: u64,
    /// Timestamp of this frame (time since mount).
    pub now: Duration,
    /// Time since the previous frame of the same armed run.
    ///
    /// Zero for the first frame after arming.
    pub delta: Duration,
}

/// Armable per-frame scheduler.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Whether a next frame is requested.
    armed: bool,
    /// Timestamp of the last frame handed out in the current armed run.
    last_frame: Option<Duration>,
    /// Total frames handed out.
    frame_count: u64,
}

impl FrameClock {
    /// Create a disarmed clock.
    pub fn new() -> Self {
        Self {
            armed: false,
            last_frame: None,
            frame_count: 0,
        }
    }

    /// Request frames from now on. Arming an armed clock does nothing.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Stop handing out frames.
    ///
    /// The next [`arm`](Self::arm) starts a fresh run, so the first frame
    /// after re-arming reports a zero delta instead of the idle gap.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.last_frame = None;
    }

    /// Whether the clock currently hands out frames.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Advance to `now`. Returns `None` while disarmed.
    pub fn tick(&mut self, now: Duration) -> Option<Frame> {
        if !self.armed {
            return None;
        }

        let delta = self
            .last_frame
            .map(|last| now.saturating_sub(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);

        let frame = Frame {
            index: self.frame_count,
            now,
            delta,
        };
        self.frame_count += 1;

        Some(frame)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_clock_new_is_disarmed() {
        let mut clock = FrameClock::new();
        assert!(!clock.is_armed());
        assert!(clock.tick(ms(16)).is_none());
    }

    #[test]
    fn test_clock_tick_while_armed() {
        let mut clock = FrameClock::new();
        clock.arm();

        let first = clock.tick(ms(10)).unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.delta, Duration::ZERO);

        let second = clock.tick(ms(26)).unwrap();
        assert_eq!(second.index, 1);
        assert_eq!(second.delta, ms(16));
    }

    #[test]
    fn test_clock_cancel_stops_frames() {
        let mut clock = FrameClock::new();
        clock.arm();
        clock.tick(ms(0));
        clock.cancel();

        assert!(!clock.is_armed());
        assert!(clock.tick(ms(16)).is_none());

        clock.arm();
        assert_eq!(clock.tick(ms(32)).map(|f| f.index), Some(1));
    }

    #[test]
    fn test_clock_rearm_resets_delta() {
        let mut clock = FrameClock::new();
        clock.arm();
        clock.tick(ms(0));
        clock.cancel();

        clock.arm();
        let frame = clock.tick(ms(5_000)).unwrap();
        assert_eq!(frame.delta, Duration::ZERO);
    }
}
