//! Pointer tracking for the effects.
//!
//! The [`PointerTracker`] keeps the latest pointer position, a single-sample
//! velocity estimate, and a debounced "is moving" flag. Positions are kept
//! in *document* coordinates: the viewport position plus the current
//! vertical scroll offset. Effects that live in the viewport (the fixed
//! background field) read [`PointerTracker::viewport_position`] instead.
//!
//! # Usage
//!
//! ```ignore
//! let mut pointer = PointerTracker::new(Duration::from_millis(100));
//!
//! pointer.on_scroll(240.0);
//! pointer.on_move(Vec2::new(10.0, 20.0), now);
//! assert_eq!(pointer.position(), Vec2::new(10.0, 260.0));
//!
//! // Later, once per update:
//! pointer.update(now + Duration::from_millis(150));
//! assert!(!pointer.is_moving());
//! ```

use std::time::Duration;

use glam::Vec2;
use winit::event::MouseScrollDelta;

use crate::timer::Timer;

/// Pixels scrolled per wheel line.
pub const LINE_HEIGHT: f32 = 40.0;

/// Latest pointer state, updated synchronously on every move event.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    // Position
    position: Vec2,
    viewport_position: Vec2,
    velocity: Vec2,

    // Document scroll
    scroll_offset: f32,

    // Motion
    moving: bool,
    idle_since: Option<Duration>,
    idle_debounce: Duration,
    idle_timer: Timer,
}

impl PointerTracker {
    /// Create a tracker at the origin that considers the pointer idle
    /// `idle_debounce` after its last move.
    pub fn new(idle_debounce: Duration) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport_position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            scroll_offset: 0.0,
            moving: false,
            idle_since: None,
            idle_debounce,
            idle_timer: Timer::new(),
        }
    }

    // ========== Queries ==========

    /// Pointer position in document coordinates.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Pointer position relative to the viewport's top-left corner.
    #[inline]
    pub fn viewport_position(&self) -> Vec2 {
        self.viewport_position
    }

    /// Delta between the last two recorded document positions.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Magnitude of [`velocity`](Self::velocity).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Whether the pointer moved within the idle debounce window.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// When the pointer last went idle: the end of its debounce window.
    /// `None` while moving or before the first move.
    #[inline]
    pub fn idle_since(&self) -> Option<Duration> {
        self.idle_since
    }

    /// Current vertical scroll offset of the document.
    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    // ========== Updates ==========

    /// Record a pointer move to `viewport_pos` at time `now`.
    pub fn on_move(&mut self, viewport_pos: Vec2, now: Duration) {
        let document_pos = viewport_pos + Vec2::new(0.0, self.scroll_offset);
        self.velocity = document_pos - self.position;
        self.position = document_pos;
        self.viewport_position = viewport_pos;

        self.moving = true;
        self.idle_since = None;
        self.idle_timer.schedule(now, self.idle_debounce);
    }

    /// Record the document's vertical scroll offset.
    ///
    /// The pointer's document position is refreshed by the next move.
    pub fn on_scroll(&mut self, scroll_offset: f32) {
        self.scroll_offset = scroll_offset;
    }

    /// Expire the idle debounce. Call once per update before reading
    /// [`is_moving`](Self::is_moving).
    pub fn update(&mut self, now: Duration) {
        let deadline = self.idle_timer.deadline();
        if self.idle_timer.poll(now) {
            self.moving = false;
            self.idle_since = deadline;
        }
    }

    /// Clear all state and cancel the debounce.
    pub fn reset(&mut self) {
        self.position = Vec2::ZERO;
        self.viewport_position = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        self.scroll_offset = 0.0;
        self.moving = false;
        self.idle_since = None;
        self.idle_timer.cancel();
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

/// Convert a wheel delta into document pixels (positive scrolls down).
pub fn wheel_pixels(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -*y * LINE_HEIGHT,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_velocity_is_single_sample_delta() {
        let mut pointer = PointerTracker::default();

        pointer.on_move(Vec2::new(10.0, 10.0), ms(0));
        pointer.on_move(Vec2::new(13.0, 14.0), ms(5));

        assert_eq!(pointer.velocity(), Vec2::new(3.0, 4.0));
        assert!((pointer.speed() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_document_coordinates_include_scroll() {
        let mut pointer = PointerTracker::default();
        pointer.on_scroll(300.0);
        pointer.on_move(Vec2::new(50.0, 20.0), ms(0));

        assert_eq!(pointer.position(), Vec2::new(50.0, 320.0));
        assert_eq!(pointer.viewport_position(), Vec2::new(50.0, 20.0));
    }

    #[test]
    fn test_moving_debounce() {
        let mut pointer = PointerTracker::new(ms(100));
        assert!(!pointer.is_moving());

        pointer.on_move(Vec2::ONE, ms(0));
        assert!(pointer.is_moving());

        // A second move restarts the window
        pointer.on_move(Vec2::ONE * 2.0, ms(60));
        pointer.update(ms(120));
        assert!(pointer.is_moving());

        pointer.update(ms(160));
        assert!(!pointer.is_moving());
        // Idle from the end of the window, not from the update
        assert_eq!(pointer.idle_since(), Some(ms(160)));

        pointer.on_move(Vec2::ONE, ms(300));
        pointer.update(ms(450));
        assert_eq!(pointer.idle_since(), Some(ms(400)));
    }

    #[test]
    fn test_reset_cancels_debounce() {
        let mut pointer = PointerTracker::default();
        pointer.on_scroll(10.0);
        pointer.on_move(Vec2::new(4.0, 4.0), ms(0));
        pointer.reset();

        assert!(!pointer.is_moving());
        assert_eq!(pointer.position(), Vec2::ZERO);
        assert_eq!(pointer.scroll_offset(), 0.0);
    }

    #[test]
    fn test_wheel_pixels() {
        assert_eq!(wheel_pixels(&MouseScrollDelta::LineDelta(0.0, -1.0)), LINE_HEIGHT);
        assert_eq!(
            wheel_pixels(&MouseScrollDelta::PixelDelta(winit::dpi::PhysicalPosition::new(0.0, 25.0))),
            -25.0
        );
    }
}
