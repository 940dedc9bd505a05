//! Pointer-following triangle swarm.
//!
//! While the pointer hovers the swarm's [`Region`], every pointer move drops
//! a small batch of triangles around it. Each frame the triangles fade with
//! distance from the pointer, darken once the pointer has been idle for a
//! while, glow when the pointer is close, and spin with the pointer's
//! speed. A triangle is dropped as soon as its opacity reaches zero;
//! leaving the region drops all of them at once.
//!
//! Triangles live in document coordinates. They do not drift: only their
//! rotation and the values derived from the pointer change.
//!
//! # Lifecycle
//!
//! There are no discrete states in the simulation itself; opacity drives
//! everything. [`TriangleSwarm::phase_of`] gives a three-state view of a
//! triangle for inspection:
//!
//! | Phase | Meaning |
//! |-------|---------|
//! | [`Phase::Spawning`] | Placed, not yet through a frame |
//! | [`Phase::Active`] | Updated by at least one frame |
//! | [`Phase::Removed`] | Faded out or cleared; the id is never reused |

use std::time::Duration;

use glam::{Mat3, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, TriangleGlyph};
use crate::config::SwarmConfig;
use crate::input::PointerTracker;
use crate::spawn::SpawnContext;
use crate::time::{Frame, FrameClock};
use crate::timer::Timer;
use crate::visuals::Rgba;

/// Side of the square box the glyph outline is laid out in.
const GLYPH_BOX: f32 = 100.0;

/// Outline vertices inside the glyph box: an isosceles triangle, apex up.
const GLYPH_OUTLINE: [[f32; 2]; 3] = [[50.0, 10.0], [90.0, 90.0], [10.0, 90.0]];

/// Outline width in glyph box units.
const GLYPH_STROKE: f32 = 3.0;

/// Darken progress this close to 0 or 1 snaps to it, so a whole number of
/// steps lands exactly on the end.
const DARKEN_SNAP: f32 = 1e-4;

/// Axis-aligned rectangle in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub min: Vec2,
    pub max: Vec2,
}

impl Region {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// The hero section: full width, one viewport tall, at the page top.
    pub fn hero(viewport: Vec2) -> Self {
        Self::new(Vec2::ZERO, viewport)
    }

    /// Whether `point` lies inside. The max edges are exclusive.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }
}

/// One swarm marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Unique within a mount session, increasing in spawn order.
    pub id: u64,
    /// Document position, fixed at spawn.
    pub position: Vec2,
    /// Rotation around x, y and z in degrees.
    pub rotation: Vec3,
    /// Rotation direction; only the sign matters.
    pub spin: f32,
    /// Glyph edge length.
    pub size: f32,
    pub opacity: f32,
    pub brightness: f32,
    pub darken_progress: f32,
    /// Set by the first frame after spawning.
    updated: bool,
}

/// Conceptual lifecycle state of a triangle id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    Active,
    Removed,
}

/// Opacity from distance alone: 1 up to `fade_start`, then a power-curve
/// fade reaching 0 at `fade_end`.
pub fn distance_opacity(distance: f32, cfg: &SwarmConfig) -> f32 {
    if distance <= cfg.fade_start {
        return 1.0;
    }
    let progress = (distance - cfg.fade_start) / (cfg.fade_end - cfg.fade_start);
    (1.0 - progress.powf(cfg.fade_exponent)).max(0.0)
}

/// Final opacity: the more faded of the distance fade and the darken fade,
/// under the overall ceiling.
pub fn combined_opacity(distance_opacity: f32, darken_progress: f32, cfg: &SwarmConfig) -> f32 {
    distance_opacity.min(1.0 - darken_progress) * cfg.opacity_ceiling
}

/// Glow intensity: linear from 1 at the pointer to 0 at `brightness_radius`.
pub fn brightness(distance: f32, cfg: &SwarmConfig) -> f32 {
    if distance < cfg.brightness_radius {
        1.0 - distance / cfg.brightness_radius
    } else {
        0.0
    }
}

/// Next darken progress for one frame.
pub fn next_darken(current: f32, should_darken: bool, moving: bool, cfg: &SwarmConfig) -> f32 {
    let next = if should_darken {
        current + cfg.darken_step
    } else if moving {
        current - cfg.undarken_step
    } else {
        return current;
    };
    if next >= 1.0 - DARKEN_SNAP {
        1.0
    } else if next <= DARKEN_SNAP {
        0.0
    } else {
        next
    }
}

/// Degrees to add this frame, before the per-axis weights.
pub fn rotation_change(distance: f32, pointer_speed: f32, moving: bool, spin: f32, cfg: &SwarmConfig) -> f32 {
    if !moving || distance >= cfg.rotation_radius {
        return 0.0;
    }
    let influence = 1.0 - distance / cfg.rotation_radius;
    let speed_multiplier = cfg.min_speed_multiplier
        + influence * (cfg.max_speed_multiplier - cfg.min_speed_multiplier);
    let velocity_factor = (pointer_speed / cfg.velocity_divisor).min(cfg.max_velocity_factor);
    let direction = if spin > 0.0 { 1.0 } else { -1.0 };
    direction * influence * velocity_factor * speed_multiplier
}

/// The swarm simulation.
#[derive(Debug, Clone)]
pub struct TriangleSwarm {
    triangles: Vec<Triangle>,
    last_id: u64,
    hovering: bool,
    clock: FrameClock,

    // Idle darkening
    darken_timer: Timer,
    should_darken: bool,
    pointer_was_moving: bool,

    config: SwarmConfig,
    ctx: SpawnContext,
}

impl TriangleSwarm {
    pub fn new(config: SwarmConfig, ctx: SpawnContext) -> Self {
        Self {
            triangles: Vec::new(),
            last_id: 0,
            hovering: false,
            clock: FrameClock::new(),
            darken_timer: Timer::new(),
            should_darken: false,
            pointer_was_moving: false,
            config,
            ctx,
        }
    }

    // ========== Lifecycle ==========

    /// Begin a mount session. The pointer starts idle, so the darken
    /// countdown starts immediately.
    pub fn start(&mut self, now: Duration) {
        self.triangles.clear();
        self.last_id = 0;
        self.hovering = false;
        self.clock.cancel();
        self.should_darken = false;
        self.pointer_was_moving = false;
        self.darken_timer.schedule(now, self.config.darken_delay());
    }

    /// End the mount session: cancel the frame clock and the darken timer
    /// and drop every triangle.
    pub fn stop(&mut self) {
        self.triangles.clear();
        self.hovering = false;
        self.clock.cancel();
        self.darken_timer.cancel();
        self.should_darken = false;
        self.pointer_was_moving = false;
    }

    /// The pointer entered the hover region: arm the frame clock.
    pub fn on_pointer_enter(&mut self) {
        if !self.hovering {
            self.hovering = true;
            self.clock.arm();
        }
    }

    /// The pointer left the hover region: disarm and clear everything.
    pub fn on_pointer_leave(&mut self) {
        if !self.triangles.is_empty() {
            log::trace!("swarm: bulk clear of {} triangles", self.triangles.len());
        }
        self.hovering = false;
        self.triangles.clear();
        self.clock.cancel();
    }

    // ========== Events ==========

    /// Handle a pointer move: sync the darken timer and, while hovering,
    /// spawn a batch around the pointer. Returns the number spawned.
    pub fn on_pointer_move(&mut self, pointer: &PointerTracker, now: Duration) -> usize {
        self.sync_motion(pointer, now);
        if !self.hovering {
            return 0;
        }
        self.spawn_batch(pointer.position())
    }

    /// Advance timers to `now`. Call once per update, armed or not.
    pub fn update_timers(&mut self, pointer: &PointerTracker, now: Duration) {
        self.sync_motion(pointer, now);
        if self.darken_timer.poll(now) {
            self.should_darken = true;
        }
    }

    /// Next frame from the swarm's clock, `None` while not hovering.
    pub fn tick(&mut self, now: Duration) -> Option<Frame> {
        self.clock.tick(now)
    }

    /// Recompute every triangle against the pointer and drop the ones that
    /// faded out. Returns the number removed.
    pub fn on_frame(&mut self, pointer: &PointerTracker) -> usize {
        let cfg = &self.config;
        let target = pointer.position();
        let moving = pointer.is_moving();
        let speed = pointer.speed();
        let should_darken = self.should_darken;

        for t in &mut self.triangles {
            let distance = t.position.distance(target);

            t.darken_progress = next_darken(t.darken_progress, should_darken, moving, cfg);
            t.opacity = combined_opacity(distance_opacity(distance, cfg), t.darken_progress, cfg);
            t.brightness = brightness(distance, cfg);
            t.rotation += cfg.axis_weights * rotation_change(distance, speed, moving, t.spin, cfg);
            t.updated = true;
        }

        let before = self.triangles.len();
        self.triangles.retain(|t| t.opacity > 0.0);
        before - self.triangles.len()
    }

    /// Follow the pointer's moving/idle transitions. The idle countdown
    /// starts from the instant the pointer went idle.
    fn sync_motion(&mut self, pointer: &PointerTracker, now: Duration) {
        let moving = pointer.is_moving();
        if moving == self.pointer_was_moving {
            return;
        }
        if moving {
            self.darken_timer.cancel();
            self.should_darken = false;
        } else {
            let idle_at = pointer.idle_since().unwrap_or(now);
            self.darken_timer.schedule(idle_at, self.config.darken_delay());
        }
        self.pointer_was_moving = moving;
    }

    /// Try to place up to a batch of triangles around `center`, keeping the
    /// minimum separation against every live triangle, including the ones
    /// placed earlier in the same batch.
    fn spawn_batch(&mut self, center: Vec2) -> usize {
        let cfg = &self.config;
        let room = cfg.max_triangles.saturating_sub(self.triangles.len());
        let slots = cfg.batch_size.min(room);
        let [d_min, d_max] = cfg.spawn_distance;

        let mut spawned = 0;
        for _ in 0..slots {
            let found = (0..cfg.spawn_attempts).find_map(|_| {
                let candidate = center + self.ctx.random_polar(d_min..d_max);
                self.triangles
                    .iter()
                    .all(|t| t.position.distance(candidate) >= cfg.min_separation)
                    .then_some(candidate)
            });

            if let Some(position) = found {
                self.last_id += 1;
                let z = if self.ctx.coin() { 0.0 } else { 180.0 };
                self.triangles.push(Triangle {
                    id: self.last_id,
                    position,
                    rotation: Vec3::new(0.0, 0.0, z),
                    spin: cfg.spin,
                    size: cfg.size,
                    opacity: 1.0,
                    brightness: 1.0,
                    darken_progress: 0.0,
                    updated: false,
                });
                spawned += 1;
            }
        }

        if spawned > 0 {
            log::trace!("swarm: spawned {}/{} ({} live)", spawned, slots, self.triangles.len());
        }
        spawned
    }

    // ========== Rendering ==========

    /// Draw every triangle, shifted into the viewport by `scroll_offset`.
    pub fn render(&self, canvas: &mut dyn Canvas, scroll_offset: f32) {
        let shift = Vec2::new(0.0, scroll_offset);
        for t in &self.triangles {
            canvas.draw_triangle(&self.glyph(t, t.position - shift));
        }
    }

    /// Project a triangle whose box is centered at `center`, with its
    /// CSS-order rotation (`rotateX rotateY rotateZ`) and perspective.
    fn glyph(&self, t: &Triangle, center: Vec2) -> TriangleGlyph {
        let rot = Mat3::from_rotation_x(t.rotation.x.to_radians())
            * Mat3::from_rotation_y(t.rotation.y.to_radians())
            * Mat3::from_rotation_z(t.rotation.z.to_radians());

        let unit = t.size / GLYPH_BOX;
        let local = GLYPH_OUTLINE.map(|[x, y]| Vec3::new(x - GLYPH_BOX * 0.5, y - GLYPH_BOX * 0.5, 0.0) * unit);

        let perspective = self.config.perspective;
        let vertices = local.map(|v| {
            let p = rot * v;
            let scale = perspective / (perspective - p.z).max(1.0);
            center + p.truncate() * scale
        });

        TriangleGlyph {
            vertices,
            stroke_width: GLYPH_STROKE * unit,
            stroke: self.config.color.scaled(t.brightness).with_alpha(t.opacity),
            glow: Rgba::WHITE.with_alpha(t.brightness * 0.5 * t.opacity),
        }
    }

    // ========== Queries ==========

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether the frame clock is armed.
    pub fn is_armed(&self) -> bool {
        self.clock.is_armed()
    }

    /// Whether the idle delay elapsed and triangles are darkening.
    pub fn should_darken(&self) -> bool {
        self.should_darken
    }

    /// Whether the idle countdown is running.
    pub fn darken_pending(&self) -> bool {
        self.darken_timer.is_pending()
    }

    /// Lifecycle view of `id`, or `None` if it was never issued this session.
    pub fn phase_of(&self, id: u64) -> Option<Phase> {
        if id == 0 || id > self.last_id {
            return None;
        }
        let phase = match self.triangles.iter().find(|t| t.id == id) {
            Some(t) if t.updated => Phase::Active,
            Some(_) => Phase::Spawning,
            None => Phase::Removed,
        };
        Some(phase)
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn swarm() -> TriangleSwarm {
        let mut swarm = TriangleSwarm::new(SwarmConfig::default(), SpawnContext::seeded(17));
        swarm.start(Duration::ZERO);
        swarm
    }

    fn place(swarm: &mut TriangleSwarm, position: Vec2) -> u64 {
        swarm.last_id += 1;
        swarm.triangles.push(Triangle {
            id: swarm.last_id,
            position,
            rotation: Vec3::ZERO,
            spin: 8.0,
            size: 30.0,
            opacity: 1.0,
            brightness: 1.0,
            darken_progress: 0.0,
            updated: false,
        });
        swarm.last_id
    }

    #[test]
    fn test_distance_opacity() {
        let cfg = SwarmConfig::default();
        assert_eq!(distance_opacity(0.0, &cfg), 1.0);
        assert_eq!(distance_opacity(100.0, &cfg), 1.0);
        // 1 - 0.5^0.7
        assert!((distance_opacity(140.0, &cfg) - 0.3844).abs() < 1e-3);
        assert_eq!(distance_opacity(180.0, &cfg), 0.0);
        assert_eq!(distance_opacity(400.0, &cfg), 0.0);
    }

    #[test]
    fn test_combined_opacity_takes_faded_signal() {
        let cfg = SwarmConfig::default();
        assert!((combined_opacity(1.0, 0.0, &cfg) - 0.8).abs() < 1e-6);
        assert!((combined_opacity(1.0, 0.75, &cfg) - 0.2).abs() < 1e-6);
        assert!((combined_opacity(0.1, 0.5, &cfg) - 0.08).abs() < 1e-6);
        assert_eq!(combined_opacity(1.0, 1.0, &cfg), 0.0);
    }

    #[test]
    fn test_brightness() {
        let cfg = SwarmConfig::default();
        assert_eq!(brightness(0.0, &cfg), 1.0);
        assert!((brightness(40.0, &cfg) - 0.75).abs() < 1e-6);
        assert_eq!(brightness(160.0, &cfg), 0.0);
    }

    #[test]
    fn test_next_darken() {
        let cfg = SwarmConfig::default();
        assert!((next_darken(0.5, true, false, &cfg) - 0.52).abs() < 1e-6);
        assert_eq!(next_darken(0.99, true, true, &cfg), 1.0);
        assert!((next_darken(0.5, false, true, &cfg) - 0.45).abs() < 1e-6);
        assert_eq!(next_darken(0.02, false, true, &cfg), 0.0);
        assert_eq!(next_darken(0.3, false, false, &cfg), 0.3);
    }

    #[test]
    fn test_darken_lands_on_whole_steps() {
        let cfg = SwarmConfig::default();
        let mut progress = 0.0;
        for _ in 0..49 {
            progress = next_darken(progress, true, false, &cfg);
        }
        assert!(progress < 1.0);
        progress = next_darken(progress, true, false, &cfg);
        assert_eq!(progress, 1.0);
        assert_eq!(combined_opacity(1.0, progress, &cfg), 0.0);

        for _ in 0..20 {
            progress = next_darken(progress, false, true, &cfg);
        }
        assert_eq!(progress, 0.0);
    }

    #[test]
    fn test_rotation_change() {
        let cfg = SwarmConfig::default();
        assert_eq!(rotation_change(10.0, 50.0, false, 8.0, &cfg), 0.0);
        assert_eq!(rotation_change(160.0, 50.0, true, 8.0, &cfg), 0.0);

        // distance 0: influence 1, multiplier 3, velocity factor 10/2.5 = 4
        assert!((rotation_change(0.0, 10.0, true, 8.0, &cfg) - 12.0).abs() < 1e-5);
        // Velocity factor caps at 15
        assert!((rotation_change(0.0, 1_000.0, true, 8.0, &cfg) - 45.0).abs() < 1e-4);
        // Negative spin turns the other way
        assert!((rotation_change(0.0, 10.0, true, -8.0, &cfg) + 12.0).abs() < 1e-5);
        // distance 80: influence 0.5, multiplier 1.55
        assert!((rotation_change(80.0, 10.0, true, 8.0, &cfg) - 0.5 * 4.0 * 1.55).abs() < 1e-5);
    }

    #[test]
    fn test_spawn_requires_hover() {
        let mut swarm = swarm();
        let mut pointer = PointerTracker::default();
        pointer.on_move(Vec2::new(500.0, 500.0), ms(0));

        assert_eq!(swarm.on_pointer_move(&pointer, ms(0)), 0);
        swarm.on_pointer_enter();
        let spawned = swarm.on_pointer_move(&pointer, ms(0));
        assert!(spawned > 0 && spawned <= 8);
        assert_eq!(swarm.len(), spawned);
    }

    #[test]
    fn test_spawn_positions_and_initial_state() {
        let mut swarm = swarm();
        swarm.on_pointer_enter();
        let mut pointer = PointerTracker::default();
        let center = Vec2::new(600.0, 400.0);
        pointer.on_move(center, ms(0));
        swarm.on_pointer_move(&pointer, ms(0));

        for t in swarm.triangles() {
            let d = t.position.distance(center);
            assert!(d >= 30.0 - 1e-3 && d < 200.0 + 1e-3);
            assert!(t.rotation.z == 0.0 || t.rotation.z == 180.0);
            assert_eq!(t.opacity, 1.0);
            assert_eq!(swarm.phase_of(t.id), Some(Phase::Spawning));
        }
    }

    #[test]
    fn test_spawn_respects_cap() {
        let mut swarm = swarm();
        swarm.on_pointer_enter();
        for i in 0..97 {
            place(&mut swarm, Vec2::new(10_000.0 + i as f32 * 100.0, 0.0));
        }
        let mut pointer = PointerTracker::default();
        pointer.on_move(Vec2::new(500.0, 500.0), ms(0));

        assert!(swarm.on_pointer_move(&pointer, ms(0)) <= 3);
        assert!(swarm.len() <= 100);
    }

    #[test]
    fn test_crowded_slots_are_skipped() {
        let mut config = SwarmConfig::default();
        // Separation larger than the whole spawn annulus: only one fits
        config.min_separation = 500.0;
        let mut swarm = TriangleSwarm::new(config, SpawnContext::seeded(3));
        swarm.start(Duration::ZERO);
        swarm.on_pointer_enter();

        let mut pointer = PointerTracker::default();
        pointer.on_move(Vec2::new(500.0, 500.0), ms(0));
        assert_eq!(swarm.on_pointer_move(&pointer, ms(0)), 1);
    }

    #[test]
    fn test_frame_recomputes_and_removes() {
        let mut swarm = swarm();
        swarm.on_pointer_enter();
        let near = place(&mut swarm, Vec2::new(100.0, 100.0));
        let far = place(&mut swarm, Vec2::new(100.0, 400.0));

        let mut pointer = PointerTracker::default();
        pointer.on_move(Vec2::new(100.0, 140.0), ms(0));

        assert_eq!(swarm.on_frame(&pointer), 1);
        assert_eq!(swarm.phase_of(near), Some(Phase::Active));
        assert_eq!(swarm.phase_of(far), Some(Phase::Removed));

        let t = &swarm.triangles()[0];
        assert!((t.opacity - 0.8).abs() < 1e-6);
        assert!((t.brightness - 0.75).abs() < 1e-6);
        assert!(t.rotation.x != 0.0);
        assert!((t.rotation.y / t.rotation.x - 0.7).abs() < 1e-4);
        assert!((t.rotation.z / t.rotation.x - 1.2).abs() < 1e-4);
    }

    #[test]
    fn test_leave_clears_and_disarms() {
        let mut swarm = swarm();
        swarm.on_pointer_enter();
        assert!(swarm.is_armed());
        place(&mut swarm, Vec2::new(1.0, 1.0));

        swarm.on_pointer_leave();
        assert!(swarm.is_empty());
        assert!(!swarm.is_armed());
        assert!(swarm.tick(ms(16)).is_none());
    }

    #[test]
    fn test_darken_timer_cycle() {
        let mut swarm = swarm();
        let mut pointer = PointerTracker::default();

        // Idle since mount
        swarm.update_timers(&pointer, ms(999));
        assert!(!swarm.should_darken());
        swarm.update_timers(&pointer, ms(1_000));
        assert!(swarm.should_darken());

        // Moving cancels immediately
        pointer.on_move(Vec2::ONE, ms(1_500));
        swarm.on_pointer_move(&pointer, ms(1_500));
        assert!(!swarm.should_darken());
        assert!(!swarm.darken_pending());

        // Idle again after the debounce, then the delay
        pointer.update(ms(1_600));
        swarm.update_timers(&pointer, ms(1_600));
        assert!(swarm.darken_pending());
        swarm.update_timers(&pointer, ms(2_599));
        assert!(!swarm.should_darken());
        swarm.update_timers(&pointer, ms(2_600));
        assert!(swarm.should_darken());
    }

    #[test]
    fn test_stop_cancels_everything() {
        let mut swarm = swarm();
        swarm.on_pointer_enter();
        place(&mut swarm, Vec2::ZERO);
        swarm.stop();

        assert!(swarm.is_empty());
        assert!(!swarm.is_armed());
        assert!(!swarm.darken_pending());
        swarm.update_timers(&PointerTracker::default(), ms(60_000));
        assert!(!swarm.should_darken());
    }

    #[test]
    fn test_ids_survive_bulk_clear() {
        let mut swarm = swarm();
        swarm.on_pointer_enter();
        let first = place(&mut swarm, Vec2::ZERO);
        swarm.on_pointer_leave();
        swarm.on_pointer_enter();
        let second = place(&mut swarm, Vec2::ZERO);

        assert!(second > first);
        assert_eq!(swarm.phase_of(first), Some(Phase::Removed));
        assert_eq!(swarm.phase_of(second + 1), None);
    }

    #[test]
    fn test_glyph_outline_follows_box() {
        let swarm = swarm();
        let t = Triangle {
            id: 1,
            position: Vec2::new(100.0, 900.0),
            rotation: Vec3::ZERO,
            spin: 8.0,
            size: 30.0,
            opacity: 0.5,
            brightness: 1.0,
            darken_progress: 0.0,
            updated: true,
        };
        let glyph = swarm.glyph(&t, t.position - Vec2::new(0.0, 800.0));

        // A 30 px box centered on the shifted position, apex up
        let expected = [Vec2::new(100.0, 88.0), Vec2::new(112.0, 112.0), Vec2::new(88.0, 112.0)];
        for (v, e) in glyph.vertices.iter().zip(expected) {
            assert!(v.distance(e) < 1e-3, "{v} != {e}");
        }
        assert!((glyph.stroke_width - 0.9).abs() < 1e-6);
        assert_eq!(glyph.stroke.to_rgba8(), [0, 0, 0, 128]);
        assert!((glyph.glow.a - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_region_contains() {
        let region = Region::hero(Vec2::new(800.0, 600.0));
        assert!(region.contains(Vec2::new(0.0, 0.0)));
        assert!(region.contains(Vec2::new(799.0, 599.0)));
        assert!(!region.contains(Vec2::new(800.0, 10.0)));
        assert!(!region.contains(Vec2::new(10.0, 600.0)));

        let flipped = Region::new(Vec2::ONE, Vec2::ZERO);
        assert_eq!((flipped.min, flipped.max), (Vec2::ZERO, Vec2::ONE));
    }
}
