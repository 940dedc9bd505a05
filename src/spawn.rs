//! Random spawn helpers shared by the effects.
//!
//! Both effects place things randomly: the particle field scatters its
//! population over the viewport once, the swarm drops triangles around the
//! pointer on every move. [`SpawnContext`] wraps a small seeded RNG with the
//! handful of distributions they need.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::ops::Range;

/// Seeded RNG with spawn-oriented helpers.
///
/// ```ignore
/// let mut ctx = SpawnContext::seeded(7);
/// let p = ctx.random_in_rect(Vec2::new(1200.0, 800.0));
/// let offset = ctx.random_polar(30.0..200.0);
/// ```
#[derive(Debug, Clone)]
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Deterministic context, for tests and reproducible snapshots.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seed from `seed` when given, otherwise from the wall clock so each
    /// program run looks different.
    pub fn from_seed_or_clock(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42)
        });
        Self::seeded(seed)
    }

    /// Independent context seeded from this one's stream.
    pub fn fork(&mut self) -> Self {
        Self::seeded(self.rng.gen())
    }

    // ========== Random primitives ==========

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `range`. An empty range yields its start.
    #[inline]
    pub fn random_range(&mut self, range: Range<f32>) -> f32 {
        if range.start < range.end {
            self.rng.gen_range(range)
        } else {
            range.start
        }
    }

    /// Fair coin flip.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    // ========== Position helpers ==========

    /// Uniform point in the rectangle from the origin to `size`.
    pub fn random_in_rect(&mut self, size: Vec2) -> Vec2 {
        Vec2::new(self.random() * size.x, self.random() * size.y)
    }

    /// Offset at a uniform angle and a distance drawn uniformly from
    /// `distance`.
    ///
    /// The distance is uniform along the radius, not over the annulus area,
    /// so points cluster slightly toward the inner edge.
    pub fn random_polar(&mut self, distance: Range<f32>) -> Vec2 {
        let angle = self.rng.gen_range(0.0..TAU);
        let r = self.random_range(distance);
        Vec2::new(angle.cos(), angle.sin()) * r
    }

    /// Velocity with each component drawn from `-max..max`.
    pub fn random_velocity(&mut self, max: f32) -> Vec2 {
        Vec2::new(
            self.random_range(-max..max),
            self.random_range(-max..max),
        )
    }
}
