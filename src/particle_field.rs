//! Background particle field.
//!
//! A fixed population of drifting discs fills the viewport. Each frame the
//! pointer pulls nearby particles and swells them, particles bounce off the
//! viewport edges with damping, and every pair closer than the connection
//! radius is joined by a fading line.
//!
//! Connections follow the order particles are updated in: the line from
//! particle `i` to a later particle `j` runs from `i`'s new position to the
//! position `j` had before this frame's step.
//!
//! The population is sized once from the viewport area and never changes
//! for the lifetime of the field.

use glam::Vec2;

use crate::canvas::Canvas;
use crate::config::ParticleFieldConfig;
use crate::input::PointerTracker;
use crate::spawn::SpawnContext;
use crate::visuals::{Gradient, GradientStop, Rgba};

/// One ambient particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Viewport position in pixels.
    pub position: Vec2,
    /// Pixels per frame.
    pub velocity: Vec2,
    /// Radius drawn this frame.
    pub radius: f32,
    /// Radius at rest.
    pub base_radius: f32,
    /// Fixed color; the alpha is chosen per particle at creation.
    pub color: Rgba,
}

/// Population size for a viewport: `min(max, floor(area / area_per_particle))`.
pub fn particle_count(viewport: Vec2, config: &ParticleFieldConfig) -> usize {
    let area = (viewport.x.max(0.0) * viewport.y.max(0.0)) as f64;
    let by_area = (area / config.area_per_particle as f64).floor() as usize;
    by_area.min(config.max_particles)
}

/// The background simulation.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    /// Positions before the last step. Empty until the first step.
    pre_step: Vec<Vec2>,
    bounds: Vec2,
    config: ParticleFieldConfig,
    background: Gradient,
}

impl ParticleField {
    /// Scatter a population sized for `viewport`.
    pub fn new(viewport: Vec2, config: ParticleFieldConfig, ctx: &mut SpawnContext) -> Self {
        let count = particle_count(viewport, &config);
        let [r_min, r_max] = config.radius_range;
        let [a_min, a_max] = config.alpha_range;

        let particles = (0..count)
            .map(|_| {
                let alpha = ctx.random_range(a_min..a_max);
                Particle {
                    position: ctx.random_in_rect(viewport),
                    velocity: ctx.random_velocity(config.initial_speed),
                    // Drawn independently: the first frame settles radius
                    // back onto base_radius.
                    radius: ctx.random_range(r_min..r_max),
                    base_radius: ctx.random_range(r_min..r_max),
                    color: config.color.with_alpha(alpha),
                }
            })
            .collect();

        log::debug!(
            "particle field: {} particles for {}x{} viewport",
            count,
            viewport.x,
            viewport.y
        );

        let background = Gradient::linear(config.background_top, config.background_bottom);
        Self {
            particles,
            pre_step: Vec::new(),
            bounds: viewport,
            config,
            background,
        }
    }

    /// Build a field from an explicit population (tests, replays).
    pub fn from_particles(particles: Vec<Particle>, viewport: Vec2, config: ParticleFieldConfig) -> Self {
        let background = Gradient::linear(config.background_top, config.background_bottom);
        Self {
            particles,
            pre_step: Vec::new(),
            bounds: viewport,
            config,
            background,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Track a new viewport size. The population is kept as is; particles
    /// outside the new bounds bounce back in on their next step.
    pub fn resize(&mut self, viewport: Vec2) {
        self.bounds = viewport;
    }

    /// Advance every particle by one frame against the pointer's viewport
    /// position.
    pub fn step(&mut self, pointer: &PointerTracker) {
        let target = pointer.viewport_position();
        self.pre_step.clear();
        self.pre_step.extend(self.particles.iter().map(|p| p.position));
        for particle in &mut self.particles {
            step_particle(particle, target, self.bounds, &self.config);
        }
    }

    /// Draw background, particles and connections.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.fill_vertical_gradient(&self.background);

        let cfg = &self.config;
        for (i, particle) in self.particles.iter().enumerate() {
            let glow = Gradient::new(vec![
                GradientStop::new(0.0, particle.color),
                GradientStop::new(0.5, particle.color.with_alpha(particle.color.a * 0.5)),
                GradientStop::new(1.0, Rgba::TRANSPARENT_WHITE),
            ]);
            canvas.fill_radial_disc(
                particle.position,
                particle.radius,
                particle.radius * cfg.glow_extent,
                &glow,
            );

            for (from, to, alpha) in self.connections_from(i) {
                canvas.stroke_line(from, to, cfg.connection_width, cfg.color.with_alpha(alpha));
            }
        }
    }

    /// Line alpha between two points, or `None` when they are too far
    /// apart to be connected.
    pub fn connection_alpha(&self, a: Vec2, b: Vec2) -> Option<f32> {
        let d = a.distance(b);
        let radius = self.config.connection_radius;
        (d < radius).then(|| (1.0 - d / radius) * self.config.connection_alpha)
    }

    /// Lines drawn from particle `i` to the particles after it, as
    /// `(from, to, alpha)`.
    pub fn connections_from(&self, i: usize) -> impl Iterator<Item = (Vec2, Vec2, f32)> + '_ {
        let from = self.particles[i].position;
        (i + 1..self.particles.len()).filter_map(move |j| {
            let to = self.pre_step.get(j).copied().unwrap_or(self.particles[j].position);
            self.connection_alpha(from, to).map(|alpha| (from, to, alpha))
        })
    }

    /// Number of lines drawn this frame.
    pub fn connection_count(&self) -> usize {
        (0..self.particles.len())
            .map(|i| self.connections_from(i).count())
            .sum()
    }
}

/// One frame for one particle: attraction, integration, edge bounce, damping.
fn step_particle(p: &mut Particle, target: Vec2, bounds: Vec2, cfg: &ParticleFieldConfig) {
    let to_pointer = target - p.position;
    let distance = to_pointer.length();

    if distance < cfg.attraction_radius {
        let force = 1.0 - distance / cfg.attraction_radius;
        p.velocity += to_pointer.normalize_or_zero() * force * cfg.attraction_strength;
        p.radius = p.base_radius + force * cfg.radius_boost;
    } else {
        p.radius = p.base_radius;
    }

    p.position += p.velocity;

    if p.position.x < 0.0 || p.position.x > bounds.x {
        p.velocity.x *= -cfg.edge_damping;
        p.position.x = p.position.x.clamp(0.0, bounds.x.max(0.0));
    }
    if p.position.y < 0.0 || p.position.y > bounds.y {
        p.velocity.y *= -cfg.edge_damping;
        p.position.y = p.position.y.clamp(0.0, bounds.y.max(0.0));
    }

    p.velocity *= cfg.velocity_damping;
}
