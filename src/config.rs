//! Configuration for the effects and their host.
//!
//! Every section falls back to the tuned defaults field by field, so a
//! config file only needs the values it changes. `{}` is a complete config.
//!
//! ```json
//! {
//!   "window": { "width": 1440, "height": 900 },
//!   "swarm": { "max_triangles": 60, "darken_delay_ms": 1500 },
//!   "seed": 7
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::swarm::Region;
use crate::visuals::Rgba;

/// Complete configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EffectConfig {
    pub window: WindowConfig,
    pub background: ParticleFieldConfig,
    pub swarm: SwarmConfig,
    pub pointer: PointerConfig,
    /// RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
}

/// Native window and simulated page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Total document height in pixels; the wheel scrolls within it.
    pub page_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "backdrop".to_string(),
            width: 1280,
            height: 800,
            page_height: 3200.0,
        }
    }
}

/// Background particle field tuning.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleFieldConfig {
    /// Population cap.
    pub max_particles: usize,
    /// Viewport area per particle; population is `area / this`, capped.
    pub area_per_particle: f32,
    /// Distance under which the pointer pulls particles.
    pub attraction_radius: f32,
    /// Impulse scale at zero distance. Negative values repel.
    pub attraction_strength: f32,
    /// Radius growth at zero distance.
    pub radius_boost: f32,
    /// Base radius range `[min, max)`.
    pub radius_range: [f32; 2],
    /// Per-particle alpha range `[min, max)`.
    pub alpha_range: [f32; 2],
    /// Initial velocity components are drawn from `-max..max`.
    pub initial_speed: f32,
    /// Velocity factor kept when bouncing off an edge (sign is flipped).
    pub edge_damping: f32,
    /// Velocity factor applied every frame.
    pub velocity_damping: f32,
    /// Particles closer than this are connected by a line.
    pub connection_radius: f32,
    /// Line alpha at zero distance.
    pub connection_alpha: f32,
    pub connection_width: f32,
    /// Glow gradient extent as a multiple of the particle radius.
    pub glow_extent: f32,
    pub color: Rgba,
    pub background_top: Rgba,
    pub background_bottom: Rgba,
}

impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 80,
            area_per_particle: 15_000.0,
            attraction_radius: 200.0,
            attraction_strength: 0.02,
            radius_boost: 2.0,
            radius_range: [1.5, 4.0],
            alpha_range: [0.2, 0.5],
            initial_speed: 0.4,
            edge_damping: 0.8,
            velocity_damping: 0.99,
            connection_radius: 180.0,
            connection_alpha: 0.25,
            connection_width: 0.8,
            glow_extent: 2.5,
            color: Rgba::THEME_BLUE,
            background_top: Rgba::SKY_50,
            background_bottom: Rgba::WHITE,
        }
    }
}

/// Triangle swarm tuning.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SwarmConfig {
    /// Live population cap.
    pub max_triangles: usize,
    /// Spawn attempts per pointer move.
    pub batch_size: usize,
    /// Candidate positions tried per spawn slot.
    pub spawn_attempts: usize,
    /// Minimum distance between triangles at spawn.
    pub min_separation: f32,
    /// Spawn distance from the pointer `[min, max)`.
    pub spawn_distance: [f32; 2],
    /// Glyph edge length.
    pub size: f32,
    /// Rotation direction; only the sign is used.
    pub spin: f32,
    /// Fully opaque up to this distance.
    pub fade_start: f32,
    /// Fully faded at this distance.
    pub fade_end: f32,
    /// Power applied to the fade progress. Below 1 fades early.
    pub fade_exponent: f32,
    /// Overall opacity ceiling.
    pub opacity_ceiling: f32,
    /// Brightness reaches zero at this distance.
    pub brightness_radius: f32,
    /// Pointer motion rotates triangles within this distance.
    pub rotation_radius: f32,
    /// Rotation speed multiplier at the edge of the rotation radius.
    pub min_speed_multiplier: f32,
    /// Rotation speed multiplier at zero distance.
    pub max_speed_multiplier: f32,
    /// Pointer speed is divided by this before capping.
    pub velocity_divisor: f32,
    /// Cap on the scaled pointer speed.
    pub max_velocity_factor: f32,
    /// Per-axis weights of the rotation change.
    pub axis_weights: Vec3,
    /// Darken progress gained per frame while idle.
    pub darken_step: f32,
    /// Darken progress lost per frame while moving.
    pub undarken_step: f32,
    /// Idle time before darkening starts.
    pub darken_delay_ms: u64,
    /// Perspective distance for the 3D glyph rotation.
    pub perspective: f32,
    /// Outline color at full brightness.
    pub color: Rgba,
    /// Hover region in document coordinates. Defaults to the hero section:
    /// full width, one viewport tall, at the top of the page.
    pub hover_region: Option<Region>,
}

impl SwarmConfig {
    pub fn darken_delay(&self) -> Duration {
        Duration::from_millis(self.darken_delay_ms)
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            max_triangles: 100,
            batch_size: 8,
            spawn_attempts: 10,
            min_separation: 25.0,
            spawn_distance: [30.0, 200.0],
            size: 30.0,
            spin: 8.0,
            fade_start: 100.0,
            fade_end: 180.0,
            fade_exponent: 0.7,
            opacity_ceiling: 0.8,
            brightness_radius: 160.0,
            rotation_radius: 160.0,
            min_speed_multiplier: 0.1,
            max_speed_multiplier: 3.0,
            velocity_divisor: 2.5,
            max_velocity_factor: 15.0,
            axis_weights: Vec3::new(1.0, 0.7, 1.2),
            darken_step: 0.02,
            undarken_step: 0.05,
            darken_delay_ms: 1_000,
            perspective: 2_000.0,
            color: Rgba::BLACK,
            hover_region: None,
        }
    }
}

/// Pointer tracking.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PointerConfig {
    /// Time without moves after which the pointer counts as idle.
    pub idle_debounce_ms: u64,
}

impl PointerConfig {
    pub fn idle_debounce(&self) -> Duration {
        Duration::from_millis(self.idle_debounce_ms)
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            idle_debounce_ms: 100,
        }
    }
}

impl EffectConfig {
    /// Load and validate a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulations cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bg = &self.background;
        let sw = &self.swarm;

        positive("background.area_per_particle", bg.area_per_particle)?;
        positive("background.attraction_radius", bg.attraction_radius)?;
        positive("background.connection_radius", bg.connection_radius)?;
        positive("background.glow_extent", bg.glow_extent)?;
        ordered("background.radius_range", bg.radius_range)?;
        ordered("background.alpha_range", bg.alpha_range)?;
        if bg.radius_range[0] <= 0.0 {
            return invalid("background.radius_range must start above zero");
        }

        if sw.batch_size == 0 || sw.spawn_attempts == 0 {
            return invalid("swarm.batch_size and swarm.spawn_attempts must be at least 1");
        }
        ordered("swarm.spawn_distance", sw.spawn_distance)?;
        positive("swarm.fade_exponent", sw.fade_exponent)?;
        positive("swarm.brightness_radius", sw.brightness_radius)?;
        positive("swarm.rotation_radius", sw.rotation_radius)?;
        positive("swarm.velocity_divisor", sw.velocity_divisor)?;
        positive("swarm.darken_step", sw.darken_step)?;
        positive("swarm.undarken_step", sw.undarken_step)?;
        positive("swarm.perspective", sw.perspective)?;
        if sw.fade_end <= sw.fade_start {
            return invalid("swarm.fade_end must be greater than swarm.fade_start");
        }
        if sw.spin == 0.0 {
            return invalid("swarm.spin must be non-zero");
        }

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero");
        }

        Ok(())
    }
}

fn invalid(msg: &str) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(msg.to_string()))
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
    }
}

fn ordered(name: &str, range: [f32; 2]) -> Result<(), ConfigError> {
    if range[0] <= range[1] {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} is inverted: [{}, {}]",
            range[0], range[1]
        )))
    }
}
