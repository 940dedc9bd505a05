//! # backdrop - pointer-reactive background effects
//!
//! Two decorative simulations for a landing page, driven by the pointer:
//!
//! - a **particle field**: drifting discs over a soft gradient, pulled
//!   toward the pointer and joined by fading lines when close;
//! - a **triangle swarm**: while the pointer hovers the hero section, small
//!   triangles appear around it, spin with its speed, fade with distance,
//!   and darken away once it rests.
//!
//! Everything runs on the CPU against a [`Canvas`]. The bundled
//! [`PixelCanvas`] rasterizes into an RGBA image that the window host
//! presents through wgpu, or that can be written to PNG.
//!
//! ## Quick Start
//!
//! ```ignore
//! use backdrop::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EffectConfig::load("backdrop.json")?;
//!     Stage::new().with_config(config).run()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Driving a stage by hand
//!
//! Time is always passed in as a [`Duration`](std::time::Duration) since
//! mount, so a stage can be stepped deterministically:
//!
//! ```ignore
//! let mut stage = Stage::new().with_seed(7);
//! let mut canvas = PixelCanvas::new(1200, 800);
//!
//! stage.mount(Vec2::new(1200.0, 800.0), Duration::ZERO);
//! stage.pointer_moved(Vec2::new(600.0, 300.0), Duration::from_millis(4));
//! stage.frame(Duration::from_millis(16), Some(&mut canvas));
//! canvas.save_png("frame.png")?;
//! ```
//!
//! ## Coordinates
//!
//! The particle field lives in the viewport, like a fixed background. The
//! swarm lives in the document: the pointer's position plus the vertical
//! scroll offset. It is drawn shifted back by the scroll offset.

pub mod canvas;
pub mod config;
pub mod error;
mod gpu;
pub mod input;
pub mod particle_field;
pub mod raster;
pub mod shader;
mod simulation;
pub mod snapshot;
pub mod spawn;
pub mod swarm;
pub mod time;
pub mod timer;
pub mod visuals;
mod window;

pub use canvas::{Canvas, TriangleGlyph};
pub use config::{EffectConfig, ParticleFieldConfig, PointerConfig, SwarmConfig, WindowConfig};
pub use error::{ConfigError, GpuError, HostError, SnapshotError};
pub use glam::{Vec2, Vec3};
pub use input::PointerTracker;
pub use particle_field::{Particle, ParticleField};
pub use raster::PixelCanvas;
pub use simulation::{FrameReport, Stage};
pub use spawn::SpawnContext;
pub use swarm::{Phase, Region, Triangle, TriangleSwarm};
pub use time::{Frame, FrameClock};
pub use timer::Timer;
pub use visuals::{Gradient, GradientStop, Rgba};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use backdrop::prelude::*;
/// ```
///
/// This imports:
/// - [`Stage`] - both effects and their lifecycle
/// - [`EffectConfig`] - configuration, loadable from JSON
/// - [`Canvas`] and [`PixelCanvas`] - drawing surfaces
/// - [`Vec2`], [`Vec3`] - glam vector types
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::config::EffectConfig;
    pub use crate::error::{ConfigError, HostError, SnapshotError};
    pub use crate::raster::PixelCanvas;
    pub use crate::simulation::{FrameReport, Stage};
    pub use crate::swarm::Region;
    pub use crate::visuals::Rgba;
    pub use crate::{Vec2, Vec3};
}
