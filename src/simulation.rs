//! The stage: both effects, the shared pointer, and their lifecycle.
//!
//! A [`Stage`] is what a page mounts. It owns the background
//! [`ParticleField`], the hover-driven [`TriangleSwarm`], the
//! [`PointerTracker`] they both read, and the frame clock of the
//! background. Hosts feed it events in order and call
//! [`frame`](Stage::frame) once per display refresh.
//!
//! ```ignore
//! let mut stage = Stage::new().with_seed(7);
//! stage.mount(Vec2::new(1200.0, 800.0), Duration::ZERO);
//!
//! stage.pointer_moved(Vec2::new(600.0, 400.0), Duration::from_millis(5));
//! stage.frame(Duration::from_millis(16), Some(&mut canvas));
//!
//! stage.unmount();
//! ```
//!
//! Or hand it to the window host:
//!
//! ```ignore
//! Stage::new().with_config(config).run()?;
//! ```

use std::time::Duration;

use glam::Vec2;

use crate::canvas::Canvas;
use crate::config::EffectConfig;
use crate::error::HostError;
use crate::input::PointerTracker;
use crate::particle_field::ParticleField;
use crate::spawn::SpawnContext;
use crate::swarm::{Region, TriangleSwarm};
use crate::time::FrameClock;

/// What one call to [`Stage::frame`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// The particle field advanced one step.
    pub background_stepped: bool,
    /// The swarm recomputed its triangles.
    pub swarm_stepped: bool,
    /// Triangles removed by this frame's recompute.
    pub removed: usize,
    /// A canvas was available and was drawn.
    pub rendered: bool,
}

/// Both effects and the state they share.
pub struct Stage {
    config: EffectConfig,
    viewport: Vec2,
    scroll_offset: f32,
    mounted: bool,

    pointer: PointerTracker,
    field: Option<ParticleField>,
    field_clock: FrameClock,
    swarm: TriangleSwarm,
    ctx: SpawnContext,
}

impl Stage {
    /// Create an unmounted stage with the default configuration.
    pub fn new() -> Self {
        Self::from_config(EffectConfig::default())
    }

    fn from_config(config: EffectConfig) -> Self {
        let mut ctx = SpawnContext::from_seed_or_clock(config.seed);
        let swarm = TriangleSwarm::new(config.swarm.clone(), ctx.fork());
        Self {
            viewport: Vec2::new(config.window.width as f32, config.window.height as f32),
            pointer: PointerTracker::new(config.pointer.idle_debounce()),
            scroll_offset: 0.0,
            mounted: false,
            field: None,
            field_clock: FrameClock::new(),
            swarm,
            ctx,
            config,
        }
    }

    /// Replace the configuration. Only valid before mounting.
    ///
    /// A seed set earlier with [`with_seed`](Self::with_seed) survives
    /// unless `config` carries its own.
    pub fn with_config(self, mut config: EffectConfig) -> Self {
        config.seed = config.seed.or(self.config.seed);
        Self::from_config(config)
    }

    /// Fix the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        Self::from_config(self.config)
    }

    // ========== Lifecycle ==========

    /// Attach to a surface of `viewport` size. Builds the particle field,
    /// arms its clock, and starts the swarm's idle countdown.
    pub fn mount(&mut self, viewport: Vec2, now: Duration) {
        if self.mounted {
            self.unmount();
        }
        self.viewport = viewport;
        self.scroll_offset = 0.0;
        self.pointer.reset();

        self.field = Some(ParticleField::new(
            viewport,
            self.config.background.clone(),
            &mut self.ctx,
        ));
        self.field_clock.arm();
        self.swarm.start(now);
        self.mounted = true;

        log::debug!("stage mounted at {}x{}", viewport.x, viewport.y);
    }

    /// Detach: cancel every clock and timer and drop both populations.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.field_clock.cancel();
        self.field = None;
        self.swarm.stop();
        self.pointer.reset();
        self.mounted = false;

        log::debug!("stage unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // ========== Events ==========

    /// The pointer moved to `viewport_pos`.
    pub fn pointer_moved(&mut self, viewport_pos: Vec2, now: Duration) {
        if !self.mounted {
            return;
        }
        self.pointer.on_move(viewport_pos, now);

        let inside = self.hover_region().contains(self.pointer.position());
        match (inside, self.swarm.is_hovering()) {
            (true, false) => self.swarm.on_pointer_enter(),
            (false, true) => self.swarm.on_pointer_leave(),
            _ => {}
        }
        self.swarm.on_pointer_move(&self.pointer, now);
    }

    /// The pointer left the window.
    pub fn pointer_left(&mut self) {
        if self.mounted && self.swarm.is_hovering() {
            self.swarm.on_pointer_leave();
        }
    }

    /// Scroll the document to `scroll_y`, clamped to the page.
    pub fn scrolled(&mut self, scroll_y: f32) {
        let max = (self.config.window.page_height - self.viewport.y).max(0.0);
        self.scroll_offset = scroll_y.clamp(0.0, max);
        self.pointer.on_scroll(self.scroll_offset);
    }

    /// Scroll the document by `delta` pixels.
    pub fn scroll_by(&mut self, delta: f32) {
        self.scrolled(self.scroll_offset + delta);
    }

    /// The viewport changed size. The particle population is kept.
    pub fn resized(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        if let Some(field) = &mut self.field {
            field.resize(viewport);
        }
        self.scrolled(self.scroll_offset);
        log::debug!("stage resized to {}x{}", viewport.x, viewport.y);
    }

    // ========== Frames ==========

    /// Advance timers to `now`, step whatever clock is armed, then draw on
    /// `canvas` when one is available.
    pub fn frame(&mut self, now: Duration, canvas: Option<&mut dyn Canvas>) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.mounted {
            return report;
        }

        self.pointer.update(now);
        self.swarm.update_timers(&self.pointer, now);

        if self.field_clock.tick(now).is_some() {
            if let Some(field) = &mut self.field {
                field.step(&self.pointer);
                report.background_stepped = true;
            }
        }

        if self.swarm.tick(now).is_some() {
            report.removed = self.swarm.on_frame(&self.pointer);
            report.swarm_stepped = true;
        }

        match canvas {
            Some(canvas) => {
                if let Some(field) = &self.field {
                    field.render(canvas);
                }
                self.swarm.render(canvas, self.scroll_offset);
                report.rendered = true;
            }
            None => log::trace!("no drawing surface, skipping render"),
        }

        report
    }

    // ========== Queries ==========

    /// The swarm's hover region in document coordinates.
    pub fn hover_region(&self) -> Region {
        self.config
            .swarm
            .hover_region
            .unwrap_or_else(|| Region::hero(self.viewport))
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn swarm(&self) -> &TriangleSwarm {
        &self.swarm
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Open a window and run until it is closed. Blocks.
    pub fn run(self) -> Result<(), HostError> {
        crate::window::run(self)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
