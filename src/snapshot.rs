//! Headless rendering of a scripted session.
//!
//! A [`Script`] mounts a [`Stage`] on a [`PixelCanvas`], sweeps the pointer
//! around an ellipse through the hero section for most of the run, then
//! leaves it resting so the idle darkening shows. Only the final frame is
//! drawn.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;

use crate::config::EffectConfig;
use crate::error::SnapshotError;
use crate::raster::PixelCanvas;
use crate::simulation::Stage;

/// Scripted run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub width: u32,
    pub height: u32,
    /// Frames to simulate, the last one is rendered.
    pub frames: u32,
    /// Time between frames.
    pub frame_interval: Duration,
    /// Share of the frames during which the pointer moves.
    pub moving_share: f32,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            frames: 120,
            frame_interval: Duration::from_millis(16),
            moving_share: 0.75,
        }
    }
}

impl Script {
    /// Size the canvas like the configured window.
    pub fn for_config(config: &EffectConfig) -> Self {
        Self {
            width: config.window.width,
            height: config.window.height,
            ..Default::default()
        }
    }

    /// Pointer position for `frame` while moving: one lap of an ellipse
    /// around the viewport center.
    pub fn pointer_at(&self, frame: u32) -> Vec2 {
        let viewport = Vec2::new(self.width as f32, self.height as f32);
        let moving_frames = self.moving_frames().max(1) as f32;
        let angle = frame as f32 / moving_frames * std::f32::consts::TAU;
        viewport * 0.5 + Vec2::new(angle.cos(), angle.sin()) * viewport * Vec2::new(0.25, 0.2)
    }

    fn moving_frames(&self) -> u32 {
        (self.frames as f32 * self.moving_share.clamp(0.0, 1.0)) as u32
    }

    /// Run the script and return the final frame.
    pub fn render(&self, config: EffectConfig) -> Result<PixelCanvas, SnapshotError> {
        if self.width == 0 || self.height == 0 {
            return Err(SnapshotError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }

        let mut stage = Stage::new().with_config(config);
        let mut canvas = PixelCanvas::new(self.width, self.height);
        stage.mount(Vec2::new(self.width as f32, self.height as f32), Duration::ZERO);

        let moving_frames = self.moving_frames();
        let last = self.frames.saturating_sub(1);
        for frame in 0..self.frames {
            let now = self.frame_interval * (frame + 1);
            if frame < moving_frames {
                stage.pointer_moved(self.pointer_at(frame), now);
            }
            if frame == last {
                stage.frame(now, Some(&mut canvas));
            } else {
                stage.frame(now, None);
            }
        }

        log::info!(
            "rendered {} frames: {} particles, {} triangles",
            self.frames,
            stage.field().map_or(0, |f| f.len()),
            stage.swarm().len()
        );
        stage.unmount();

        Ok(canvas)
    }

    /// Run the script and write the final frame as PNG.
    pub fn write_png<P: AsRef<Path>>(&self, config: EffectConfig, path: P) -> Result<(), SnapshotError> {
        let canvas = self.render(config)?;
        canvas.save_png(path.as_ref())?;
        log::info!("wrote {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Script {
        Script {
            width: 320,
            height: 200,
            frames: 40,
            ..Default::default()
        }
    }

    fn seeded() -> EffectConfig {
        EffectConfig {
            seed: Some(9),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_canvas_is_rejected() {
        let script = Script {
            width: 0,
            ..small()
        };
        let err = script.render(seeded()).unwrap_err();
        assert!(matches!(err, SnapshotError::EmptyCanvas { width: 0, height: 200 }));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = small().render(seeded()).unwrap();
        let b = small().render(seeded()).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
        assert!(a.as_raw().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_pointer_path_stays_in_viewport() {
        let script = small();
        for frame in 0..script.frames {
            let p = script.pointer_at(frame);
            assert!(p.x > 0.0 && p.x < 320.0 && p.y > 0.0 && p.y < 200.0);
        }
    }

    #[test]
    fn test_write_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        small().write_png(seeded(), &path).unwrap();

        let image = image::open(&path).unwrap();
        assert_eq!((image.width(), image.height()), (320, 200));
    }
}
