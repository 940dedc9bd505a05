//! Software rasterizer implementing [`Canvas`] on an RGBA image.
//!
//! Shapes are anti-aliased with a one-pixel coverage ramp and composited
//! with straight-alpha source-over blending, which matches what a browser
//! 2D context does closely enough for soft decorative effects.
//!
//! The same buffer is uploaded to the GPU by the window host and written
//! to PNG by the snapshot tool.

use std::path::Path;

use glam::Vec2;
use image::{Rgba as Pixel, RgbaImage};

use crate::canvas::{Canvas, TriangleGlyph};
use crate::visuals::{Gradient, Rgba};

/// How far the glyph glow reaches past the outline, in pixels.
const GLOW_WIDTH: f32 = 2.0;

/// CPU-side drawing surface.
#[derive(Debug)]
pub struct PixelCanvas {
    image: RgbaImage,
}

impl PixelCanvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Resize, discarding the current contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.image.dimensions() != (width, height) {
            self.image = RgbaImage::new(width, height);
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Read one pixel. Out-of-bounds reads return `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width() && y < self.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    /// Write the canvas as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.image
            .save_with_format(path.as_ref(), image::ImageFormat::Png)
    }

    /// Clip a float bounding box to pixel indices. `None` when empty.
    fn clip(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        if !(min.is_finite() && max.is_finite()) {
            return None;
        }
        let w = self.width() as f32;
        let h = self.height() as f32;
        let x0 = min.x.floor().max(0.0);
        let y0 = min.y.floor().max(0.0);
        let x1 = max.x.ceil().min(w);
        let y1 = max.y.ceil().min(h);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Blend `color` along the closed outline through `points`. Coverage is
    /// full within `half` of the outline and ramps to zero over `feather`
    /// pixels. Every pixel is blended once, so joins do not double up.
    fn stroke_closed(&mut self, points: &[Vec2], half: f32, feather: f32, color: Rgba) {
        if points.is_empty() || half < 0.0 || feather <= 0.0 || color.a <= 0.0 {
            return;
        }
        let pad = Vec2::splat(half + feather + 1.0);
        let min = points.iter().fold(Vec2::INFINITY, |m, p| m.min(*p));
        let max = points.iter().fold(Vec2::NEG_INFINITY, |m, p| m.max(*p));
        let Some((x0, y0, x1, y1)) = self.clip(min - pad, max + pad) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let d = (0..points.len())
                    .map(|i| segment_distance(p, points[i], points[(i + 1) % points.len()]))
                    .fold(f32::INFINITY, f32::min);
                let coverage = ((half + feather * 0.5 - d) / feather).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }

    /// Source-over composite of `color` at `coverage` onto one pixel.
    fn blend(&mut self, x: u32, y: u32, color: Rgba, coverage: f32) {
        let src_a = (color.a * coverage).clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }

        let px = self.image.get_pixel_mut(x, y);
        let dst = [
            px[0] as f32 / 255.0,
            px[1] as f32 / 255.0,
            px[2] as f32 / 255.0,
            px[3] as f32 / 255.0,
        ];
        let out_a = src_a + dst[3] * (1.0 - src_a);
        if out_a <= 0.0 {
            *px = Pixel([0, 0, 0, 0]);
            return;
        }

        let mix = |s: f32, d: f32| (s * src_a + d * dst[3] * (1.0 - src_a)) / out_a;
        *px = Pixel(
            Rgba::new(
                mix(color.r, dst[0]),
                mix(color.g, dst[1]),
                mix(color.b, dst[2]),
                out_a,
            )
            .to_rgba8(),
        );
    }
}

/// Distance from `p` to the segment `a..b`.
fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let seg = b - a;
    let len_sq = seg.length_squared();
    let t = if len_sq > 0.0 {
        ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    p.distance(a + seg * t)
}

impl Canvas for PixelCanvas {
    fn fill_vertical_gradient(&mut self, gradient: &Gradient) {
        let height = self.height();
        for y in 0..height {
            let t = if height > 1 { y as f32 / (height - 1) as f32 } else { 0.0 };
            let px = Pixel(gradient.sample(t).to_rgba8());
            for x in 0..self.width() {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    fn fill_radial_disc(&mut self, center: Vec2, radius: f32, gradient_radius: f32, gradient: &Gradient) {
        if radius <= 0.0 || gradient_radius <= 0.0 {
            return;
        }
        let pad = Vec2::splat(radius + 1.0);
        let Some((x0, y0, x1, y1)) = self.clip(center - pad, center + pad) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let d = p.distance(center);
                let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(x, y, gradient.sample(d / gradient_radius), coverage);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        if width <= 0.0 || color.a <= 0.0 || !(from.is_finite() && to.is_finite()) {
            return;
        }
        let half = width * 0.5;
        let pad = Vec2::splat(half + 1.0);
        let Some((x0, y0, x1, y1)) = self.clip(from.min(to) - pad, from.max(to) + pad) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let d = segment_distance(p, from, to);
                let coverage = (half + 0.5 - d).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }

    fn draw_triangle(&mut self, glyph: &TriangleGlyph) {
        if !glyph.vertices.iter().all(|v| v.is_finite()) {
            return;
        }
        let half = glyph.stroke_width * 0.5;
        self.stroke_closed(&glyph.vertices, half + GLOW_WIDTH * 0.5, GLOW_WIDTH, glyph.glow);
        self.stroke_closed(&glyph.vertices, half, 1.0, glyph.stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::GradientStop;

    fn white(width: u32, height: u32) -> PixelCanvas {
        let mut canvas = PixelCanvas::new(width, height);
        canvas.fill_vertical_gradient(&Gradient::linear(Rgba::WHITE, Rgba::WHITE));
        canvas
    }

    #[test]
    fn test_pixel_bounds() {
        let canvas = white(4, 3);
        assert_eq!(canvas.pixel(3, 2), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(4, 0), None);
        assert!(format!("{:?}", canvas).contains("PixelCanvas"));
    }

    #[test]
    fn test_vertical_gradient_endpoints() {
        let mut canvas = PixelCanvas::new(2, 11);
        canvas.fill_vertical_gradient(&Gradient::linear(
            Rgba::new(0.0, 0.0, 0.0, 1.0),
            Rgba::WHITE,
        ));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(1, 10), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_disc_blends_over_background() {
        let mut canvas = white(20, 20);
        let gradient = Gradient::new(vec![
            GradientStop::new(0.0, Rgba::new(0.0, 0.0, 1.0, 1.0)),
            GradientStop::new(1.0, Rgba::new(0.0, 0.0, 1.0, 1.0)),
        ]);
        canvas.fill_radial_disc(Vec2::new(10.0, 10.0), 4.0, 4.0, &gradient);

        assert_eq!(canvas.pixel(10, 10), Some([0, 0, 255, 255]));
        // Outside the disc stays white
        assert_eq!(canvas.pixel(1, 1), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_half_transparent_line() {
        let mut canvas = white(10, 10);
        canvas.stroke_line(
            Vec2::new(0.0, 5.5),
            Vec2::new(10.0, 5.5),
            2.0,
            Rgba::new(0.0, 0.0, 0.0, 0.5),
        );
        let [r, _, _, a] = canvas.pixel(5, 5).unwrap();
        assert_eq!(a, 255);
        assert!((r as i32 - 128).abs() <= 1);
    }

    fn outline(vertices: [Vec2; 3], glow: Rgba) -> TriangleGlyph {
        TriangleGlyph {
            vertices,
            stroke_width: 2.0,
            stroke: Rgba::new(1.0, 0.0, 0.0, 1.0),
            glow,
        }
    }

    #[test]
    fn test_triangle_is_hollow_either_winding() {
        for vertices in [
            [Vec2::new(2.0, 2.0), Vec2::new(18.0, 2.0), Vec2::new(10.0, 18.0)],
            [Vec2::new(2.0, 2.0), Vec2::new(10.0, 18.0), Vec2::new(18.0, 2.0)],
        ] {
            let mut canvas = PixelCanvas::new(20, 20);
            canvas.draw_triangle(&outline(vertices, Rgba::TRANSPARENT_WHITE));

            // On the top edge
            assert_eq!(canvas.pixel(10, 2), Some([255, 0, 0, 255]));
            // Interior and exterior stay untouched
            assert_eq!(canvas.pixel(10, 8), Some([0, 0, 0, 0]));
            assert_eq!(canvas.pixel(1, 18), Some([0, 0, 0, 0]));
        }
    }

    #[test]
    fn test_triangle_glow_reaches_past_outline() {
        let vertices = [Vec2::new(2.0, 2.0), Vec2::new(18.0, 2.0), Vec2::new(10.0, 18.0)];

        let mut plain = PixelCanvas::new(20, 20);
        plain.draw_triangle(&outline(vertices, Rgba::TRANSPARENT_WHITE));
        assert_eq!(plain.pixel(10, 0), Some([0, 0, 0, 0]));

        let mut glowing = PixelCanvas::new(20, 20);
        glowing.draw_triangle(&outline(vertices, Rgba::WHITE));
        let [r, g, b, a] = glowing.pixel(10, 0).unwrap();
        assert_eq!([r, g, b], [255, 255, 255]);
        assert!(a > 0);
        assert_eq!(glowing.pixel(10, 2), Some([255, 0, 0, 255]));
        assert_eq!(glowing.pixel(10, 8), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_offscreen_shapes_are_ignored() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.stroke_line(Vec2::splat(-50.0), Vec2::splat(-40.0), 1.0, Rgba::WHITE);
        canvas.stroke_line(Vec2::splat(f32::NAN), Vec2::ZERO, 1.0, Rgba::WHITE);
        assert!(canvas.as_raw().iter().all(|&b| b == 0));
    }
}
