//! The drawing surface the effects render onto.
//!
//! [`Canvas`] is the small set of 2D operations the particle field and the
//! triangle swarm need. [`PixelCanvas`](crate::raster::PixelCanvas) is the
//! software implementation; any other backend only has to provide these
//! primitives.

use glam::Vec2;

use crate::visuals::{Gradient, Rgba};

/// A hollow triangle glyph projected onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleGlyph {
    /// Projected outline vertices in canvas pixels.
    pub vertices: [Vec2; 3],
    /// Outline width in pixels.
    pub stroke_width: f32,
    /// Outline color, alpha included.
    pub stroke: Rgba,
    /// Soft glow around the outline. Skipped when fully transparent.
    pub glow: Rgba,
}

/// A 2D surface, in pixels, with the origin at the top-left corner.
pub trait Canvas {
    /// Paint the whole surface with a top-to-bottom gradient.
    fn fill_vertical_gradient(&mut self, gradient: &Gradient);

    /// Fill a disc of `radius` whose color follows `gradient` outward from
    /// the center, reaching offset 1 at `gradient_radius`.
    fn fill_radial_disc(&mut self, center: Vec2, radius: f32, gradient_radius: f32, gradient: &Gradient);

    /// Stroke a straight segment `width` pixels wide.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Stroke a triangle glyph's outline over its glow. The interior is
    /// left untouched.
    fn draw_triangle(&mut self, glyph: &TriangleGlyph);
}
