//! Colors and gradients used by the effects.
//!
//! Colors are straight (non-premultiplied) RGBA with every channel in
//! `0.0..=1.0`, the same model as CSS `rgba()`.

use serde::{Deserialize, Serialize};

/// A straight-alpha color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent white, the end stop of the particle glow.
    pub const TRANSPARENT_WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.0);

    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    /// Theme blue (`#3b82f6`), used for particles and their connections.
    pub const THEME_BLUE: Rgba = Rgba::from_rgb8(59, 130, 246);

    /// Pale sky (`#f0f9ff`), the top of the background gradient.
    pub const SKY_50: Rgba = Rgba::from_rgb8(240, 249, 255);

    /// Opaque black, the triangle glyph outline.
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Same RGB with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Scale RGB by `factor` (a CSS `brightness()` filter), keeping alpha.
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: (self.r * factor).clamp(0.0, 1.0),
            g: (self.g * factor).clamp(0.0, 1.0),
            b: (self.b * factor).clamp(0.0, 1.0),
            a: self.a,
        }
    }

    /// Linear interpolation between two colors, channel by channel.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to 8-bit channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }
}

/// A color stop at `offset` in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Piecewise-linear gradient over sorted stops.
///
/// Offsets before the first stop take the first color, offsets after the
/// last take the last color, like a canvas gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Build a gradient. Stops are sorted by offset.
    pub fn new(mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { stops }
    }

    /// Two-stop gradient from `start` at 0 to `end` at 1.
    pub fn linear(start: Rgba, end: Rgba) -> Self {
        Self::new(vec![GradientStop::new(0.0, start), GradientStop::new(1.0, end)])
    }

    /// Color at offset `t`. An empty gradient is transparent.
    pub fn sample(&self, t: f32) -> Rgba {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Rgba::TRANSPARENT_WHITE,
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb8() {
        let c = Rgba::from_rgb8(255, 0, 51);
        assert_eq!(c.to_rgba8(), [255, 0, 51, 255]);
    }

    #[test]
    fn test_scaled_keeps_alpha() {
        let c = Rgba::new(0.5, 0.5, 0.5, 0.3).scaled(0.5);
        assert!((c.r - 0.25).abs() < 1e-6);
        assert_eq!(c.a, 0.3);
    }

    #[test]
    fn test_gradient_sample() {
        let g = Gradient::new(vec![
            GradientStop::new(1.0, Rgba::new(0.0, 0.0, 1.0, 0.0)),
            GradientStop::new(0.0, Rgba::new(1.0, 0.0, 0.0, 1.0)),
            GradientStop::new(0.5, Rgba::new(0.0, 1.0, 0.0, 0.5)),
        ]);

        assert_eq!(g.sample(-1.0).r, 1.0);
        assert_eq!(g.sample(2.0).b, 1.0);

        let mid = g.sample(0.25);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
        assert!((mid.a - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_empty_gradient_is_transparent() {
        assert_eq!(Gradient::new(vec![]).sample(0.5).a, 0.0);
    }
}
