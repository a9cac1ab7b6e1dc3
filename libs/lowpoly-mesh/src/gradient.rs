//! # Gradients
//!
//! A gradient maps a scalar to an RGB colour. [`ColorStops`] is the stock
//! implementation: sorted stops blended linearly and clamped at both ends.

use config::constants::DEFAULT_COLOR;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// RGB colour with components in [0, 1].
pub type Color = Vec3;

/// Maps a scalar to a colour.
pub trait Gradient {
    /// Colour at `t`.
    fn get(&self, t: f64) -> Color;
}

impl<T: Gradient + ?Sized> Gradient for &T {
    fn get(&self, t: f64) -> Color {
        (**self).get(t)
    }
}

impl<T: Gradient + ?Sized> Gradient for Box<T> {
    fn get(&self, t: f64) -> Color {
        (**self).get(t)
    }
}

/// Converts `0xRRGGBB` into a colour.
///
/// # Example
///
/// ```rust
/// use lowpoly_mesh::color_from_hex;
///
/// let c = color_from_hex(0xff0000);
/// assert_eq!(c.x, 1.0);
/// assert_eq!(c.y, 0.0);
/// ```
pub fn color_from_hex(hex: u32) -> Color {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}

/// A colour pinned at a position of the gradient domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position in the gradient domain
    pub position: f64,
    /// Colour at that position
    pub color: Color,
}

impl ColorStop {
    /// Creates a stop from a `0xRRGGBB` colour.
    pub fn hex(position: f64, hex: u32) -> Self {
        Self {
            position,
            color: color_from_hex(hex),
        }
    }
}

/// Piecewise linear gradient.
///
/// Values before the first stop take its colour, values after the last stop
/// take the last colour. An empty gradient returns the default colour.
///
/// # Example
///
/// ```rust
/// use lowpoly_mesh::{ColorStop, ColorStops, Gradient};
///
/// let g = ColorStops::new(vec![ColorStop::hex(0.0, 0x000000), ColorStop::hex(1.0, 0xffffff)]);
/// assert!((g.get(0.5).x - 0.5).abs() < 1e-6);
/// assert_eq!(g.get(2.0).x, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ColorStop>", into = "Vec<ColorStop>")]
pub struct ColorStops {
    stops: Vec<ColorStop>,
}

impl From<Vec<ColorStop>> for ColorStops {
    fn from(stops: Vec<ColorStop>) -> Self {
        Self::new(stops)
    }
}

impl From<ColorStops> for Vec<ColorStop> {
    fn from(gradient: ColorStops) -> Self {
        gradient.stops
    }
}

impl ColorStops {
    /// Creates a gradient, sorting the stops by position.
    pub fn new(mut stops: Vec<ColorStop>) -> Self {
        stops.retain(|s| s.position.is_finite());
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops }
    }

    /// Spaces `colors` evenly over [0, 1].
    pub fn between(colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop {
                position: i as f64 / last,
                color,
            })
            .collect();
        Self::new(stops)
    }

    /// Returns the stops in position order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }
}

impl Gradient for ColorStops {
    fn get(&self, t: f64) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Vec3::from(DEFAULT_COLOR),
        };
        if t.is_nan() || t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            if t <= hi.position {
                let span = hi.position - lo.position;
                if span <= 0.0 {
                    return hi.color;
                }
                let f = ((t - lo.position) / span) as f32;
                return lo.color.lerp(hi.color, f);
            }
        }
        last.color
    }
}

/// Gradient built from a closure.
pub struct FnGradient<F>(pub F);

impl<F: Fn(f64) -> Color> Gradient for FnGradient<F> {
    fn get(&self, t: f64) -> Color {
        (self.0)(t)
    }
}
