//! # Cylinder
//!
//! Unit-radius cylinder centred on the origin along Y, with optional fan
//! caps. The instance radius is applied after subdivision by
//! [`build_mesh`](super::build_mesh).

use crate::math::angle_point;
use config::constants::ANGLE_OFFSET;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates the level-0 side wall and caps.
///
/// # Arguments
///
/// * `height` - Extent along Y, centred on the origin
/// * `sides` - Radial segments (callers clamp to at least 3)
/// * `rows` - Vertical bands of the side wall
/// * `caps` - Whether to add top and bottom fans
///
/// Produces `sides * (2 * rows + 2)` triangles with caps and
/// `sides * 2 * rows` without.
pub fn create_cylinder(height: f64, sides: u32, rows: u32, caps: bool) -> Vec<DVec3> {
    let mut vertices = Vec::new();
    let (lo, hi) = (-height / 2.0, height / 2.0);

    for i in 0..sides {
        let a1 = i as f64 / sides as f64 * TAU + ANGLE_OFFSET;
        let a2 = (i + 1) as f64 / sides as f64 * TAU + ANGLE_OFFSET;

        if caps {
            vertices.extend_from_slice(&[
                angle_point(a2, lo),
                angle_point(a1, lo),
                DVec3::new(0.0, lo, 0.0),
                angle_point(a2, hi),
                DVec3::new(0.0, hi, 0.0),
                angle_point(a1, hi),
            ]);
        }

        for r in 0..rows {
            let band_lo = lo + r as f64 / rows as f64 * height;
            let band_hi = lo + (r + 1) as f64 / rows as f64 * height;
            let v1 = angle_point(a1, band_lo);
            let v2 = angle_point(a2, band_lo);
            let v3 = angle_point(a1, band_hi);
            let v4 = angle_point(a2, band_hi);
            vertices.extend_from_slice(&[v3, v2, v4, v1, v2, v3]);
        }
    }
    vertices
}
