//! # Pyramid
//!
//! Regular pyramid on the unit circle with its apex on +Y.

use crate::math::angle_point;
use config::constants::ANGLE_OFFSET;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates `sides` slanted triangles meeting at `(0, height, 0)`, plus a
/// flat base fan at `y = 0` when `base` is set.
pub fn create_pyramid(height: f64, sides: u32, base: bool) -> Vec<DVec3> {
    let apex = DVec3::new(0.0, height, 0.0);
    let mut vertices = Vec::new();

    for i in 0..sides {
        let (v1, v2) = rim_edge(i, sides);
        vertices.extend_from_slice(&[v2, apex, v1]);
    }
    if base {
        for i in 0..sides {
            let (v1, v2) = rim_edge(i, sides);
            vertices.extend_from_slice(&[v2, v1, DVec3::ZERO]);
        }
    }
    vertices
}

fn rim_edge(i: u32, sides: u32) -> (DVec3, DVec3) {
    let a1 = i as f64 / sides as f64 * TAU + ANGLE_OFFSET;
    let a2 = (i + 1) as f64 / sides as f64 * TAU + ANGLE_OFFSET;
    (angle_point(a1, 0.0), angle_point(a2, 0.0))
}
