//! # Triangle
//!
//! Single horizontal triangle on the unit circle.

use crate::math::angle_point;
use glam::DVec3;
use std::f64::consts::PI;

/// Level-0 triangle with corners at 0°, 120° and 240° around +Y.
pub fn create_triangle() -> Vec<DVec3> {
    (0..3)
        .map(|i| angle_point(i as f64 * 2.0 * PI / 3.0, 0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangle_is_equilateral() {
        let v = create_triangle();
        assert_eq!(v.len(), 3);
        let side = v[0].distance(v[1]);
        assert_relative_eq!(side, 3f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(v[1].distance(v[2]), side, epsilon = 1e-12);
        assert!(v.iter().all(|p| p.y == 0.0));
    }
}
