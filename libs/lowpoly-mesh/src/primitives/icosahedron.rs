//! # Icosahedron
//!
//! Golden-ratio icosahedron: 12 points, 20 faces. Base of the sphere.

use crate::math::{face_duplicate, points_from_flat};
use glam::DVec3;

/// Golden ratio.
const T: f64 = 1.618_033_988_749_895;

#[rustfmt::skip]
const POINTS: [f64; 36] = [
    -1.0,  T,  0.0,   1.0,  T,  0.0,  -1.0, -T,  0.0,   1.0, -T,  0.0,
     0.0, -1.0,  T,   0.0,  1.0,  T,   0.0, -1.0, -T,   0.0,  1.0, -T,
     T,  0.0, -1.0,   T,  0.0,  1.0,  -T,  0.0, -1.0,  -T,  0.0,  1.0,
];

#[rustfmt::skip]
const FACES: [usize; 60] = [
    5, 0, 11,   0, 5, 1,    0, 1, 7,    0, 7, 10,   0, 10, 11,
    1, 5, 9,    5, 11, 4,   11, 10, 2,  10, 7, 6,   7, 1, 8,
    3, 9, 4,    3, 4, 2,    3, 2, 6,    3, 6, 8,    3, 8, 9,
    4, 9, 5,    2, 4, 11,   6, 2, 10,   8, 6, 7,    9, 8, 1,
];

/// Level-0 icosahedron as face-duplicated vertices (60 entries).
///
/// Points are not normalized; every point has length `sqrt(1 + T²)`.
pub fn create_icosahedron() -> Vec<DVec3> {
    face_duplicate(&points_from_flat(&POINTS), &FACES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_twenty_faces() {
        assert_eq!(create_icosahedron().len(), 60);
    }

    #[test]
    fn test_points_equidistant() {
        let expected = (1.0 + T * T).sqrt();
        for v in create_icosahedron() {
            assert_relative_eq!(v.length(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_edges_uniform() {
        // every edge of a regular icosahedron with this construction is 2
        for tri in create_icosahedron().chunks_exact(3) {
            assert_relative_eq!(tri[0].distance(tri[1]), 2.0, epsilon = 1e-12);
            assert_relative_eq!(tri[1].distance(tri[2]), 2.0, epsilon = 1e-12);
            assert_relative_eq!(tri[2].distance(tri[0]), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_golden_ratio() {
        assert_relative_eq!(T, (1.0 + 5f64.sqrt()) / 2.0, epsilon = 1e-15);
    }
}
