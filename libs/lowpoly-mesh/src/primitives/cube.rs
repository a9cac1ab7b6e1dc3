//! # Cube
//!
//! Fixed 12-triangle box spanning [-1, 1] on every axis.

use crate::math::points_from_flat;
use glam::DVec3;

#[rustfmt::skip]
const BOX: [f64; 108] = [
    -1.0, -1.0, -1.0,   1.0, -1.0, -1.0,   1.0, -1.0,  1.0,
    -1.0, -1.0, -1.0,   1.0, -1.0,  1.0,  -1.0, -1.0,  1.0,
    -1.0,  1.0, -1.0,   1.0,  1.0,  1.0,   1.0,  1.0, -1.0,
     1.0,  1.0,  1.0,  -1.0,  1.0, -1.0,  -1.0,  1.0,  1.0,
     1.0,  1.0,  1.0,   1.0, -1.0, -1.0,   1.0,  1.0, -1.0,
     1.0, -1.0, -1.0,   1.0,  1.0,  1.0,   1.0, -1.0,  1.0,
    -1.0, -1.0, -1.0,  -1.0,  1.0,  1.0,  -1.0,  1.0, -1.0,
    -1.0,  1.0,  1.0,  -1.0, -1.0, -1.0,  -1.0, -1.0,  1.0,
    -1.0, -1.0,  1.0,   1.0,  1.0,  1.0,  -1.0,  1.0,  1.0,
     1.0,  1.0,  1.0,  -1.0, -1.0,  1.0,   1.0, -1.0,  1.0,
    -1.0,  1.0, -1.0,   1.0,  1.0, -1.0,  -1.0, -1.0, -1.0,
    -1.0, -1.0, -1.0,   1.0,  1.0, -1.0,   1.0, -1.0, -1.0,
];

/// Level-0 box as face-duplicated vertices (36 entries).
pub fn create_cube() -> Vec<DVec3> {
    points_from_flat(&BOX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_triangles() {
        assert_eq!(create_cube().len(), 36);
    }

    #[test]
    fn test_corners_on_unit_box() {
        for v in create_cube() {
            assert_eq!(v.abs(), DVec3::ONE);
        }
    }

    #[test]
    fn test_each_face_has_two_triangles() {
        let mut per_face = std::collections::HashMap::new();
        for tri in create_cube().chunks_exact(3) {
            // axis and sign shared by all three corners
            let axis = (0..3)
                .find(|&a| tri.iter().all(|v| v[a] == tri[0][a]))
                .unwrap();
            *per_face.entry((axis, tri[0][axis] > 0.0)).or_insert(0) += 1;
        }
        assert_eq!(per_face.len(), 6);
        assert!(per_face.values().all(|&n| n == 2));
    }
}
