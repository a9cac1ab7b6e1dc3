//! # Plane
//!
//! Flat grid of quads centred on the origin.

use glam::DVec3;

/// Level-0 grid of `cells_w × cells_l` quads, two triangles per quad.
///
/// The grid spans `width` along X and `length` along Z, centred on the
/// origin, at constant `y`. Zero cell counts produce no triangles.
///
/// # Example
///
/// ```rust
/// use lowpoly_mesh::primitives::create_plane;
///
/// let vertices = create_plane(2.0, 2.0, 0.0, 2, 2);
/// assert_eq!(vertices.len(), 2 * 2 * 6);
/// ```
pub fn create_plane(width: f64, length: f64, y: f64, cells_w: u32, cells_l: u32) -> Vec<DVec3> {
    let mut vertices = Vec::with_capacity(cells_w as usize * cells_l as usize * 6);
    if cells_w == 0 || cells_l == 0 {
        return vertices;
    }

    let cell_w = width / cells_w as f64;
    let cell_l = length / cells_l as f64;
    for x in 0..cells_w {
        for z in 0..cells_l {
            let x0 = x as f64 * cell_w - width / 2.0;
            let z0 = z as f64 * cell_l - length / 2.0;
            let (x1, z1) = (x0 + cell_w, z0 + cell_l);
            vertices.extend_from_slice(&[
                DVec3::new(x1, y, z0),
                DVec3::new(x0, y, z0),
                DVec3::new(x1, y, z1),
                DVec3::new(x0, y, z1),
                DVec3::new(x1, y, z1),
                DVec3::new(x0, y, z0),
            ]);
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_is_centred() {
        let vertices = create_plane(4.0, 2.0, 0.0, 3, 5);
        let (min, max) = vertices
            .iter()
            .fold((DVec3::MAX, DVec3::MIN), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        assert_relative_eq!(min.x, -2.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(min.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(max.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_plane_height() {
        assert!(create_plane(1.0, 1.0, 0.75, 2, 2).iter().all(|v| v.y == 0.75));
    }

    #[test]
    fn test_plane_faces_up() {
        for tri in create_plane(1.0, 1.0, 0.0, 1, 1).chunks_exact(3) {
            let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
            assert!(normal.y > 0.0);
        }
    }

    #[test]
    fn test_zero_cells_is_empty() {
        assert!(create_plane(1.0, 1.0, 0.0, 0, 3).is_empty());
    }
}
