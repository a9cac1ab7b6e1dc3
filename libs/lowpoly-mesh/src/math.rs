//! Vector helpers over `glam::DVec3` shared by the builders and mutators.
//!
//! All geometry is computed in f64. Colours are converted to f32 only when
//! they are produced.

use config::constants::LENGTH_EPSILON;
use glam::DVec3;

/// Returns `v` scaled to unit length, or `v` unchanged when it is zero.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use lowpoly_mesh::math::normalize;
///
/// assert_eq!(normalize(DVec3::new(0.0, 3.0, 0.0)), DVec3::Y);
/// assert_eq!(normalize(DVec3::ZERO), DVec3::ZERO);
/// ```
#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    let len = v.length();
    if len < LENGTH_EPSILON {
        v
    } else {
        v / len
    }
}

/// Arithmetic mean of two points.
#[inline]
pub fn midpoint(a: DVec3, b: DVec3) -> DVec3 {
    (a + b) * 0.5
}

/// Arithmetic mean of a triangle's corners.
#[inline]
pub fn centroid(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (a + b + c) / 3.0
}

/// Rescales `v` to `target` length.
///
/// Returns `None` for zero-length input, which has no direction to keep.
#[inline]
pub fn with_length(v: DVec3, target: f64) -> Option<DVec3> {
    let len = v.length();
    (len >= LENGTH_EPSILON).then(|| v * (target / len))
}

/// Point on the unit circle around the Y axis at `angle` radians, lifted to `y`.
///
/// Angle 0 lies on +Z and increases towards +X.
#[inline]
pub fn angle_point(angle: f64, y: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(sin, y, cos)
}

/// Expands an indexed point table into face-duplicated vertices.
///
/// Indices outside `points` are skipped together with their whole triangle.
pub fn face_duplicate(points: &[DVec3], indices: &[usize]) -> Vec<DVec3> {
    let mut vertices = Vec::with_capacity(indices.len());
    for tri in indices.chunks_exact(3) {
        if tri.iter().all(|&i| i < points.len()) {
            vertices.extend(tri.iter().map(|&i| points[i]));
        }
    }
    vertices
}

/// Reads a flat `[x, y, z, x, y, z, ...]` table into points.
pub fn points_from_flat(coords: &[f64]) -> Vec<DVec3> {
    coords
        .chunks_exact(3)
        .map(|c| DVec3::new(c[0], c[1], c[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_midpoint_is_mean() {
        let m = midpoint(DVec3::new(0.0, 0.0, 0.0), DVec3::new(2.0, 4.0, -6.0));
        assert_eq!(m, DVec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_centroid() {
        let c = centroid(DVec3::X * 3.0, DVec3::Y * 3.0, DVec3::Z * 3.0);
        assert_eq!(c, DVec3::ONE);
    }

    #[test]
    fn test_with_length_zero_is_none() {
        assert!(with_length(DVec3::ZERO, 2.0).is_none());
        let v = with_length(DVec3::new(1.0, 1.0, 0.0), 2.0).unwrap();
        assert_relative_eq!(v.length(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_point_quadrants() {
        let p = angle_point(0.0, 0.5);
        assert_relative_eq!(p.z, 1.0);
        assert_relative_eq!(p.y, 0.5);
        let q = angle_point(std::f64::consts::FRAC_PI_2, 0.0);
        assert_relative_eq!(q.x, 1.0);
        assert_relative_eq!(q.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_face_duplicate_skips_bad_triangles() {
        let points = [DVec3::ZERO, DVec3::X, DVec3::Y];
        let verts = face_duplicate(&points, &[0, 1, 2, 0, 1, 7]);
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[1], DVec3::X);
    }

    #[test]
    fn test_points_from_flat_drops_partial() {
        let points = points_from_flat(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(points, vec![DVec3::new(1.0, 2.0, 3.0)]);
    }
}
