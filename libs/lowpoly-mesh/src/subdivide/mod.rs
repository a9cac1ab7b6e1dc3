//! # Subdivision
//!
//! Splits one triangle into four using its edge midpoints.
//!
//! Midpoints are arithmetic means, not spherical interpolations, so
//! subdividing a sphere pulls the new vertices inside the radius. Callers
//! that need a uniform radius re-normalize afterwards (or pass an adjustor).
//!
//! ```text
//!         C
//!        / \
//!       F---E
//!      / \ / \
//!     A---D---B
//! ```
//!
//! Output order is `(A, D, F)`, `(D, B, E)`, `(E, C, F)`, `(D, E, F)`.

use crate::math::midpoint;
use glam::DVec3;

/// Splits the corner values of one triangle into the corners of four.
///
/// `mid` computes the value at an edge midpoint from its two end values, so
/// the same split drives positions, colours and UVs.
pub fn split_corners<T: Copy>(corners: [T; 3], mut mid: impl FnMut(T, T) -> T) -> [[T; 3]; 4] {
    let [a, b, c] = corners;
    let d = mid(a, b);
    let e = mid(b, c);
    let f = mid(c, a);
    [[a, d, f], [d, b, e], [e, c, f], [d, e, f]]
}

/// Subdivides triangle `(a, b, c)` into four.
///
/// When `adjust` is given it maps every new midpoint (never the original
/// corners), e.g. to project it back onto a sphere.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lowpoly_mesh::subdivide::subdivide_triangle;
///
/// let tris = subdivide_triangle(DVec3::ZERO, DVec3::X, DVec3::Y, None);
/// assert_eq!(tris[0][1], DVec3::new(0.5, 0.0, 0.0));
/// ```
pub fn subdivide_triangle(
    a: DVec3,
    b: DVec3,
    c: DVec3,
    adjust: Option<&dyn Fn(DVec3) -> DVec3>,
) -> [[DVec3; 3]; 4] {
    split_corners([a, b, c], |p, q| {
        let m = midpoint(p, q);
        match adjust {
            Some(adjust) => adjust(m),
            None => m,
        }
    })
}

/// Subdivides a face-duplicated triangle soup once.
///
/// Trailing vertices that do not form a whole triangle are dropped.
pub fn subdivide_soup(vertices: &[DVec3], adjust: Option<&dyn Fn(DVec3) -> DVec3>) -> Vec<DVec3> {
    let mut out = Vec::with_capacity(vertices.len() * 4);
    for tri in vertices.chunks_exact(3) {
        for sub in subdivide_triangle(tri[0], tri[1], tri[2], adjust) {
            out.extend_from_slice(&sub);
        }
    }
    out
}
