//! # Mesh Data Structure
//!
//! Face-duplicated triangle soup with optional per-vertex colours and UVs.

use crate::error::{MeshError, Result};
use crate::gradient::Color;
use crate::subdivide::{split_corners, subdivide_soup};
use glam::{DVec2, DVec3};
use tracing::warn;

/// A face-duplicated triangle mesh.
///
/// Every triangle owns three consecutive vertex entries; there is no index
/// buffer. When present, `colors` and `uvs` hold exactly one entry per
/// vertex, and every mutator keeps vertex `i` bound to the same triangle
/// corner.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens in [`Mesh::to_buffers`].
///
/// # Example
///
/// ```rust
/// use lowpoly_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::from_vertices(vec![DVec3::ZERO, DVec3::X, DVec3::Z]);
/// mesh.subdivide(2);
/// assert_eq!(mesh.triangle_count(), 16);
/// assert_eq!(mesh.subdivision_level(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, three per triangle
    pub(crate) vertices: Vec<DVec3>,
    /// Optional vertex colours (RGB in [0, 1])
    pub(crate) colors: Option<Vec<Color>>,
    /// Optional vertex texture coordinates
    pub(crate) uvs: Option<Vec<DVec2>>,
    /// Subdivision passes applied so far
    pub(crate) subdivision_level: u32,
}

/// Flat f32 arrays ready for a renderer's buffer upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// `[x, y, z, ...]`, 9 entries per triangle
    pub positions: Vec<f32>,
    /// `[r, g, b, ...]`, parallel to `positions`
    pub colors: Option<Vec<f32>>,
    /// `[u, v, ...]`, 2 entries per vertex
    pub uvs: Option<Vec<f32>>,
    /// Flat face normals, parallel to `positions`
    pub normals: Option<Vec<f32>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from face-duplicated vertices.
    ///
    /// Trailing vertices that do not complete a triangle are dropped.
    pub fn from_vertices(mut vertices: Vec<DVec3>) -> Self {
        let whole = vertices.len() - vertices.len() % 3;
        if whole != vertices.len() {
            warn!(
                dropped = vertices.len() - whole,
                "vertex list is not a whole number of triangles"
            );
            vertices.truncate(whole);
        }
        Self {
            vertices,
            ..Self::default()
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of subdivision passes applied.
    #[inline]
    pub fn subdivision_level(&self) -> u32 {
        self.subdivision_level
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the vertex colours.
    pub fn colors(&self) -> Option<&[Color]> {
        self.colors.as_deref()
    }

    /// Returns the vertex UVs.
    pub fn uvs(&self) -> Option<&[DVec2]> {
        self.uvs.as_deref()
    }

    /// Drops the colour array.
    pub fn clear_colors(&mut self) {
        self.colors = None;
    }

    /// Drops the UV array.
    pub fn clear_uvs(&mut self) {
        self.uvs = None;
    }

    /// Iterates over triangles as corner triples.
    pub fn triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.vertices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(&first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        self.vertices[1..]
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Flat normal of every vertex (its triangle's normal).
    ///
    /// Degenerate triangles get a zero normal.
    pub fn face_normals(&self) -> Vec<DVec3> {
        let mut normals = Vec::with_capacity(self.vertices.len());
        for [a, b, c] in self.triangles() {
            let n = (b - a).cross(c - a).normalize_or_zero();
            normals.extend_from_slice(&[n, n, n]);
        }
        normals
    }

    /// Subdivides every triangle into four, `passes` times.
    ///
    /// Colours and UVs are interpolated at the new midpoints. Returns the
    /// new subdivision level; `passes == 0` is a no-op.
    pub fn subdivide(&mut self, passes: u32) -> u32 {
        for _ in 0..passes {
            self.subdivide_once(None);
        }
        self.subdivision_level
    }

    /// Like [`Mesh::subdivide`], passing every new midpoint through `adjust`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use lowpoly_mesh::Mesh;
    ///
    /// let mut mesh = Mesh::from_vertices(vec![DVec3::X, DVec3::Y, DVec3::Z]);
    /// mesh.subdivide_projected(1, |p| p.normalize());
    /// assert!(mesh.vertices().iter().all(|v| (v.length() - 1.0).abs() < 1e-12));
    /// ```
    pub fn subdivide_projected(&mut self, passes: u32, adjust: impl Fn(DVec3) -> DVec3) -> u32 {
        let adjust: &dyn Fn(DVec3) -> DVec3 = &adjust;
        for _ in 0..passes {
            self.subdivide_once(Some(adjust));
        }
        self.subdivision_level
    }

    fn subdivide_once(&mut self, adjust: Option<&dyn Fn(DVec3) -> DVec3>) {
        self.vertices = subdivide_soup(&self.vertices, adjust);

        if let Some(colors) = &self.colors {
            self.colors = Some(split_attribute(colors, |a, b| a.lerp(b, 0.5)));
        }
        if let Some(uvs) = &self.uvs {
            self.uvs = Some(split_attribute(uvs, |a, b| (a + b) * 0.5));
        }
        self.subdivision_level += 1;
    }

    /// Appends another mesh's triangles.
    ///
    /// Colours and UVs are kept only when both meshes have them; otherwise
    /// the array is dropped so it never goes out of step with the vertices.
    pub fn merge(&mut self, other: &Mesh) {
        self.vertices.extend_from_slice(&other.vertices);

        match (&mut self.colors, &other.colors) {
            (Some(colors), Some(other_colors)) => colors.extend_from_slice(other_colors),
            _ => self.colors = None,
        }
        match (&mut self.uvs, &other.uvs) {
            (Some(uvs), Some(other_uvs)) => uvs.extend_from_slice(other_uvs),
            _ => self.uvs = None,
        }
    }

    /// Validates the mesh invariants.
    ///
    /// Checks:
    /// - Vertex count is a whole number of triangles
    /// - Colour and UV arrays match the vertex count
    /// - All coordinates are finite
    pub fn validate(&self) -> Result<()> {
        let count = self.vertices.len();
        if count % 3 != 0 {
            return Err(MeshError::validation(format!(
                "{count} vertices do not form whole triangles"
            )));
        }
        if let Some(colors) = &self.colors {
            if colors.len() != count {
                return Err(MeshError::validation(format!(
                    "{} colours for {count} vertices",
                    colors.len()
                )));
            }
        }
        if let Some(uvs) = &self.uvs {
            if uvs.len() != count {
                return Err(MeshError::validation(format!(
                    "{} uvs for {count} vertices",
                    uvs.len()
                )));
            }
        }
        if let Some(i) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(MeshError::validation(format!("vertex {i} is not finite")));
        }
        Ok(())
    }

    /// Exports flat f32 arrays for the renderer.
    ///
    /// `with_normals` adds flat face normals, matching the faceted look of
    /// face-duplicated storage.
    pub fn to_buffers(&self, with_normals: bool) -> MeshBuffers {
        let flatten3 = |v: &[DVec3]| -> Vec<f32> {
            v.iter()
                .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
                .collect()
        };
        MeshBuffers {
            positions: flatten3(&self.vertices),
            colors: self
                .colors
                .as_ref()
                .map(|c| c.iter().flat_map(|c| c.to_array()).collect()),
            uvs: self
                .uvs
                .as_ref()
                .map(|uv| uv.iter().flat_map(|t| [t.x as f32, t.y as f32]).collect()),
            normals: with_normals.then(|| flatten3(&self.face_normals())),
        }
    }
}

fn split_attribute<T: Copy>(values: &[T], mid: impl Fn(T, T) -> T) -> Vec<T> {
    let mut out = Vec::with_capacity(values.len() * 4);
    for t in values.chunks_exact(3) {
        for sub in split_corners([t[0], t[1], t[2]], &mid) {
            out.extend_from_slice(&sub);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn triangle() -> Mesh {
        Mesh::from_vertices(vec![DVec3::ZERO, DVec3::X, DVec3::Y])
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_from_vertices_truncates_partial_triangle() {
        let mesh = Mesh::from_vertices(vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z]);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn test_subdivide_zero_is_noop() {
        let mut mesh = triangle();
        assert_eq!(mesh.subdivide(0), 0);
        assert_eq!(mesh, triangle());
    }

    #[test]
    fn test_subdivide_matches_soup_split() {
        let mut mesh = triangle();
        let lift = |p: DVec3| p + DVec3::Z;
        let expected = subdivide_soup(mesh.vertices(), Some(&lift));
        mesh.subdivide_projected(1, lift);
        assert_eq!(mesh.vertices(), expected.as_slice());
        assert_eq!(mesh.subdivision_level(), 1);
    }

    #[test]
    fn test_subdivide_interpolates_colors() {
        let mut mesh = triangle();
        mesh.colors = Some(vec![Vec3::ZERO, Vec3::ONE, Vec3::ZERO]);
        mesh.subdivide(1);
        let colors = mesh.colors().unwrap();
        assert_eq!(colors.len(), 12);
        // (A, mid(A,B), mid(C,A))
        assert_eq!(colors[1], Vec3::splat(0.5));
        assert_eq!(colors[2], Vec3::ZERO);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_subdivide_keeps_uvs_parallel() {
        let mut mesh = triangle();
        mesh.uvs = Some(vec![DVec2::ZERO, DVec2::X, DVec2::Y]);
        mesh.subdivide(2);
        assert_eq!(mesh.uvs().unwrap().len(), mesh.vertex_count());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mesh = Mesh::from_vertices(vec![
            DVec3::new(-1.0, -2.0, -3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::ZERO,
        ]);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_face_normals_flat() {
        let normals = triangle().face_normals();
        assert_eq!(normals, vec![DVec3::Z; 3]);
    }

    #[test]
    fn test_merge_keeps_colors_when_both_have_them() {
        let mut a = triangle();
        a.colors = Some(vec![Vec3::ONE; 3]);
        let mut b = triangle();
        b.colors = Some(vec![Vec3::ZERO; 3]);
        a.merge(&b);
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.colors().unwrap().len(), 6);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_merge_drops_one_sided_arrays() {
        let mut a = triangle();
        a.colors = Some(vec![Vec3::ONE; 3]);
        a.uvs = Some(vec![DVec2::ZERO; 3]);
        a.merge(&triangle());
        assert_eq!(a.vertex_count(), 6);
        assert!(a.colors().is_none());
        assert!(a.uvs().is_none());
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_color_mismatch() {
        let mut mesh = triangle();
        mesh.colors = Some(vec![Vec3::ONE; 2]);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_to_buffers_shapes() {
        let mut mesh = triangle();
        mesh.colors = Some(vec![Vec3::ONE; 3]);
        let buffers = mesh.to_buffers(true);
        assert_eq!(buffers.positions.len(), 9);
        assert_eq!(buffers.colors.as_ref().map(Vec::len), Some(9));
        assert!(buffers.uvs.is_none());
        assert_eq!(buffers.normals.as_ref().map(Vec::len), Some(9));
        assert_eq!(&buffers.positions[3..6], &[1.0, 0.0, 0.0]);
    }
}
