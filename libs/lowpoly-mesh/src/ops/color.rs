//! Colour and texture-coordinate assignment.

use crate::gradient::Color;
use crate::math::centroid;
use crate::mesh::Mesh;
use config::constants::DEFAULT_COLOR;
use glam::{DVec2, DVec3};

impl Mesh {
    /// Colours each vertex from its own position.
    ///
    /// Creates the colour array if the mesh has none.
    pub fn set_vertex_color(&mut self, mut f: impl FnMut(DVec3) -> Color) {
        self.colors = Some(self.vertices.iter().map(|v| f(*v)).collect());
    }

    /// Colours each triangle uniformly from its centroid.
    pub fn set_face_color(&mut self, mut f: impl FnMut(DVec3) -> Color) {
        let mut colors = Vec::with_capacity(self.vertices.len());
        for [a, b, c] in self.triangles() {
            let color = f(centroid(a, b, c));
            colors.extend_from_slice(&[color, color, color]);
        }
        self.colors = Some(colors);
    }

    /// Paints every vertex the same colour.
    pub fn set_uniform_color(&mut self, color: Color) {
        self.colors = Some(vec![color; self.vertices.len()]);
    }

    /// Rewrites colours from the current colour and position.
    ///
    /// Vertices without a colour start from the default grey.
    pub fn recolor(&mut self, mut f: impl FnMut(Color, DVec3) -> Color) {
        let default = Color::from(DEFAULT_COLOR);
        let current = self.colors.take();
        let colors = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let old = current.as_ref().map_or(default, |c| c[i]);
                f(old, *v)
            })
            .collect();
        self.colors = Some(colors);
    }

    /// Assigns texture coordinates from position and corner index (0..3).
    pub fn set_uv(&mut self, mut f: impl FnMut(DVec3, usize) -> DVec2) {
        self.uvs = Some(
            self.vertices
                .iter()
                .enumerate()
                .map(|(i, v)| f(*v, i % 3))
                .collect(),
        );
    }
}
