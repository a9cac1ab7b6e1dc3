//! Vertex position operations.

use crate::math::with_length;
use crate::mesh::Mesh;
use glam::DVec3;

impl Mesh {
    /// Adds the returned displacement to each vertex.
    ///
    /// `None` leaves the vertex untouched.
    pub fn transform_vertices(&mut self, mut f: impl FnMut(DVec3) -> Option<DVec3>) {
        for v in &mut self.vertices {
            if let Some(delta) = f(*v) {
                *v += delta;
            }
        }
    }

    /// Replaces each vertex with the returned position.
    pub fn set_vertices(&mut self, mut f: impl FnMut(DVec3) -> DVec3) {
        for v in &mut self.vertices {
            *v = f(*v);
        }
    }

    /// Multiplies each vertex component-wise by the returned factors.
    pub fn scale_vertices(&mut self, mut f: impl FnMut(DVec3) -> DVec3) {
        for v in &mut self.vertices {
            *v *= f(*v);
        }
    }

    /// Multiplies each vertex by the returned scalar.
    pub fn multiply_vertices(&mut self, mut f: impl FnMut(DVec3) -> f64) {
        for v in &mut self.vertices {
            *v *= f(*v);
        }
    }

    /// Rescales each vertex to the returned magnitude, keeping direction.
    ///
    /// Zero-length vertices have no direction and are left unchanged.
    pub fn set_vertices_length(&mut self, mut f: impl FnMut(DVec3) -> f64) {
        for v in &mut self.vertices {
            if let Some(scaled) = with_length(*v, f(*v)) {
                *v = scaled;
            }
        }
    }

    /// Rescales every vertex to the same magnitude.
    pub fn set_length_all(&mut self, length: f64) {
        self.set_vertices_length(|_| length);
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        self.transform_vertices(|_| Some(offset));
    }

    /// Scales every vertex component-wise about the origin.
    pub fn scale(&mut self, factors: DVec3) {
        self.scale_vertices(|_| factors);
    }
}
