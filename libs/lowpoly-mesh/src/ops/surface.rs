//! Heightfield-driven deformation and colouring.
//!
//! These bind a [`Heightfield`] (and optionally a [`Gradient`]) to the
//! generic vertex and colour operators.

use crate::gradient::Gradient;
use crate::heightfield::Heightfield;
use crate::mesh::Mesh;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// How a heightfield deforms a shape.
///
/// Sphere-like shapes are displaced along the outward radial direction;
/// planar and cylindrical shapes have a fixed world "up" and are displaced
/// along world axes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceMode {
    /// Multiply each vertex by `get(v)`.
    Radial,
    /// Add `get(x, 0, z) - 1` to Y.
    Vertical,
    /// Add `(get(v) - 1) * x` to X and `(get(v) - 1) * z` to Z.
    Lateral,
}

impl Mesh {
    /// Multiplies each vertex by the heightfield value at its position.
    pub fn multiply_vertices_by<H: Heightfield + ?Sized>(&mut self, heightfield: &H) {
        self.multiply_vertices(|v| heightfield.get(v));
    }

    /// Rescales each vertex to the heightfield value at its position.
    pub fn set_vertices_length_from<H: Heightfield + ?Sized>(&mut self, heightfield: &H) {
        self.set_vertices_length(|v| heightfield.get(v));
    }

    /// Smooth colouring: gradient sampled at every vertex.
    pub fn set_vertex_color_from<H, G>(&mut self, heightfield: &H, gradient: &G)
    where
        H: Heightfield + ?Sized,
        G: Gradient + ?Sized,
    {
        self.set_vertex_color(|v| gradient.get(heightfield.get_color(v)));
    }

    /// Flat colouring: gradient sampled at every triangle centroid.
    pub fn set_face_color_from<H, G>(&mut self, heightfield: &H, gradient: &G)
    where
        H: Heightfield + ?Sized,
        G: Gradient + ?Sized,
    {
        self.set_face_color(|c| gradient.get(heightfield.get_color(c)));
    }

    /// Flat-colours the mesh when a gradient is supplied; otherwise no-op.
    pub fn apply_gradient<H, G>(&mut self, heightfield: &H, gradient: Option<&G>)
    where
        H: Heightfield + ?Sized,
        G: Gradient + ?Sized,
    {
        if let Some(gradient) = gradient {
            self.set_face_color_from(heightfield, gradient);
        }
    }

    /// Colours from the undeformed shape, then deforms according to `mode`.
    pub fn apply<H, G>(&mut self, heightfield: &H, gradient: Option<&G>, mode: SurfaceMode)
    where
        H: Heightfield + ?Sized,
        G: Gradient + ?Sized,
    {
        self.apply_gradient(heightfield, gradient);
        match mode {
            SurfaceMode::Radial => self.multiply_vertices_by(heightfield),
            SurfaceMode::Vertical => self.transform_vertices(|v| {
                let n = heightfield.get(DVec3::new(v.x, 0.0, v.z));
                Some(DVec3::new(0.0, n - 1.0, 0.0))
            }),
            SurfaceMode::Lateral => self.transform_vertices(|v| {
                let n = heightfield.get(v) - 1.0;
                Some(DVec3::new(n * v.x, 0.0, n * v.z))
            }),
        }
    }
}
