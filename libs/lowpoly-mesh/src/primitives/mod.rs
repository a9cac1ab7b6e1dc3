//! # Primitives
//!
//! Level-0 builders for every shape plus the shared build pipeline.
//!
//! A [`Shape`] is an immutable, fully resolved description. [`build_mesh`]
//! turns it into a [`Mesh`] in a fixed order:
//!
//! ```text
//! base vertices → (radial: set radius) → subdivide → shape finish → surface apply
//! ```

pub mod cube;
pub mod cylinder;
pub mod icosahedron;
pub mod plane;
pub mod pyramid;
pub mod triangle;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
pub use icosahedron::create_icosahedron;
pub use plane::create_plane;
pub use pyramid::create_pyramid;
pub use triangle::create_triangle;

use crate::error::MeshError;
use crate::gradient::Gradient;
use crate::heightfield::Heightfield;
use crate::mesh::Mesh;
use crate::ops::SurfaceMode;
use crate::options::ShapeOptions;
use config::constants::{
    cells_for_size, clamp_sides, clamp_subdivisions, DEFAULT_CYLINDER_ROWS, DEFAULT_PLANE_CELLS,
    DEFAULT_PLANE_EXTENT, DEFAULT_PLANE_HEIGHT, DEFAULT_RADIUS, DEFAULT_SHAPE_HEIGHT,
    DEFAULT_SUBDIVISIONS,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Shape discriminant, parsed from scene names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Icosahedron,
    Sphere,
    Plane,
    #[serde(alias = "box")]
    Cube,
    Triangle,
    Cylinder,
    Pyramid,
}

impl FromStr for ShapeKind {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "icosahedron" => Ok(Self::Icosahedron),
            "sphere" => Ok(Self::Sphere),
            "plane" => Ok(Self::Plane),
            "cube" | "box" => Ok(Self::Cube),
            "triangle" => Ok(Self::Triangle),
            "cylinder" => Ok(Self::Cylinder),
            "pyramid" => Ok(Self::Pyramid),
            _ => Err(MeshError::unknown_shape(s)),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Icosahedron => "icosahedron",
            Self::Sphere => "sphere",
            Self::Plane => "plane",
            Self::Cube => "cube",
            Self::Triangle => "triangle",
            Self::Cylinder => "cylinder",
            Self::Pyramid => "pyramid",
        };
        f.write_str(name)
    }
}

/// A fully resolved shape description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Icosahedron scaled to `radius` before subdivision.
    Icosahedron { radius: f64 },
    /// Icosahedron re-projected to `radius` after subdivision.
    Sphere { radius: f64 },
    /// Grid of `cells_w × cells_l` quads at constant Y.
    Plane {
        width: f64,
        length: f64,
        height: f64,
        cells_w: u32,
        cells_l: u32,
    },
    /// Box spanning [-1, 1].
    Cube,
    /// Horizontal equilateral triangle on the unit circle.
    Triangle,
    /// Y-aligned cylinder.
    Cylinder {
        radius: f64,
        height: f64,
        sides: u32,
        rows: u32,
        caps: bool,
    },
    /// Pyramid with apex on +Y.
    Pyramid { height: f64, sides: u32, base: bool },
}

/// Heightfield and optional gradient applied at the end of a build.
#[derive(Clone, Copy)]
pub struct Surface<'a> {
    pub heightfield: &'a dyn Heightfield,
    pub gradient: Option<&'a dyn Gradient>,
}

impl<'a> Surface<'a> {
    /// Pairs a heightfield with an optional gradient.
    pub fn new(heightfield: &'a dyn Heightfield, gradient: Option<&'a dyn Gradient>) -> Self {
        Self {
            heightfield,
            gradient,
        }
    }
}

impl fmt::Debug for Surface<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("gradient", &self.gradient.is_some())
            .finish_non_exhaustive()
    }
}

impl Shape {
    /// Returns the shape discriminant.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Icosahedron { .. } => ShapeKind::Icosahedron,
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Plane { .. } => ShapeKind::Plane,
            Self::Cube => ShapeKind::Cube,
            Self::Triangle => ShapeKind::Triangle,
            Self::Cylinder { .. } => ShapeKind::Cylinder,
            Self::Pyramid { .. } => ShapeKind::Pyramid,
        }
    }

    /// Resolves an options record into a shape, filling per-shape defaults.
    ///
    /// Invalid values degrade instead of failing: non-positive sizes fall
    /// back to the default and `sides` is clamped to at least 3.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lowpoly_mesh::{Shape, ShapeKind, ShapeOptions};
    ///
    /// let opts = ShapeOptions { sides: Some(2), ..Default::default() };
    /// let shape = Shape::from_options(ShapeKind::Pyramid, &opts);
    /// assert_eq!(shape, Shape::Pyramid { height: 1.0, sides: 3, base: true });
    /// ```
    pub fn from_options(kind: ShapeKind, opts: &ShapeOptions) -> Shape {
        let radius = || positive_or(opts.radius, DEFAULT_RADIUS, "radius");
        let height = || positive_or(opts.height, DEFAULT_SHAPE_HEIGHT, "height");
        let sides = || {
            let requested = opts.sides.unwrap_or(0);
            let sides = clamp_sides(requested);
            if opts.sides.is_some() && sides != requested {
                warn!(requested, sides, "side count clamped");
            }
            sides
        };

        match kind {
            ShapeKind::Icosahedron => Shape::Icosahedron { radius: radius() },
            ShapeKind::Sphere => Shape::Sphere { radius: radius() },
            ShapeKind::Plane => {
                let width = positive_or(opts.width, DEFAULT_PLANE_EXTENT, "width");
                let length = positive_or(opts.length, DEFAULT_PLANE_EXTENT, "length");
                let (cells_w, cells_l) = match opts.cell_size {
                    Some(size) => (cells_for_size(width, size), cells_for_size(length, size)),
                    None => (
                        nonzero_or(opts.cells_w, DEFAULT_PLANE_CELLS, "cells_w"),
                        nonzero_or(opts.cells_l, DEFAULT_PLANE_CELLS, "cells_l"),
                    ),
                };
                Shape::Plane {
                    width,
                    length,
                    height: opts
                        .plane_height
                        .filter(|h| h.is_finite())
                        .unwrap_or(DEFAULT_PLANE_HEIGHT),
                    cells_w,
                    cells_l,
                }
            }
            ShapeKind::Cube => Shape::Cube,
            ShapeKind::Triangle => Shape::Triangle,
            ShapeKind::Cylinder => Shape::Cylinder {
                radius: radius(),
                height: height(),
                sides: sides(),
                rows: nonzero_or(opts.rows, DEFAULT_CYLINDER_ROWS, "rows"),
                caps: opts.caps.unwrap_or(true),
            },
            ShapeKind::Pyramid => Shape::Pyramid {
                height: height(),
                sides: sides(),
                base: opts.base.unwrap_or(true),
            },
        }
    }

    /// Level-0 face-duplicated vertices.
    pub fn base_vertices(&self) -> Vec<DVec3> {
        match *self {
            Shape::Icosahedron { .. } | Shape::Sphere { .. } => create_icosahedron(),
            Shape::Plane {
                width,
                length,
                height,
                cells_w,
                cells_l,
            } => create_plane(width, length, height, cells_w, cells_l),
            Shape::Cube => create_cube(),
            Shape::Triangle => create_triangle(),
            Shape::Cylinder {
                height,
                sides,
                rows,
                caps,
                ..
            } => create_cylinder(height, clamp_sides(sides), rows, caps),
            Shape::Pyramid {
                height,
                sides,
                base,
            } => create_pyramid(height, clamp_sides(sides), base),
        }
    }

    /// How a heightfield deforms this shape.
    pub fn surface_mode(&self) -> SurfaceMode {
        match self {
            Shape::Plane { .. } | Shape::Triangle => SurfaceMode::Vertical,
            Shape::Cylinder { .. } => SurfaceMode::Lateral,
            Shape::Icosahedron { .. }
            | Shape::Sphere { .. }
            | Shape::Cube
            | Shape::Pyramid { .. } => SurfaceMode::Radial,
        }
    }

    fn before_subdivision(&self, mesh: &mut Mesh) {
        if let Shape::Icosahedron { radius } | Shape::Sphere { radius } = *self {
            mesh.set_length_all(radius);
        }
    }

    fn after_subdivision(&self, mesh: &mut Mesh) {
        match *self {
            Shape::Sphere { radius } => mesh.set_length_all(radius),
            Shape::Cylinder { radius, .. } => {
                let n = radius - 1.0;
                mesh.transform_vertices(|v| Some(DVec3::new(n * v.x, 0.0, n * v.z)));
            }
            _ => {}
        }
    }
}

/// Builds a mesh: base vertices, subdivision, then the optional surface.
///
/// `subdivisions` is capped at [`MAX_SUBDIVISIONS`](config::constants::MAX_SUBDIVISIONS).
///
/// # Example
///
/// ```rust
/// use lowpoly_mesh::{build_mesh, Shape};
///
/// let sphere = build_mesh(&Shape::Sphere { radius: 1.0 }, 1, None);
/// assert_eq!(sphere.vertex_count(), 240);
/// ```
pub fn build_mesh(shape: &Shape, subdivisions: u32, surface: Option<Surface<'_>>) -> Mesh {
    let passes = clamp_subdivisions(subdivisions);
    if passes != subdivisions {
        warn!(requested = subdivisions, passes, "subdivision count clamped");
    }

    let mut mesh = Mesh::from_vertices(shape.base_vertices());
    shape.before_subdivision(&mut mesh);
    mesh.subdivide(passes);
    shape.after_subdivision(&mut mesh);

    if let Some(surface) = surface {
        mesh.apply(surface.heightfield, surface.gradient, shape.surface_mode());
    }

    debug!(
        shape = %shape.kind(),
        subdivisions = passes,
        triangles = mesh.triangle_count(),
        "built mesh"
    );
    mesh
}

/// Resolves `opts` for `kind` and builds it.
pub fn build_from_options(
    kind: ShapeKind,
    opts: &ShapeOptions,
    surface: Option<Surface<'_>>,
) -> Mesh {
    let shape = Shape::from_options(kind, opts);
    build_mesh(
        &shape,
        opts.subdivisions.unwrap_or(DEFAULT_SUBDIVISIONS),
        surface,
    )
}

fn positive_or(value: Option<f64>, default: f64, field: &'static str) -> f64 {
    match value {
        Some(v) if v > 0.0 && v.is_finite() => v,
        Some(v) => {
            warn!(field, value = v, default, "non-positive size replaced by default");
            default
        }
        None => default,
    }
}

fn nonzero_or(value: Option<u32>, default: u32, field: &'static str) -> u32 {
    match value {
        Some(0) => {
            warn!(field, default, "zero count replaced by default");
            default
        }
        Some(v) => v,
        None => default,
    }
}
