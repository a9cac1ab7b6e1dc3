//! # Low-Poly Mesh
//!
//! Procedural low-polygon geometry built by recursive triangle subdivision
//! and deformed/coloured through pluggable heightfields.
//!
//! ## Architecture
//!
//! ```text
//! Shape (tagged union) → level-0 triangle soup → subdivide → heightfield apply → Mesh
//! ```
//!
//! Meshes are stored face-duplicated: every triangle owns three vertex
//! entries, with optional parallel colour and UV arrays. There is no index
//! buffer, so face-level operations work on runs of three vertices.
//!
//! ## Usage
//!
//! ```rust
//! use lowpoly_mesh::{build_mesh, ConstantField, ColorStops, Shape, Surface};
//!
//! let field = ConstantField::new(1.0, 0.5);
//! let gradient = ColorStops::between(&[[0.0, 0.0, 0.0].into(), [1.0, 1.0, 1.0].into()]);
//! let mesh = build_mesh(
//!     &Shape::Sphere { radius: 2.0 },
//!     2,
//!     Some(Surface::new(&field, Some(&gradient))),
//! );
//! assert_eq!(mesh.triangle_count(), 320);
//! ```

pub mod error;
pub mod gradient;
pub mod heightfield;
pub mod math;
pub mod mesh;
pub mod noise_field;
pub mod ops;
pub mod options;
pub mod primitives;
pub mod subdivide;

pub use error::{MeshError, Result};
pub use gradient::{color_from_hex, Color, ColorStop, ColorStops, FnGradient, Gradient};
pub use heightfield::{ConstantField, FnField, Heightfield};
pub use mesh::{Mesh, MeshBuffers};
pub use noise_field::{NoiseField, NoiseSettings};
pub use ops::SurfaceMode;
pub use options::ShapeOptions;
pub use primitives::{build_from_options, build_mesh, Shape, ShapeKind, Surface};
