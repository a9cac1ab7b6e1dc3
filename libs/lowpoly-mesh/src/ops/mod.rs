//! # Mesh Operations
//!
//! In-place mutators on [`Mesh`](crate::Mesh). Every operation preserves
//! the face-duplicated layout: vertex `i` stays bound to the same triangle
//! corner, and colour/UV arrays stay parallel to the vertex array.
//!
//! - [`vertices`]: position rewrites (displace, set, scale, set length)
//! - [`color`]: per-vertex and per-face colours, UV assignment
//! - [`faces`]: triangle removal
//! - [`surface`]: heightfield-driven deformation and colouring

pub mod color;
pub mod faces;
pub mod surface;
pub mod vertices;

pub use surface::SurfaceMode;
