//! # Config Crate
//!
//! Centralized configuration constants for the low-poly generation pipeline.
//! Tolerances, per-shape defaults and placement tuning values are defined
//! here so that the mesh and planet crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_sides, MIN_SIDES, LENGTH_EPSILON};
//!
//! // Radial shapes never drop below a triangle cross-section
//! assert_eq!(clamp_sides(2), MIN_SIDES);
//!
//! // Zero-length vertices are never rescaled
//! let length: f64 = 0.0;
//! assert!(length < LENGTH_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Clamp, don't reject**: helpers fold bad input into the valid range

pub mod constants;
