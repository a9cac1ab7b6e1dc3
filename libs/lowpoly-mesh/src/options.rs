//! # Shape Options
//!
//! Caller-facing configuration record for the shape builders. Every field is
//! optional; omitted fields fall back to per-shape defaults when the record
//! is resolved into a [`Shape`](crate::Shape).
//!
//! The JSON form accepts the short names used by scene files (`subs`, `w`,
//! `l`, `h`, `numW`, `numL`, `cellSize`).

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Optional per-build configuration.
///
/// Records are plain values: [`ShapeOptions::merged_over`] produces a new
/// record and never mutates either input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeOptions {
    /// Sphere/icosahedron/cylinder radius
    pub radius: Option<f64>,
    /// Subdivision passes
    #[serde(alias = "subs")]
    pub subdivisions: Option<u32>,
    /// Plane extent along X
    #[serde(alias = "w")]
    pub width: Option<f64>,
    /// Plane extent along Z
    #[serde(alias = "l")]
    pub length: Option<f64>,
    /// Plane Y offset
    #[serde(alias = "h")]
    pub plane_height: Option<f64>,
    /// Plane cell count along X
    #[serde(alias = "numW")]
    pub cells_w: Option<u32>,
    /// Plane cell count along Z
    #[serde(alias = "numL")]
    pub cells_l: Option<u32>,
    /// Target plane cell size; overrides the cell counts
    #[serde(alias = "cellSize")]
    pub cell_size: Option<f64>,
    /// Cylinder/pyramid height
    pub height: Option<f64>,
    /// Radial segment count for cylinders and pyramids
    pub sides: Option<u32>,
    /// Cylinder vertical bands
    pub rows: Option<u32>,
    /// Cylinder cap visibility
    pub caps: Option<bool>,
    /// Pyramid base visibility
    pub base: Option<bool>,
}

impl ShapeOptions {
    /// Parses a JSON options record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lowpoly_mesh::ShapeOptions;
    ///
    /// let opts = ShapeOptions::from_json(r#"{"numW": 4, "cellSize": 0.5, "subs": 1}"#).unwrap();
    /// assert_eq!(opts.cells_w, Some(4));
    /// assert_eq!(opts.subdivisions, Some(1));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns a new record where fields set on `self` win over `defaults`.
    pub fn merged_over(&self, defaults: &ShapeOptions) -> ShapeOptions {
        ShapeOptions {
            radius: self.radius.or(defaults.radius),
            subdivisions: self.subdivisions.or(defaults.subdivisions),
            width: self.width.or(defaults.width),
            length: self.length.or(defaults.length),
            plane_height: self.plane_height.or(defaults.plane_height),
            cells_w: self.cells_w.or(defaults.cells_w),
            cells_l: self.cells_l.or(defaults.cells_l),
            cell_size: self.cell_size.or(defaults.cell_size),
            height: self.height.or(defaults.height),
            sides: self.sides.or(defaults.sides),
            rows: self.rows.or(defaults.rows),
            caps: self.caps.or(defaults.caps),
            base: self.base.or(defaults.base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    #[test]
    fn test_merged_over_prefers_overrides() {
        let defaults = ShapeOptions {
            radius: Some(10.0),
            sides: Some(6),
            ..Default::default()
        };
        let overrides = ShapeOptions {
            radius: Some(2.0),
            ..Default::default()
        };
        let merged = overrides.merged_over(&defaults);
        assert_eq!(merged.radius, Some(2.0));
        assert_eq!(merged.sides, Some(6));
        // inputs untouched
        assert_eq!(defaults.radius, Some(10.0));
        assert_eq!(overrides.sides, None);
    }

    #[test]
    fn test_from_json_aliases() {
        let json = r#"{"w": 2, "l": 3, "h": 0.5, "numL": 7, "caps": false}"#;
        let opts = ShapeOptions::from_json(json).unwrap();
        assert_eq!(opts.width, Some(2.0));
        assert_eq!(opts.length, Some(3.0));
        assert_eq!(opts.plane_height, Some(0.5));
        assert_eq!(opts.cells_l, Some(7));
        assert_eq!(opts.caps, Some(false));
    }

    #[test]
    fn test_from_json_field_names() {
        let json = r#"{"plane_height": 0.5, "cells_w": 3, "cell_size": 0.25}"#;
        let opts = ShapeOptions::from_json(json).unwrap();
        assert_eq!(opts.plane_height, Some(0.5));
        assert_eq!(opts.cells_w, Some(3));
        assert_eq!(opts.cell_size, Some(0.25));
        let back = serde_json::to_string(&opts).unwrap();
        assert!(back.contains("\"cells_w\":3"));
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        let err = ShapeOptions::from_json(r#"{"sides": "many"}"#).unwrap_err();
        assert!(matches!(err, MeshError::InvalidOptions(_)));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let opts = ShapeOptions::from_json(r#"{"noise": {}, "radius": 3}"#).unwrap();
        assert_eq!(opts.radius, Some(3.0));
    }
}
