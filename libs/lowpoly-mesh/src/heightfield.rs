//! # Heightfields
//!
//! A heightfield is a pure function of a 3D direction (not necessarily
//! normalized) returning a scalar multiplier for deformation and a separate
//! scalar in a gradient's domain for colouring.
//!
//! Sphere-like shapes multiply vertex magnitudes by [`Heightfield::get`];
//! planar shapes displace along +Y and cylinders scale in XZ, both treating
//! `1.0` as the neutral value (see [`SurfaceMode`](crate::SurfaceMode)).

use glam::DVec3;
use std::sync::Arc;

/// Scalar field sampled by direction.
///
/// Implementations must be side-effect free: the same input always yields
/// the same output for a given instance.
pub trait Heightfield {
    /// Height multiplier at `p`.
    fn get(&self, p: DVec3) -> f64;

    /// Colour-sampling scalar at `p`, in the domain of the paired gradient.
    fn get_color(&self, p: DVec3) -> f64;
}

impl<T: Heightfield + ?Sized> Heightfield for &T {
    fn get(&self, p: DVec3) -> f64 {
        (**self).get(p)
    }

    fn get_color(&self, p: DVec3) -> f64 {
        (**self).get_color(p)
    }
}

impl<T: Heightfield + ?Sized> Heightfield for Box<T> {
    fn get(&self, p: DVec3) -> f64 {
        (**self).get(p)
    }

    fn get_color(&self, p: DVec3) -> f64 {
        (**self).get_color(p)
    }
}

impl<T: Heightfield + ?Sized> Heightfield for Arc<T> {
    fn get(&self, p: DVec3) -> f64 {
        (**self).get(p)
    }

    fn get_color(&self, p: DVec3) -> f64 {
        (**self).get_color(p)
    }
}

/// Heightfield returning the same values everywhere.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lowpoly_mesh::{ConstantField, Heightfield};
///
/// let flat = ConstantField::new(1.0, 0.5);
/// assert_eq!(flat.get(DVec3::X), 1.0);
/// assert_eq!(flat.get_color(DVec3::Y), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantField {
    /// Value returned by `get`
    pub value: f64,
    /// Value returned by `get_color`
    pub color: f64,
}

impl ConstantField {
    /// Creates a constant heightfield.
    pub fn new(value: f64, color: f64) -> Self {
        Self { value, color }
    }
}

impl Default for ConstantField {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl Heightfield for ConstantField {
    fn get(&self, _p: DVec3) -> f64 {
        self.value
    }

    fn get_color(&self, _p: DVec3) -> f64 {
        self.color
    }
}

/// Heightfield built from two closures.
///
/// Used for composed fields, e.g. terrain flattened along a road.
pub struct FnField<G, C> {
    get: G,
    color: C,
}

impl<G, C> FnField<G, C>
where
    G: Fn(DVec3) -> f64,
    C: Fn(DVec3) -> f64,
{
    /// Creates a heightfield from a height closure and a colour closure.
    pub fn new(get: G, color: C) -> Self {
        Self { get, color }
    }
}

impl<G, C> Heightfield for FnField<G, C>
where
    G: Fn(DVec3) -> f64,
    C: Fn(DVec3) -> f64,
{
    fn get(&self, p: DVec3) -> f64 {
        (self.get)(p)
    }

    fn get_color(&self, p: DVec3) -> f64 {
        (self.color)(p)
    }
}
