//! # Low-Poly Planet
//!
//! Spherical bodies and the objects living on them.
//!
//! ## Architecture
//!
//! ```text
//! PlanetOptions ─merge─▶ PlanetPreset ─▶ Planet
//!                                         ├─ terrain / water meshes (lowpoly-mesh)
//!                                         └─ PlacementEngine ─▶ (position, orientation) per object
//! ```
//!
//! [`PlacementEngine`] is usable on its own with any
//! [`Heightfield`](lowpoly_mesh::Heightfield); [`Planet`] wires it to a
//! generated terrain.

pub mod error;
pub mod placement;
pub mod planet;
pub mod preset;

pub use error::{PlanetError, Result};
pub use placement::{shortest_arc, HeightPolicy, ObjectId, PlacementEngine, PlacementState};
pub use planet::{BodySurface, Cloud, Planet, PlanetFrame, ScatteredItem};
pub use preset::{
    ModelCondition, PlanetOptions, PlanetPreset, PositionCondition, VegetationSettings,
    WaterSettings, PRESET_NAMES,
};
