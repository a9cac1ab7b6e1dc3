//! # Configuration Constants
//!
//! Centralized constants for the low-poly pipeline. Geometry tolerances,
//! shape defaults and surface placement values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Zero-length tolerance for vector operations
//! - **Shapes**: Defaults applied when a builder option is omitted
//! - **Limits**: Clamping bounds for shape parameters
//! - **Placement**: Surface placement and planet animation values

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Vectors shorter than this are treated as zero length.
///
/// Magnitude-set operations skip such vertices instead of dividing by zero.
pub const LENGTH_EPSILON: f64 = 1e-12;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default radius for spheres, icosahedra and cylinders.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default subdivision count when a builder gets none.
pub const DEFAULT_SUBDIVISIONS: u32 = 0;

/// Default plane width and length in world units.
pub const DEFAULT_PLANE_EXTENT: f64 = 1.0;

/// Default plane height (Y of the flat grid).
pub const DEFAULT_PLANE_HEIGHT: f64 = 0.0;

/// Default number of plane cells along each axis.
pub const DEFAULT_PLANE_CELLS: u32 = 1;

/// Default height of cylinders and pyramids.
pub const DEFAULT_SHAPE_HEIGHT: f64 = 1.0;

/// Default number of vertical bands on a cylinder wall.
pub const DEFAULT_CYLINDER_ROWS: u32 = 1;

/// Small angular offset added to every radial builder angle.
///
/// Keeps the first radial vertex off the exact +Z axis so that seams never
/// land on a degenerate heightfield sample.
pub const ANGLE_OFFSET: f64 = 0.0001;

/// Default colour (RGB in [0, 1]) for vertices that never received one.
pub const DEFAULT_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of radial sides for cylinders and pyramids.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SIDES;
///
/// let requested = 2;
/// assert_eq!(requested.max(MIN_SIDES), 3);
/// ```
pub const MIN_SIDES: u32 = 3;

/// Maximum number of subdivision passes a single build applies.
///
/// Each pass multiplies the triangle count by four; 20 triangles at level
/// 10 already yield about 21 million triangles.
pub const MAX_SUBDIVISIONS: u32 = 10;

// =============================================================================
// PLACEMENT CONSTANTS
// =============================================================================

/// Number of random directions tried before giving up on a surface point.
pub const RANDOM_POSITION_TRIES: usize = 100;

/// Height of clouds above the terrain surface.
pub const CLOUD_ALTITUDE: f64 = 0.25;

/// Largest absolute random pitch (radians) given to scattered items.
pub const MAX_ITEM_PITCH: f64 = 0.05;

/// Angular frequency of the water morph oscillation.
pub const WATER_MORPH_FREQUENCY: f64 = 2.0;

/// Factor applied to `time * rotate` when spinning a planet.
pub const BODY_SPIN_FACTOR: f64 = 0.1;

/// Base forward step of a drifting cloud per frame.
pub const CLOUD_STEP: f64 = 0.0003;

/// Random extra forward step of a drifting cloud per frame.
pub const CLOUD_STEP_JITTER: f64 = 0.0002;

/// Upper bound (exclusive) of a cloud's random initial yaw.
pub const CLOUD_YAW_RANGE: f64 = 7.0;

// =============================================================================
// CLOUD SHAPE CONSTANTS
// =============================================================================

/// Most puffs merged into one cloud.
pub const CLOUD_MAX_PUFFS: u32 = 7;

/// Smallest horizontal puff scale.
pub const CLOUD_PUFF_MIN_SCALE: f64 = 0.02;

/// Random extra horizontal puff scale.
pub const CLOUD_PUFF_SCALE_RANGE: f64 = 0.15;

/// Vertical squash of a puff relative to its horizontal scale.
pub const CLOUD_PUFF_FLATTEN: f64 = 0.3;

/// Lowest noise multiplier on a puff surface.
pub const CLOUD_PUFF_NOISE_MIN: f64 = 0.5;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a radial side count to at least [`MIN_SIDES`].
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_sides;
///
/// assert_eq!(clamp_sides(0), 3);
/// assert_eq!(clamp_sides(8), 8);
/// ```
#[inline]
pub fn clamp_sides(sides: u32) -> u32 {
    sides.max(MIN_SIDES)
}

/// Clamps a subdivision count to at most [`MAX_SUBDIVISIONS`].
#[inline]
pub fn clamp_subdivisions(subdivisions: u32) -> u32 {
    subdivisions.min(MAX_SUBDIVISIONS)
}

/// Number of plane cells that fit `extent` at roughly `cell_size` each.
///
/// Rounds to the nearest whole cell and never returns fewer than one.
///
/// # Example
///
/// ```rust
/// use config::constants::cells_for_size;
///
/// assert_eq!(cells_for_size(10.0, 2.0), 5);
/// assert_eq!(cells_for_size(1.0, 5.0), 1);
/// ```
pub fn cells_for_size(extent: f64, cell_size: f64) -> u32 {
    if cell_size <= 0.0 || !cell_size.is_finite() {
        return DEFAULT_PLANE_CELLS;
    }
    ((extent / cell_size).round() as u32).max(1)
}
