//! # Surface Placement
//!
//! Keeps objects standing on a spherical body: an object's local +Y always
//! points away from the body's centre, while its own yaw and pitch persist
//! across moves.
//!
//! Orientation is accumulated, not recomputed. Every position update
//! left-multiplies the shortest-arc rotation from the old direction to the
//! new one into a per-object accumulator. Small steps therefore produce
//! small, continuous changes, and the yaw/pitch spin is layered on top:
//!
//! ```text
//! orientation = accumulator * rot_y(yaw) * rot_x(pitch)
//! ```
//!
//! When the old and new directions are exactly opposite, the shortest arc
//! is a half turn about an axis orthogonal to the old direction (glam's
//! deterministic choice). Zero-length positions have no direction and
//! contribute an identity rotation.

use glam::{DQuat, DVec3};
use lowpoly_mesh::Heightfield;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace};

/// Stable identifier of a placed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happens to an object's distance from the centre on update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HeightPolicy {
    /// Use the requested position as given.
    Keep,
    /// Sit at `surface.get(direction) + offset` from the centre.
    AboveSurface(f64),
}

/// Position and orientation of one placed object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementState {
    /// Position in the body's frame
    pub position: DVec3,
    /// Surface rotation accumulated over every update
    pub accumulator: DQuat,
    /// Local spin about +Y, radians
    pub yaw: f64,
    /// Local tilt about +X, radians
    pub pitch: f64,
    /// Height rule applied on each update
    pub height: HeightPolicy,
    /// `accumulator * rot_y(yaw) * rot_x(pitch)`
    pub orientation: DQuat,
}

impl PlacementState {
    fn new(height: HeightPolicy, yaw: f64, pitch: f64) -> Self {
        Self {
            position: DVec3::Y,
            accumulator: DQuat::IDENTITY,
            yaw,
            pitch,
            height,
            orientation: DQuat::IDENTITY,
        }
    }

    /// Moves to `requested` under the height policy, accumulating the
    /// shortest-arc rotation from the previous direction.
    fn settle<H: Heightfield + ?Sized>(
        &mut self,
        surface: &H,
        requested: DVec3,
        bound: &mut dyn FnMut(DVec3) -> DVec3,
    ) {
        let mut position = requested;
        if let HeightPolicy::AboveSurface(offset) = self.height {
            let direction = requested.normalize_or_zero();
            if direction != DVec3::ZERO {
                position = direction * (surface.get(direction) + offset);
            }
        }
        position = bound(position);

        let step = shortest_arc(self.position, position);
        self.accumulator = (step * self.accumulator).normalize();
        self.position = position;
        self.refresh_orientation();
    }

    fn refresh_orientation(&mut self) {
        let spin = DQuat::from_rotation_y(self.yaw) * DQuat::from_rotation_x(self.pitch);
        self.orientation = self.accumulator * spin;
    }
}

/// Owns the placement state of every object on one body.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lowpoly_mesh::ConstantField;
/// use lowpoly_planet::{HeightPolicy, PlacementEngine};
///
/// let mut engine = PlacementEngine::new(ConstantField::new(1.0, 0.0));
/// let id = engine.add(DVec3::X, HeightPolicy::AboveSurface(0.1), 0.0, 0.0);
///
/// let (position, orientation) = engine.transform(id).unwrap();
/// assert!((position - DVec3::new(1.1, 0.0, 0.0)).length() < 1e-12);
/// // local up now points along +X
/// assert!((orientation * DVec3::Y - DVec3::X).length() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct PlacementEngine<H> {
    surface: H,
    objects: BTreeMap<ObjectId, PlacementState>,
    body_orientation: DQuat,
    next_id: u64,
}

impl<H: Heightfield> PlacementEngine<H> {
    /// Creates an engine sampling heights from `surface`.
    pub fn new(surface: H) -> Self {
        Self {
            surface,
            objects: BTreeMap::new(),
            body_orientation: DQuat::IDENTITY,
            next_id: 0,
        }
    }

    /// Returns the heightfield used for [`HeightPolicy::AboveSurface`].
    pub fn surface(&self) -> &H {
        &self.surface
    }

    /// Places a new object and returns its id.
    pub fn add(
        &mut self,
        direction: DVec3,
        height: HeightPolicy,
        yaw: f64,
        pitch: f64,
    ) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.place(id, direction, height, yaw, pitch);
        id
    }

    /// Attaches `id` to the body at `direction`.
    ///
    /// The object starts at +Y with identity orientation, is settled there
    /// under `height`, then moved to `direction`. Placing an id that is
    /// already attached starts it over.
    pub fn place(
        &mut self,
        id: ObjectId,
        direction: DVec3,
        height: HeightPolicy,
        yaw: f64,
        pitch: f64,
    ) -> &PlacementState {
        let mut state = PlacementState::new(height, yaw, pitch);
        state.settle(&self.surface, DVec3::Y, &mut |p| p);
        state.settle(&self.surface, direction, &mut |p| p);
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        trace!(%id, position = ?state.position, "object placed");

        match self.objects.entry(id) {
            Entry::Occupied(mut entry) => {
                debug!(%id, "re-placing object");
                entry.insert(state);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(state),
        }
    }

    /// Moves `id` to `position`, turning it to keep standing on the surface.
    ///
    /// With `rotate_body` the body's orientation becomes the inverse of the
    /// object's accumulated rotation, so a followed object appears fixed
    /// while the world turns under it. Returns `None` for unplaced ids.
    pub fn update_position(
        &mut self,
        id: ObjectId,
        position: DVec3,
        rotate_body: bool,
    ) -> Option<&PlacementState> {
        self.update_with(id, position, rotate_body, &mut |p| p)
    }

    /// Like [`update_position`](Self::update_position), letting `bound`
    /// adjust the settled position before the rotation is derived.
    pub fn update_position_bounded(
        &mut self,
        id: ObjectId,
        position: DVec3,
        rotate_body: bool,
        mut bound: impl FnMut(DVec3) -> DVec3,
    ) -> Option<&PlacementState> {
        self.update_with(id, position, rotate_body, &mut bound)
    }

    /// Moves `id` by a displacement expressed in its own frame.
    ///
    /// `+Z` is the object's forward after yaw and pitch.
    pub fn move_local(
        &mut self,
        id: ObjectId,
        displacement: DVec3,
        rotate_body: bool,
    ) -> Option<&PlacementState> {
        self.move_local_bounded(id, displacement, rotate_body, |p| p)
    }

    /// Like [`move_local`](Self::move_local) with a position bound.
    pub fn move_local_bounded(
        &mut self,
        id: ObjectId,
        displacement: DVec3,
        rotate_body: bool,
        mut bound: impl FnMut(DVec3) -> DVec3,
    ) -> Option<&PlacementState> {
        let Some(state) = self.objects.get(&id) else {
            debug!(%id, "move on unplaced object ignored");
            return None;
        };
        let target = state.position + state.orientation * displacement;
        self.update_with(id, target, rotate_body, &mut bound)
    }

    /// Changes the local spin of `id` without moving it.
    pub fn set_spin(&mut self, id: ObjectId, yaw: f64, pitch: f64) -> Option<&PlacementState> {
        let state = self.objects.get_mut(&id)?;
        state.yaw = yaw;
        state.pitch = pitch;
        state.refresh_orientation();
        Some(state)
    }

    /// Detaches `id`, returning its last state.
    pub fn remove(&mut self, id: ObjectId) -> Option<PlacementState> {
        self.objects.remove(&id)
    }

    /// Returns the state of `id`.
    pub fn state(&self, id: ObjectId) -> Option<&PlacementState> {
        self.objects.get(&id)
    }

    /// Returns `(position, orientation)` of `id` for the renderer.
    pub fn transform(&self, id: ObjectId) -> Option<(DVec3, DQuat)> {
        self.objects.get(&id).map(|s| (s.position, s.orientation))
    }

    /// Orientation of the body itself, changed by `rotate_body` updates.
    pub fn body_orientation(&self) -> DQuat {
        self.body_orientation
    }

    /// Placed ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.keys().copied()
    }

    /// Number of placed objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn update_with(
        &mut self,
        id: ObjectId,
        requested: DVec3,
        rotate_body: bool,
        bound: &mut dyn FnMut(DVec3) -> DVec3,
    ) -> Option<&PlacementState> {
        let Some(state) = self.objects.get_mut(&id) else {
            debug!(%id, "update on unplaced object ignored");
            return None;
        };
        state.settle(&self.surface, requested, bound);
        if rotate_body {
            self.body_orientation = state.accumulator.conjugate();
        }
        trace!(%id, position = ?state.position, "object settled");
        Some(state)
    }
}

/// Shortest rotation turning the direction of `from` into that of `to`.
///
/// Identity when either vector has no direction.
pub fn shortest_arc(from: DVec3, to: DVec3) -> DQuat {
    let (from, to) = (from.normalize_or_zero(), to.normalize_or_zero());
    if from == DVec3::ZERO || to == DVec3::ZERO {
        return DQuat::IDENTITY;
    }
    DQuat::from_rotation_arc(from, to)
}
