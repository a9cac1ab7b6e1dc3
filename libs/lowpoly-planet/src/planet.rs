//! # Planet
//!
//! A spherical body assembled from a [`PlanetPreset`]: noisy terrain, an
//! optional water sphere with a morph target, scattered vegetation and
//! drifting clouds, all kept on the surface by a [`PlacementEngine`].
//!
//! Randomness comes from a seeded PCG stream, so a `(options, seed)` pair
//! always produces the same planet.

use crate::error::Result;
use crate::placement::{HeightPolicy, ObjectId, PlacementEngine};
use crate::preset::{PlanetOptions, PlanetPreset, PositionCondition, PRESET_NAMES};
use config::constants::{
    BODY_SPIN_FACTOR, CLOUD_ALTITUDE, CLOUD_MAX_PUFFS, CLOUD_PUFF_FLATTEN, CLOUD_PUFF_MIN_SCALE,
    CLOUD_PUFF_NOISE_MIN, CLOUD_PUFF_SCALE_RANGE, CLOUD_STEP, CLOUD_STEP_JITTER, CLOUD_YAW_RANGE,
    DEFAULT_RADIUS, MAX_ITEM_PITCH, RANDOM_POSITION_TRIES, WATER_MORPH_FREQUENCY,
};
use glam::DVec3;
use lowpoly_mesh::math::with_length;
use lowpoly_mesh::{
    build_mesh, color_from_hex, ColorStops, Heightfield, Mesh, NoiseField, NoiseSettings, Shape,
    Surface,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::f64::consts::TAU;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Terrain heightfield expressed as distance from the centre.
///
/// The terrain mesh samples its heightfield at points on the radius-sized
/// sphere and multiplies by the result, so the surface distance along a
/// direction `d` is `radius * field.get(d * radius)`.
#[derive(Clone)]
pub struct BodySurface {
    field: Arc<dyn Heightfield>,
    radius: f64,
}

impl BodySurface {
    /// Wraps a terrain heightfield for a body of `radius`.
    pub fn new(field: Arc<dyn Heightfield>, radius: f64) -> Self {
        Self { field, radius }
    }

    fn on_sphere(&self, p: DVec3) -> DVec3 {
        p.normalize_or_zero() * self.radius
    }
}

impl Heightfield for BodySurface {
    fn get(&self, p: DVec3) -> f64 {
        self.radius * self.field.get(self.on_sphere(p))
    }

    fn get_color(&self, p: DVec3) -> f64 {
        self.field.get_color(self.on_sphere(p))
    }
}

impl fmt::Debug for BodySurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodySurface")
            .field("radius", &self.radius)
            .finish_non_exhaustive()
    }
}

/// A scattered surface object.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatteredItem {
    pub id: ObjectId,
    /// Model name from the preset
    pub model: String,
    /// Uniform scale for the renderer
    pub scale: f64,
}

/// A cloud: a merged puff mesh riding above the surface.
#[derive(Debug, Clone)]
pub struct Cloud {
    pub id: ObjectId,
    pub mesh: Mesh,
}

/// Per-frame values for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetFrame {
    /// Blend weight towards the water morph target, in [0, 1]
    pub water_morph_influence: Option<f64>,
    /// Body rotation about +Y, radians
    pub body_spin: f64,
}

/// A generated planet.
pub struct Planet {
    name: String,
    preset: PlanetPreset,
    field: Arc<dyn Heightfield>,
    terrain: Mesh,
    water: Option<Mesh>,
    water_morph: Option<Mesh>,
    placement: PlacementEngine<BodySurface>,
    vegetation: Vec<ScatteredItem>,
    clouds: Vec<Cloud>,
    rng: Pcg64,
}

impl Planet {
    /// Generates a planet from `options`, picking a random built-in preset
    /// when none is named.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lowpoly_planet::{Planet, PlanetOptions};
    ///
    /// let options = PlanetOptions { subdivisions: Some(2), ..PlanetOptions::preset("islands") };
    /// let planet = Planet::new(&options, 7).unwrap();
    /// assert_eq!(planet.terrain().triangle_count(), 20 * 16);
    /// ```
    pub fn new(options: &PlanetOptions, seed: u64) -> Result<Self> {
        let mut rng = Pcg64::seed_from_u64(seed);
        let (name, mut preset) = resolve(options, &mut rng)?;
        if options.seed.is_none() && options.noise.is_none() {
            preset.noise.seed = rng.random();
        }
        let field: Arc<dyn Heightfield> = Arc::new(NoiseField::new(preset.noise));
        Self::assemble(name, preset, field, rng)
    }

    /// Like [`Planet::new`], with a caller-supplied terrain heightfield in
    /// place of the preset's noise.
    pub fn with_heightfield(
        options: &PlanetOptions,
        seed: u64,
        field: Arc<dyn Heightfield>,
    ) -> Result<Self> {
        let mut rng = Pcg64::seed_from_u64(seed);
        let (name, preset) = resolve(options, &mut rng)?;
        Self::assemble(name, preset, field, rng)
    }

    fn assemble(
        name: String,
        mut preset: PlanetPreset,
        field: Arc<dyn Heightfield>,
        mut rng: Pcg64,
    ) -> Result<Self> {
        if !(preset.radius > 0.0 && preset.radius.is_finite()) {
            warn!(radius = preset.radius, "invalid planet radius replaced by default");
            preset.radius = DEFAULT_RADIUS;
        }
        let radius = preset.radius;

        let terrain = build_mesh(
            &Shape::Sphere { radius },
            preset.subdivisions,
            Some(Surface::new(&*field, Some(&preset.gradient))),
        );
        terrain.validate()?;

        let (water, water_morph) = if preset.water.enabled {
            let settings = &preset.water;
            let sphere = Shape::Sphere {
                radius: radius * settings.height,
            };
            let subdivisions = preset.subdivisions.saturating_sub(1);

            let ripples = NoiseField::new(settings.noise.with_seed(rng.random()));
            let water = build_mesh(
                &sphere,
                subdivisions,
                Some(Surface::new(&ripples, Some(&settings.gradient))),
            );
            let morph = settings.morph.then(|| {
                let target = settings.morph_noise.unwrap_or(settings.noise);
                let ripples = NoiseField::new(target.with_seed(rng.random()));
                build_mesh(&sphere, subdivisions, Some(Surface::new(&ripples, None)))
            });
            (Some(water), morph)
        } else {
            (None, None)
        };

        let placement = PlacementEngine::new(BodySurface::new(Arc::clone(&field), radius));
        let mut planet = Self {
            name,
            preset,
            field,
            terrain,
            water,
            water_morph,
            placement,
            vegetation: Vec::new(),
            clouds: Vec::new(),
            rng,
        };
        planet.grow_vegetation();

        debug!(
            preset = %planet.name,
            triangles = planet.terrain.triangle_count(),
            vegetation = planet.vegetation.len(),
            "planet generated"
        );
        Ok(planet)
    }

    fn grow_vegetation(&mut self) {
        let settings = self.preset.vegetation.clone();
        if !settings.enabled {
            return;
        }
        for model in &settings.models {
            let condition = settings.condition_for(model);
            let ids = self.scatter(settings.item_count, condition, settings.above_ground);
            self.vegetation.extend(ids.into_iter().map(|id| ScatteredItem {
                id,
                model: model.clone(),
                scale: settings.scale,
            }));
        }
    }

    /// Name of the preset this planet was built from.
    pub fn preset_name(&self) -> &str {
        &self.name
    }

    /// The resolved preset, overrides included.
    pub fn preset(&self) -> &PlanetPreset {
        &self.preset
    }

    /// Planet radius before terrain deformation.
    pub fn radius(&self) -> f64 {
        self.preset.radius
    }

    /// Terrain heightfield.
    pub fn heightfield(&self) -> &dyn Heightfield {
        &*self.field
    }

    /// Coloured terrain sphere.
    pub fn terrain(&self) -> &Mesh {
        &self.terrain
    }

    /// Coloured water sphere, when enabled.
    pub fn water(&self) -> Option<&Mesh> {
        self.water.as_ref()
    }

    /// Uncoloured water morph target with the same topology as [`water`](Self::water).
    pub fn water_morph(&self) -> Option<&Mesh> {
        self.water_morph.as_ref()
    }

    /// Scattered vegetation.
    pub fn vegetation(&self) -> &[ScatteredItem] {
        &self.vegetation
    }

    /// Clouds created by [`make_clouds`](Self::make_clouds).
    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    /// Placement state of every object on this planet.
    pub fn placement(&self) -> &PlacementEngine<BodySurface> {
        &self.placement
    }

    /// Mutable placement, for moving caller-owned objects.
    pub fn placement_mut(&mut self) -> &mut PlacementEngine<BodySurface> {
        &mut self.placement
    }

    /// Places a caller-owned object. `above_ground = None` keeps the
    /// requested distance from the centre.
    pub fn add_object(
        &mut self,
        direction: DVec3,
        above_ground: Option<f64>,
        yaw: f64,
        pitch: f64,
    ) -> ObjectId {
        let height = above_ground.map_or(HeightPolicy::Keep, HeightPolicy::AboveSurface);
        self.placement.add(direction, height, yaw, pitch)
    }

    /// Detaches an object, dropping it from the vegetation and cloud lists.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        self.vegetation.retain(|item| item.id != id);
        self.clouds.retain(|cloud| cloud.id != id);
        self.placement.remove(id).is_some()
    }

    /// Draws random points on the radius sphere until `accept` takes one.
    ///
    /// `accept` receives the point, the terrain height multiplier and the
    /// colour value there. Returns `None` after `max_tries` rejections.
    pub fn random_surface_point(
        &mut self,
        max_tries: usize,
        mut accept: impl FnMut(DVec3, f64, f64) -> bool,
    ) -> Option<DVec3> {
        for _ in 0..max_tries {
            let Some(point) = with_length(self.random_cube_vector(), self.preset.radius) else {
                continue;
            };
            if accept(point, self.field.get(point), self.field.get_color(point)) {
                return Some(point);
            }
        }
        None
    }

    /// Places up to `count` objects where `condition` holds.
    ///
    /// Each object gets a random yaw and a slight random pitch. Points that
    /// cannot be found within the retry budget are skipped.
    pub fn scatter(
        &mut self,
        count: u32,
        condition: &PositionCondition,
        above_ground: f64,
    ) -> Vec<ObjectId> {
        let mut rolls = Pcg64::seed_from_u64(self.rng.random());
        let mut placed = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let Some(point) = self.random_surface_point(RANDOM_POSITION_TRIES, |_, height, color| {
                condition.accepts(height, color, rolls.random())
            }) else {
                continue;
            };
            let yaw = self.rng.random::<f64>() * TAU;
            let pitch = (self.rng.random::<f64>() * 2.0 - 1.0) * MAX_ITEM_PITCH;
            let height = HeightPolicy::AboveSurface(above_ground);
            placed.push(self.placement.add(point, height, yaw, pitch));
        }
        debug!(requested = count, placed = placed.len(), "scattered objects");
        placed
    }

    /// Adds `count` clouds above the surface.
    pub fn make_clouds(&mut self, count: usize) -> &[Cloud] {
        for _ in 0..count {
            let direction = self.random_cube_vector();
            let mesh = self.cloud_mesh();
            let yaw = self.rng.random::<f64>() * CLOUD_YAW_RANGE;
            let id = self
                .placement
                .add(direction, HeightPolicy::AboveSurface(CLOUD_ALTITUDE), yaw, 0.0);
            self.clouds.push(Cloud { id, mesh });
        }
        &self.clouds
    }

    /// Drifts every cloud forward along its own heading.
    pub fn move_clouds(&mut self, speed: f64) {
        let step = speed * (CLOUD_STEP + self.rng.random::<f64>() * CLOUD_STEP_JITTER);
        let forward = DVec3::new(0.0, 0.0, step);
        for cloud in &self.clouds {
            self.placement.move_local(cloud.id, forward, false);
        }
    }

    /// Advances per-frame state and returns the values the renderer needs.
    pub fn animate(&mut self, time: f64) -> PlanetFrame {
        if !self.clouds.is_empty() {
            self.move_clouds(1.0);
        }
        PlanetFrame {
            water_morph_influence: self
                .water_morph
                .as_ref()
                .map(|_| ((time * WATER_MORPH_FREQUENCY).sin() + 1.0) / 2.0),
            body_spin: time * self.preset.rotate * BODY_SPIN_FACTOR,
        }
    }

    fn random_cube_vector(&mut self) -> DVec3 {
        DVec3::new(
            self.rng.random::<f64>() - 0.5,
            self.rng.random::<f64>() - 0.5,
            self.rng.random::<f64>() - 0.5,
        )
    }

    /// One cloud: flattened noisy spheres merged around the first puff.
    fn cloud_mesh(&mut self) -> Mesh {
        let gradient = ColorStops::between(&[color_from_hex(0x999999), color_from_hex(0xffffff)]);
        let scale = CLOUD_PUFF_MIN_SCALE + self.rng.random::<f64>() * CLOUD_PUFF_SCALE_RANGE;
        let puffs = self.rng.random_range(1..=CLOUD_MAX_PUFFS);

        let mut cloud = Mesh::new();
        for i in 0..puffs {
            let noise = NoiseField::new(NoiseSettings {
                seed: self.rng.random(),
                min: CLOUD_PUFF_NOISE_MIN,
                ..NoiseSettings::default()
            });
            let mut puff = build_mesh(
                &Shape::Sphere { radius: 1.0 },
                1,
                Some(Surface::new(&noise, Some(&gradient))),
            );
            let stretch_x = self.rng.random::<f64>() * 0.6 + 0.6;
            let stretch_z = self.rng.random::<f64>() * 0.6 + 0.6;
            puff.scale(DVec3::new(
                scale * stretch_x,
                CLOUD_PUFF_FLATTEN * scale,
                scale * stretch_z,
            ));

            if i == 0 {
                cloud = puff;
            } else {
                let x = (self.rng.random::<f64>() - 0.5) * scale * 2.0;
                let z = (self.rng.random::<f64>() - 0.5) * scale * 2.0;
                puff.translate(DVec3::new(x, 0.0, z));
                cloud.merge(&puff);
            }
        }
        cloud
    }
}

fn resolve(options: &PlanetOptions, rng: &mut Pcg64) -> Result<(String, PlanetPreset)> {
    let name = match &options.preset {
        Some(name) => name.clone(),
        None => PRESET_NAMES[rng.random_range(0..PRESET_NAMES.len())].to_owned(),
    };
    let preset = options.merged_over(&PlanetPreset::named(&name)?);
    Ok((name, preset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lowpoly_mesh::ConstantField;

    fn small(preset: &str) -> PlanetOptions {
        PlanetOptions {
            subdivisions: Some(2),
            ..PlanetOptions::preset(preset)
        }
    }

    #[test]
    fn test_body_surface_scales_by_radius() {
        let surface = BodySurface::new(Arc::new(ConstantField::new(0.9, 0.4)), 3.0);
        assert_relative_eq!(surface.get(DVec3::new(0.0, 5.0, 0.0)), 2.7);
        assert_relative_eq!(surface.get_color(DVec3::X), 0.4);
    }

    #[test]
    fn test_water_sphere_one_level_coarser() {
        let planet = Planet::new(&small("forest"), 1).unwrap();
        let water = planet.water().unwrap();
        assert_eq!(water.triangle_count(), 20 * 4);
        assert_eq!(planet.water_morph().unwrap().vertex_count(), water.vertex_count());
        assert!(planet.water_morph().unwrap().colors().is_none());
        assert!(water.colors().is_some());
    }

    #[test]
    fn test_no_morph_without_flag() {
        let mut planet = Planet::new(&small("snowforest"), 1).unwrap();
        assert!(planet.water_morph().is_none());
        assert_eq!(planet.animate(1.0).water_morph_influence, None);
    }

    #[test]
    fn test_vegetation_respects_condition() {
        let planet = Planet::new(&small("forest"), 5).unwrap();
        assert!(!planet.vegetation().is_empty());
        for item in planet.vegetation() {
            let (position, _) = planet.placement().transform(item.id).unwrap();
            let height = planet.heightfield().get(position.normalize() * planet.radius());
            assert!(height > 0.8);
        }
    }

    #[test]
    fn test_random_surface_point_gives_up() {
        let mut planet = Planet::new(&small("desert"), 2).unwrap();
        assert!(planet.random_surface_point(10, |_, _, _| false).is_none());
        let point = planet.random_surface_point(10, |_, _, _| true).unwrap();
        assert_relative_eq!(point.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cloud_mesh_is_valid() {
        let mut planet = Planet::new(&small("islands"), 3).unwrap();
        planet.make_clouds(3);
        assert_eq!(planet.clouds().len(), 3);
        for cloud in planet.clouds() {
            cloud.mesh.validate().unwrap();
            assert!(cloud.mesh.colors().is_some());
            assert_eq!(cloud.mesh.triangle_count() % 80, 0);
        }
    }

    #[test]
    fn test_remove_object() {
        let mut planet = Planet::new(&small("islands"), 3).unwrap();
        planet.make_clouds(1);
        let id = planet.clouds()[0].id;
        assert!(planet.remove_object(id));
        assert!(planet.clouds().is_empty());
        assert!(!planet.remove_object(id));
    }
}
