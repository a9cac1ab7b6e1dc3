//! # Planet Presets
//!
//! Named, immutable planet recipes and the caller override record.
//!
//! [`PlanetPreset::named`] builds a fresh value on every call; callers
//! customise it through [`PlanetOptions::merged_over`], which returns a new
//! preset and leaves both inputs untouched.

use crate::error::{PlanetError, Result};
use lowpoly_mesh::{color_from_hex, ColorStop, ColorStops, NoiseSettings};
use serde::{Deserialize, Serialize};

/// Built-in preset names.
pub const PRESET_NAMES: [&str; 6] = [
    "forest",
    "snowforest",
    "autumnforest",
    "mountainforest",
    "desert",
    "islands",
];

/// Where a scattered object may stand.
///
/// All bounds are optional. `color_falloff` makes acceptance random:
/// a sample passes with probability `(1 - color) ^ color_falloff`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionCondition {
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
    pub min_color: Option<f64>,
    pub max_color: Option<f64>,
    pub color_falloff: Option<f64>,
}

impl PositionCondition {
    /// Tests a surface sample. `roll` is a uniform draw in [0, 1).
    pub fn accepts(&self, height: f64, color: f64, roll: f64) -> bool {
        let above = |bound: Option<f64>, v: f64| bound.map_or(true, |b| v > b);
        let below = |bound: Option<f64>, v: f64| bound.map_or(true, |b| v < b);
        above(self.min_height, height)
            && below(self.max_height, height)
            && above(self.min_color, color)
            && below(self.max_color, color)
            && self
                .color_falloff
                .map_or(true, |k| roll < (1.0 - color).max(0.0).powf(k))
    }
}

/// Water sphere settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterSettings {
    pub enabled: bool,
    /// Water radius as a fraction of the planet radius
    pub height: f64,
    #[serde(alias = "noiseSettings")]
    pub noise: NoiseSettings,
    #[serde(alias = "gradientSettings")]
    pub gradient: ColorStops,
    /// Build a second, uncoloured sphere to blend towards
    pub morph: bool,
    #[serde(default, alias = "morphNoise")]
    pub morph_noise: Option<NoiseSettings>,
}

/// Placement rule for every model whose name contains `pattern`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCondition {
    pub pattern: String,
    pub condition: PositionCondition,
}

/// Scattered surface objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VegetationSettings {
    pub enabled: bool,
    /// Model names handed to the renderer, one scatter pass each
    pub models: Vec<String>,
    /// Objects per model
    #[serde(alias = "itemCount")]
    pub item_count: u32,
    /// Uniform object scale
    pub scale: f64,
    /// Offset from the surface, usually slightly negative to sink roots
    #[serde(alias = "moveY")]
    pub above_ground: f64,
    #[serde(default)]
    pub condition: PositionCondition,
    /// Name-matched overrides of `condition`, first match wins
    #[serde(default, alias = "modelConditions")]
    pub model_conditions: Vec<ModelCondition>,
}

impl VegetationSettings {
    /// Condition used when scattering `model`.
    pub fn condition_for(&self, model: &str) -> &PositionCondition {
        self.model_conditions
            .iter()
            .find(|rule| model.contains(&rule.pattern))
            .map_or(&self.condition, |rule| &rule.condition)
    }
}

/// A complete planet recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPreset {
    #[serde(alias = "subs")]
    pub subdivisions: u32,
    pub radius: f64,
    #[serde(alias = "noiseSettings")]
    pub noise: NoiseSettings,
    #[serde(alias = "gradientSettings")]
    pub gradient: ColorStops,
    pub water: WaterSettings,
    pub vegetation: VegetationSettings,
    /// Spin speed used by `animate`
    #[serde(default)]
    pub rotate: f64,
}

impl PlanetPreset {
    /// Returns a fresh copy of the named built-in preset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lowpoly_planet::PlanetPreset;
    ///
    /// let desert = PlanetPreset::named("desert").unwrap();
    /// assert_eq!(desert.subdivisions, 5);
    /// assert!(PlanetPreset::named("jungle").is_err());
    /// ```
    pub fn named(name: &str) -> Result<Self> {
        match name {
            "forest" => Ok(forest()),
            "snowforest" => Ok(snow_forest()),
            "autumnforest" => Ok(autumn_forest()),
            "mountainforest" => Ok(mountain_forest()),
            "desert" => Ok(desert()),
            "islands" => Ok(islands()),
            _ => Err(PlanetError::unknown_preset(name)),
        }
    }

    /// Parses a preset from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Caller overrides applied on top of a preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetOptions {
    /// Preset name; a random built-in one when absent
    pub preset: Option<String>,
    #[serde(alias = "subs")]
    pub subdivisions: Option<u32>,
    pub radius: Option<f64>,
    #[serde(alias = "noiseSettings")]
    pub noise: Option<NoiseSettings>,
    #[serde(alias = "gradientSettings")]
    pub gradient: Option<ColorStops>,
    pub water: Option<WaterSettings>,
    pub vegetation: Option<VegetationSettings>,
    pub rotate: Option<f64>,
    /// Terrain noise seed
    pub seed: Option<u32>,
}

impl PlanetOptions {
    /// Options selecting a named preset.
    pub fn preset(name: impl Into<String>) -> Self {
        Self {
            preset: Some(name.into()),
            ..Self::default()
        }
    }

    /// Parses options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns a new preset with every set override applied.
    pub fn merged_over(&self, preset: &PlanetPreset) -> PlanetPreset {
        let mut noise = self.noise.unwrap_or(preset.noise);
        if let Some(seed) = self.seed {
            noise.seed = seed;
        }
        PlanetPreset {
            subdivisions: self.subdivisions.unwrap_or(preset.subdivisions),
            radius: self.radius.unwrap_or(preset.radius),
            noise,
            gradient: self.gradient.clone().unwrap_or_else(|| preset.gradient.clone()),
            water: self.water.clone().unwrap_or_else(|| preset.water.clone()),
            vegetation: self
                .vegetation
                .clone()
                .unwrap_or_else(|| preset.vegetation.clone()),
            rotate: self.rotate.unwrap_or(preset.rotate),
        }
    }
}

// =============================================================================
// BUILT-IN PRESETS
// =============================================================================

fn terrain_noise(octaves: u32, min: f64, max: f64, scale: f64, pow: f64) -> NoiseSettings {
    NoiseSettings {
        octaves,
        persistence: 0.5,
        scale,
        min,
        max,
        pow,
        ..NoiseSettings::default()
    }
}

fn ripple_noise(amplitude: f64) -> NoiseSettings {
    NoiseSettings {
        octaves: 2,
        persistence: 0.5,
        scale: 5.0,
        min: 1.0 - amplitude,
        max: 1.0 + amplitude,
        pow: 2.0,
        ..NoiseSettings::default()
    }
}

fn stops(stops: &[(f64, u32)]) -> ColorStops {
    ColorStops::new(stops.iter().map(|&(p, hex)| ColorStop::hex(p, hex)).collect())
}

fn water(height: f64, amplitude: f64, colors: [u32; 2], morph: bool) -> WaterSettings {
    WaterSettings {
        enabled: true,
        height,
        noise: ripple_noise(amplitude),
        gradient: ColorStops::between(&colors.map(color_from_hex)),
        morph,
        morph_noise: morph.then(|| ripple_noise(amplitude)),
    }
}

fn vegetation(
    models: &[&str],
    item_count: u32,
    scale: f64,
    condition: PositionCondition,
) -> VegetationSettings {
    VegetationSettings {
        enabled: true,
        models: models.iter().map(|m| (*m).to_owned()).collect(),
        item_count,
        scale,
        above_ground: -0.005,
        condition,
        model_conditions: Vec::new(),
    }
}

const DEEP_WATER: [u32; 2] = [0x000022, 0x4477ff];

fn forest() -> PlanetPreset {
    PlanetPreset {
        subdivisions: 5,
        radius: 1.0,
        noise: terrain_noise(4, 0.7, 0.95, 1.0, 1.0),
        gradient: stops(&[(0.0, 0x002200), (0.3, 0x006600), (0.8, 0x00aa44), (0.9, 0x006633)]),
        water: water(0.79, 0.005, DEEP_WATER, true),
        vegetation: vegetation(
            &[
                "plant1", "plant2", "plant3", "plant4", "grass1", "grass2", "grass3", "birch1",
                "birch2", "birch3", "birch4", "birch5", "birch_dead1", "birch_dead2", "bush1",
                "bush2", "bush_berries1", "bush_berries2", "pine1", "pine2", "pine3", "pine4",
                "treestump", "treestump_moss", "rock1", "rock2", "rock3", "rock_moss1",
                "rock_moss2", "commontree1", "commontree3", "commontree4", "commontree5",
                "commontree_dead1", "commontree_dead2", "willow1", "willow2", "willow3",
                "willow_dead1", "willow_dead2",
            ],
            10,
            0.05,
            PositionCondition {
                min_height: Some(0.8),
                ..Default::default()
            },
        ),
        rotate: 0.0,
    }
}

fn snow_forest() -> PlanetPreset {
    PlanetPreset {
        subdivisions: 5,
        radius: 1.0,
        noise: terrain_noise(3, 0.65, 0.9, 1.0, 1.5),
        gradient: stops(&[(0.3, 0xffffff)]),
        water: water(0.69, 0.005, [0x88aaff, 0xaaccff], false),
        vegetation: vegetation(
            &[
                "birch_dead_snow1", "birch_dead_snow2", "birch_dead_snow3", "birch_dead_snow4",
                "rock1", "rock2", "rock3", "rock4", "rock5", "rock6", "rock_snow1", "rock_snow2",
                "rock_snow3", "rock_snow4", "pine_snow1", "pine_snow2", "pine_snow3", "pine_snow4",
                "pine_snow5", "commontree_snow1", "commontree_snow2", "commontree_snow3",
                "commontree_snow4", "birch_snow1", "birch_snow2", "birch_snow3", "birch_snow4",
                "bush_snow1", "commontree_dead_snow1", "commontree_dead_snow2",
                "commontree_dead_snow3", "commontree_dead_snow4", "grass1", "grass2", "grass3",
                "treestump_snow", "willow_dead_snow1", "willow_dead_snow2", "willow_snow1",
                "willow_snow2", "willow_snow3", "woodlog_snow",
            ],
            13,
            0.05,
            PositionCondition {
                min_height: Some(0.7),
                ..Default::default()
            },
        ),
        rotate: 0.0,
    }
}

fn autumn_forest() -> PlanetPreset {
    PlanetPreset {
        subdivisions: 5,
        radius: 1.0,
        noise: terrain_noise(4, 0.7, 0.95, 1.0, 1.5),
        gradient: stops(&[
            (0.0, 0x334400),
            (0.3, 0x336600),
            (0.65, 0xbb5522),
            (0.8, 0xddaa44),
            (0.9, 0x882233),
        ]),
        water: water(0.75, 0.005, DEEP_WATER, true),
        vegetation: vegetation(
            &[
                "birch_autumn1", "birch_autumn2", "birch_autumn3", "birch_autumn4", "rock1",
                "rock2", "rock3", "rock4", "rock5", "rock_moss1", "rock_moss2", "pine_autumn1",
                "pine_autumn2", "pine_autumn3", "pine_autumn4", "pine_autumn5",
                "commontree_autumn1", "commontree_autumn2", "commontree_autumn3",
                "commontree_autumn4", "bush1", "bush_berries1", "bush_berries2",
                "commontree_dead1", "commontree_dead2", "commontree_dead3", "commontree_dead4",
                "grass1", "grass2", "grass3", "treestump", "willow_dead1", "willow_dead2",
                "willow_autumn1", "willow_autumn2", "willow_autumn3", "woodlog",
            ],
            11,
            0.05,
            PositionCondition {
                min_height: Some(0.75),
                ..Default::default()
            },
        ),
        rotate: 0.0,
    }
}

fn mountain_forest() -> PlanetPreset {
    let mut vegetation = vegetation(
        &[
            "plant1", "plant2", "plant3", "plant4", "grass1", "grass2", "grass3", "birch1",
            "birch2", "birch3", "birch4", "birch5", "birch_dead1", "birch_dead2", "bush1", "bush2",
            "bush_berries1", "bush_berries2", "pine1", "pine2", "pine3", "pine4", "rock1", "rock2",
            "rock3", "rock4", "rock5", "rock6", "rock_moss1", "rock_moss2", "rock_moss3",
            "rock_moss4", "commontree1", "commontree3", "commontree4", "commontree5",
            "commontree_dead1", "commontree_dead2", "pine_snow1", "pine_snow2", "pine_snow3",
            "pine_snow4", "commontree_snow1", "commontree_snow2", "commontree_snow3",
            "birch_snow1", "birch_snow2",
        ],
        10,
        0.04,
        PositionCondition {
            min_height: Some(0.75),
            max_height: Some(0.85),
            ..Default::default()
        },
    );
    // Snow models start higher and have no upper bound.
    vegetation.model_conditions.push(ModelCondition {
        pattern: "snow".to_owned(),
        condition: PositionCondition {
            min_height: Some(0.8),
            ..Default::default()
        },
    });
    PlanetPreset {
        subdivisions: 5,
        radius: 1.0,
        noise: terrain_noise(5, 0.7, 1.0, 0.7, 2.5),
        gradient: stops(&[(0.0, 0x002200), (0.3, 0x006600), (0.4, 0x888888), (0.8, 0xffffff)]),
        water: water(0.74, 0.005, DEEP_WATER, true),
        vegetation,
        rotate: 0.0,
    }
}

fn desert() -> PlanetPreset {
    let vegetation = vegetation(
        &[
            "plant1", "plant2", "plant3", "palm1", "palm2", "palm3", "palm4", "grass1", "grass2",
            "grass3", "cactus1", "cactus2", "cactus3", "cactus4", "cactus5", "cactus_flower1",
            "cactus_flower2", "cactus_flower3",
        ],
        8,
        0.05,
        PositionCondition {
            min_height: Some(0.74),
            color_falloff: Some(4.0),
            ..Default::default()
        },
    );
    PlanetPreset {
        subdivisions: 5,
        radius: 1.0,
        noise: terrain_noise(3, 0.65, 0.9, 1.0, 0.8),
        gradient: stops(&[(0.0, 0x664400), (0.3, 0x996600), (0.6, 0xccaa00), (0.8, 0xffcc00)]),
        water: water(0.74, 0.005, DEEP_WATER, true),
        vegetation,
        rotate: 0.0,
    }
}

fn islands() -> PlanetPreset {
    let mut vegetation = vegetation(
        &[
            "commontree1", "commontree2", "commontree3", "plant1", "plant2", "plant3", "palm1",
            "palm2", "palm3", "palm4", "grass1", "grass2", "grass3", "bush1", "bush2",
            "cactus_flower1",
        ],
        15,
        0.05,
        PositionCondition {
            min_color: Some(0.35),
            ..Default::default()
        },
    );
    vegetation.above_ground = -0.002;
    PlanetPreset {
        subdivisions: 5,
        radius: 1.0,
        noise: terrain_noise(5, 0.7, 1.0, 1.0, 1.8),
        gradient: stops(&[(0.0, 0x000000), (0.3, 0x996600), (0.5, 0xccaa00), (0.6, 0x669900)]),
        water: water(0.8, 0.01, DEEP_WATER, true),
        vegetation,
        rotate: 0.0,
    }
}
