//! # Noise Heightfield
//!
//! Perlin fBm heightfield used for terrain, water and cloud surfaces.
//!
//! The raw fBm value is normalized to [0, 1], shaped by `pow`, then mapped
//! onto `[min, max]` for [`Heightfield::get`]. [`Heightfield::get_color`]
//! returns the shaped normalized value so that gradients are authored in
//! [0, 1] regardless of the height range.

use crate::heightfield::Heightfield;
use glam::DVec3;
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

/// Parameters of a [`NoiseField`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Perlin seed
    pub seed: u32,
    /// Number of fBm octaves
    #[serde(alias = "oct")]
    pub octaves: u32,
    /// Amplitude falloff per octave
    #[serde(alias = "per")]
    pub persistence: f64,
    /// Base frequency
    #[serde(alias = "scl")]
    pub scale: f64,
    /// Height at normalized value 0
    pub min: f64,
    /// Height at normalized value 1
    pub max: f64,
    /// Exponent shaping the normalized value
    pub pow: f64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            persistence: 0.5,
            scale: 1.0,
            min: 0.0,
            max: 1.0,
            pow: 1.0,
        }
    }
}

impl NoiseSettings {
    /// Returns a copy with a different seed.
    pub fn with_seed(self, seed: u32) -> Self {
        Self { seed, ..self }
    }
}

/// Heightfield sampling Perlin fBm at the given position.
#[derive(Debug, Clone)]
pub struct NoiseField {
    settings: NoiseSettings,
    perlin: Perlin,
}

impl NoiseField {
    /// Creates a noise heightfield.
    pub fn new(settings: NoiseSettings) -> Self {
        Self {
            perlin: Perlin::new(settings.seed),
            settings,
        }
    }

    /// Returns the settings this field was built from.
    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    fn sample_fbm(&self, p: DVec3) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.settings.scale;
        let mut max_value = 0.0;

        for _ in 0..self.settings.octaves.max(1) {
            let sample = self.perlin.get([p.x * frequency, p.y * frequency, p.z * frequency]);
            total += sample * amplitude;
            max_value += amplitude;
            amplitude *= self.settings.persistence;
            frequency *= 2.0;
        }

        if max_value > 0.0 {
            total / max_value
        } else {
            0.0
        }
    }

    /// Shaped noise value in [0, 1].
    pub fn get_normalized(&self, p: DVec3) -> f64 {
        let n = (self.sample_fbm(p) * 0.5 + 0.5).clamp(0.0, 1.0);
        n.powf(self.settings.pow)
    }
}

impl Heightfield for NoiseField {
    fn get(&self, p: DVec3) -> f64 {
        let NoiseSettings { min, max, .. } = self.settings;
        min + (max - min) * self.get_normalized(p)
    }

    fn get_color(&self, p: DVec3) -> f64 {
        self.get_normalized(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<DVec3> {
        (0..50)
            .map(|i| {
                let t = i as f64 * 0.37;
                DVec3::new(t.sin(), (t * 1.3).cos(), (t * 0.7).sin())
            })
            .collect()
    }

    #[test]
    fn test_values_stay_in_range() {
        let field = NoiseField::new(NoiseSettings {
            min: 0.7,
            max: 1.0,
            pow: 1.8,
            ..Default::default()
        });
        for p in sample_points() {
            let h = field.get(p);
            assert!((0.7..=1.0).contains(&h), "height {h} out of range");
            let c = field.get_color(p);
            assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let a = NoiseField::new(NoiseSettings::default().with_seed(7));
        let b = NoiseField::new(NoiseSettings::default().with_seed(7));
        for p in sample_points() {
            assert_eq!(a.get(p), b.get(p));
        }
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let field = NoiseField::new(NoiseSettings {
            min: 0.5,
            max: 0.5,
            ..Default::default()
        });
        for p in sample_points() {
            assert_eq!(field.get(p), 0.5);
        }
    }

    #[test]
    fn test_short_aliases_deserialize() {
        let json = r#"{"oct": 3, "per": 0.3, "scl": 2.8, "min": -0.13, "max": 0.13}"#;
        let settings: NoiseSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.octaves, 3);
        assert_eq!(settings.persistence, 0.3);
        assert_eq!(settings.scale, 2.8);
        assert_eq!(settings.pow, 1.0);
    }
}
