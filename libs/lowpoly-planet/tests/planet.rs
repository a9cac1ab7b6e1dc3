use approx::assert_relative_eq;
use glam::DVec3;
use lowpoly_mesh::{build_mesh, ConstantField, Heightfield, Shape};
use lowpoly_planet::{Planet, PlanetOptions, PlanetPreset, PRESET_NAMES};
use std::f64::consts::PI;
use std::sync::Arc;

fn options(preset: &str) -> PlanetOptions {
    PlanetOptions {
        subdivisions: Some(2),
        ..PlanetOptions::preset(preset)
    }
}

#[test]
fn every_preset_builds() {
    for name in PRESET_NAMES {
        let planet = Planet::new(&options(name), 9).unwrap();
        assert_eq!(planet.preset_name(), name);
        assert_eq!(planet.terrain().triangle_count(), 320);
        planet.terrain().validate().unwrap();
        assert!(planet.terrain().colors().is_some());
    }
}

#[test]
fn same_seed_same_planet() {
    let a = Planet::new(&options("desert"), 21).unwrap();
    let b = Planet::new(&options("desert"), 21).unwrap();
    assert_eq!(a.terrain(), b.terrain());
    assert_eq!(a.vegetation(), b.vegetation());
}

#[test]
fn random_preset_is_a_builtin() {
    let opts = PlanetOptions {
        subdivisions: Some(1),
        ..Default::default()
    };
    let planet = Planet::new(&opts, 4).unwrap();
    assert!(PRESET_NAMES.contains(&planet.preset_name()));
}

#[test]
fn unknown_preset_is_an_error() {
    assert!(Planet::new(&PlanetOptions::preset("gas giant"), 0).is_err());
}

#[test]
fn terrain_matches_heightfield() {
    let opts = PlanetOptions {
        radius: Some(2.0),
        ..options("islands")
    };
    let planet = Planet::new(&opts, 13).unwrap();
    let mut sphere = build_mesh(&Shape::Sphere { radius: 2.0 }, 2, None);
    sphere.multiply_vertices_by(planet.heightfield());
    assert_eq!(planet.terrain().vertices(), sphere.vertices());
}

#[test]
fn objects_stand_on_custom_heightfield() {
    let field = Arc::new(ConstantField::new(0.9, 0.5));
    let mut planet = Planet::with_heightfield(&options("forest"), 3, field).unwrap();
    let id = planet.add_object(DVec3::new(0.0, 0.0, 4.0), Some(0.1), 0.0, 0.0);
    let (position, orientation) = planet.placement().transform(id).unwrap();
    assert_relative_eq!(position.length(), 1.0, epsilon = 1e-12);
    assert!((orientation * DVec3::Y - DVec3::Z).length() < 1e-12);
    for vertex in planet.terrain().vertices() {
        assert_relative_eq!(vertex.length(), 0.9, epsilon = 1e-12);
    }
}

#[test]
fn snow_models_grow_above_the_tree_line() {
    let field = Arc::new(ConstantField::new(0.9, 0.5));
    let planet = Planet::with_heightfield(&options("mountainforest"), 4, field).unwrap();
    assert!(!planet.vegetation().is_empty());
    for item in planet.vegetation() {
        assert!(item.model.contains("snow"), "{}", item.model);
    }
}

#[test]
fn clouds_drift_forward_at_altitude() {
    let mut planet = Planet::new(&options("islands"), 8).unwrap();
    planet.make_clouds(4);
    let before: Vec<_> = planet
        .clouds()
        .iter()
        .map(|c| planet.placement().transform(c.id).unwrap().0)
        .collect();

    for frame in 0..10 {
        planet.animate(frame as f64 / 60.0);
    }

    for (cloud, start) in planet.clouds().iter().zip(before) {
        let (position, _) = planet.placement().transform(cloud.id).unwrap();
        assert!(position.distance(start) > 0.0);
        let surface = planet.placement().surface().get(position);
        assert_relative_eq!(position.length(), surface + 0.25, epsilon = 1e-9);
    }
}

#[test]
fn animate_reports_morph_and_spin() {
    let opts = PlanetOptions {
        rotate: Some(2.0),
        ..options("forest")
    };
    let mut planet = Planet::new(&opts, 1).unwrap();
    let frame = planet.animate(PI / 4.0);
    assert_relative_eq!(frame.water_morph_influence.unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(frame.body_spin, PI / 4.0 * 2.0 * 0.1, epsilon = 1e-12);
}

#[test]
fn disabled_water_and_vegetation() {
    let mut preset = PlanetPreset::named("forest").unwrap();
    preset.water.enabled = false;
    preset.vegetation.enabled = false;
    let planet = Planet::new(
        &PlanetOptions {
            water: Some(preset.water),
            vegetation: Some(preset.vegetation),
            ..options("forest")
        },
        2,
    )
    .unwrap();
    assert!(planet.water().is_none());
    assert!(planet.vegetation().is_empty());
    assert!(planet.placement().is_empty());
}
