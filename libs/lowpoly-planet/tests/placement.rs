use approx::assert_relative_eq;
use glam::{DQuat, DVec3};
use lowpoly_mesh::{ConstantField, NoiseField, NoiseSettings};
use lowpoly_planet::{HeightPolicy, PlacementEngine};

fn assert_vec_eq(a: DVec3, b: DVec3, eps: f64) {
    assert!((a - b).length() < eps, "{a:?} != {b:?}");
}

fn assert_quat_eq(a: DQuat, b: DQuat, eps: f64) {
    // q and -q are the same rotation
    assert!(a.dot(b).abs() > 1.0 - eps, "{a:?} != {b:?}");
}

fn terrain() -> NoiseField {
    NoiseField::new(NoiseSettings {
        seed: 11,
        min: 0.8,
        max: 1.0,
        ..Default::default()
    })
}

#[test]
fn updating_to_current_position_changes_nothing() {
    let mut engine = PlacementEngine::new(terrain());
    let id = engine.add(DVec3::new(0.3, -0.4, 0.8), HeightPolicy::AboveSurface(0.01), 0.7, 0.03);
    let before = *engine.state(id).unwrap();

    let after = *engine.update_position(id, before.position, false).unwrap();
    assert_vec_eq(after.position, before.position, 1e-12);
    assert_quat_eq(after.orientation, before.orientation, 1e-12);
    assert_quat_eq(after.accumulator, before.accumulator, 1e-12);
}

#[test]
fn local_move_round_trip() {
    let mut engine = PlacementEngine::new(ConstantField::new(1.0, 0.0));
    let id = engine.add(DVec3::new(1.0, 1.0, 0.0), HeightPolicy::Keep, 0.4, 0.0);
    let start = engine.state(id).unwrap().position;
    let v = DVec3::new(0.05, 0.0, 0.1);

    let first = *engine.state(id).unwrap();
    let world = first.orientation * v;
    let moved = *engine.move_local(id, v, false).unwrap();
    assert_vec_eq(moved.position, start + world, 1e-12);

    // the same world displacement seen from the new frame
    let v_prime = moved.orientation.inverse() * world;
    let back = engine.move_local(id, -v_prime, false).unwrap();
    assert_vec_eq(back.position, start, 1e-12);
}

#[test]
fn walking_forward_keeps_up_radial() {
    let mut engine = PlacementEngine::new(terrain());
    let id = engine.add(DVec3::Z, HeightPolicy::AboveSurface(0.0), 1.1, 0.0);
    for _ in 0..500 {
        let state = *engine.move_local(id, DVec3::new(0.0, 0.0, 0.01), false).unwrap();
        let up = state.accumulator * DVec3::Y;
        assert_vec_eq(up, state.position.normalize(), 1e-6);
    }
}

#[test]
fn antipodal_move_is_a_half_turn() {
    let mut engine = PlacementEngine::new(ConstantField::new(1.0, 0.0));
    let id = engine.add(DVec3::X, HeightPolicy::AboveSurface(0.0), 0.0, 0.0);
    let state = *engine.update_position(id, DVec3::NEG_X, false).unwrap();

    assert_vec_eq(state.position, DVec3::NEG_X, 1e-12);
    let up = state.accumulator * DVec3::Y;
    assert_vec_eq(up, DVec3::NEG_X, 1e-9);
    assert_relative_eq!(state.accumulator.length(), 1.0, epsilon = 1e-12);
}

#[test]
fn rotate_body_inverts_accumulator() {
    let mut engine = PlacementEngine::new(ConstantField::new(1.0, 0.0));
    let id = engine.add(DVec3::Y, HeightPolicy::AboveSurface(0.0), 0.0, 0.0);
    assert_eq!(engine.body_orientation(), DQuat::IDENTITY);

    let state = *engine
        .move_local(id, DVec3::new(0.0, 0.0, 0.2), true)
        .unwrap();
    let body = engine.body_orientation();
    assert_quat_eq(body * state.accumulator, DQuat::IDENTITY, 1e-12);
    // in world space the object is back on top
    assert_vec_eq(body * state.position, DVec3::Y, 1e-12);
}

#[test]
fn bound_adjusts_before_rotation() {
    let mut engine = PlacementEngine::new(ConstantField::new(1.0, 0.0));
    let id = engine.add(DVec3::Y, HeightPolicy::AboveSurface(0.0), 0.0, 0.0);
    let state = *engine
        .move_local_bounded(id, DVec3::new(0.3, 0.0, 0.3), false, |p| {
            DVec3::new(0.0, p.y, p.z).normalize()
        })
        .unwrap();
    assert_relative_eq!(state.position.x, 0.0);
    assert_vec_eq(state.accumulator * DVec3::Y, state.position, 1e-12);
}
