//! Headless end-to-end scenarios: drive the simulation core through the
//! same sequence of pointer events and ticks the windowed session would,
//! without a window or GPU.

use pendlab::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Ray shooting straight at (x, y) on the pendulum plane, the direction
/// the fixed front camera produces.
fn ray_at(x: f32, y: f32) -> PointerRay {
    PointerRay {
        origin: Vec3::new(x, y, 5.0),
        direction: Vec3::NEG_Z,
    }
}

fn ray_at_bob(state: &PendulumState) -> PointerRay {
    let bob = state.bob_position();
    ray_at(bob.x, bob.y)
}

#[test]
fn drag_lifecycle_then_swing() {
    let mut state = PendulumState::with_angle(0.0);
    let mut integrator = Integrator::new(state.gravity_on);
    let mut history = EnergyHistory::new();

    // Let it sit a few frames, then grab the bob.
    for tick in 0..5 {
        if let Some(s) = integrator.step(&mut state, tick as f64 * 16.0) {
            history.append(s);
        }
    }
    pointer_down(&ray_at_bob(&state), &mut state);
    assert!(state.is_dragging);

    // While held, the integrator must not move anything.
    let samples_before = history.len();
    let held_angle = state.angle;
    for tick in 5..15 {
        if let Some(s) = integrator.step(&mut state, tick as f64 * 16.0) {
            history.append(s);
        }
    }
    assert_eq!(state.angle, held_angle);
    assert_eq!(history.len(), samples_before);

    // Drag out to about 1.2 rad and release.
    let target = bob_position(1.2);
    pointer_move(&ray_at(target.x, target.y), &mut state);
    assert!((state.angle - 1.2).abs() < 1e-4);
    pointer_up(&mut state);
    assert!(!state.is_dragging);
    assert_eq!(state.angular_velocity, 0.0);

    // It falls from the release angle and energy samples resume.
    for tick in 15..20 {
        if let Some(s) = integrator.step(&mut state, tick as f64 * 16.0) {
            history.append(s);
        }
    }
    assert!(state.angle < 1.2);
    assert!(state.angular_velocity < 0.0);
    assert!(history.len() > samples_before);
}

#[test]
fn grab_respects_radius() {
    let bob = bob_position(0.0);

    let mut state = PendulumState::with_angle(0.0);
    pointer_down(&ray_at(bob.x + 0.3, bob.y), &mut state);
    assert!(state.is_dragging);

    let mut state = PendulumState::with_angle(0.0);
    pointer_down(&ray_at(bob.x + 0.6, bob.y), &mut state);
    assert!(!state.is_dragging);
}

#[test]
fn gravity_toggle_mid_session() {
    let mut state = PendulumState::with_angle(FRAC_PI_2);
    let mut integrator = Integrator::new(state.gravity_on);
    let mut history = EnergyHistory::new();

    for tick in 0..50 {
        if let Some(s) = integrator.step(&mut state, tick as f64 * 16.0) {
            history.append(s);
        }
    }
    assert_eq!(history.len(), 50);
    let angle_at_toggle = state.angle;

    // Gravity off: the bob sways within the captured amplitude and no new
    // samples arrive.
    state.gravity_on = false;
    for tick in 50..300 {
        if let Some(s) = integrator.step(&mut state, tick as f64 * 16.0) {
            history.append(s);
        }
        assert!(state.angle.abs() <= angle_at_toggle.abs() + 1e-5);
    }
    assert_eq!(history.len(), 50);

    // Back on: integration resumes and sampling continues the tick series.
    state.gravity_on = true;
    for tick in 300..310 {
        if let Some(s) = integrator.step(&mut state, tick as f64 * 16.0) {
            history.append(s);
        }
    }
    assert_eq!(history.len(), 60);
    assert_eq!(history.latest().time, 59);
}

#[test]
fn camera_pick_matches_bob() {
    // The full windowed path goes NDC -> ray -> plane hit. Verify the bob
    // can be picked through the camera at several angles.
    let camera = Camera::new();
    let aspect = 1280.0 / 720.0;

    for angle in [-1.0_f32, -0.3, 0.0, 0.5, 1.3] {
        let state = PendulumState::with_angle(angle);
        let bob = state.bob_position();

        let ndc = camera.world_to_ndc(bob, aspect).unwrap();
        let ray = camera.ndc_ray(ndc, aspect);

        let mut state = state;
        pointer_down(&ray, &mut state);
        assert!(state.is_dragging, "pick failed at angle {angle}");
    }
}

#[test]
fn pause_freezes_everything() {
    let mut state = PendulumState::with_angle(0.8);
    let mut integrator = Integrator::new(state.gravity_on);

    state.is_swinging = false;
    for tick in 0..100 {
        assert!(integrator.step(&mut state, tick as f64 * 16.0).is_none());
    }
    assert_eq!(state.angle, 0.8);
    assert_eq!(state.angular_velocity, 0.0);
}
