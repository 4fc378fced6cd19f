//! Mouse drag state machine for the bob.
//!
//! Three handlers translate pointer events into state writes. Dragging only
//! engages when a press actually lands on the bob; misses fall through so
//! the simulation keeps running undisturbed. While a drag is active the
//! integrator is inert and the bob tracks the pointer directly.

use std::f32::consts::FRAC_PI_2;

use crate::picking::{self, PointerRay};
use crate::state::{PendulumState, GRAB_RADIUS};

/// Pointer press. Grabs the bob when the press lands within
/// [`GRAB_RADIUS`] of it on the pendulum plane.
///
/// On a grab: freezes the velocity, snaps the angle to the raw pointer
/// angle, and records `|angle|` as the amplitude for a later gravity-off
/// sway. A miss or a degenerate ray leaves the state untouched.
pub fn pointer_down(ray: &PointerRay, state: &mut PendulumState) {
    let Some(hit) = ray.intersect_pendulum_plane() else {
        return;
    };
    if !picking::hits_bob(hit, state.bob_position(), GRAB_RADIUS) {
        return;
    }
    let Some(raw) = picking::pointer_to_angle(ray) else {
        return;
    };

    state.is_dragging = true;
    state.is_clicked_down = true;
    state.angular_velocity = 0.0;
    state.angle = raw;
    state.amplitude = state.angle.abs();
}

/// Pointer motion while a drag is active.
///
/// The raw `atan2` angle measures from the +x axis while the pendulum
/// measures from straight down, hence the quarter-turn offset here. Note
/// `pointer_down` stores the raw angle without it; the bob therefore snaps
/// a quarter turn on the first move of every drag. Long-standing behavior,
/// kept as is.
pub fn pointer_move(ray: &PointerRay, state: &mut PendulumState) {
    if !state.is_dragging || !state.is_clicked_down {
        return;
    }
    if let Some(raw) = picking::pointer_to_angle(ray) {
        state.angle = raw + FRAC_PI_2;
    }
}

/// Pointer release. Ends the drag unconditionally; the velocity stays at
/// whatever the drag left it (zero), so the bob falls from the release
/// angle on the next gravity-on tick.
pub fn pointer_up(state: &mut PendulumState) {
    state.is_dragging = false;
    state.is_clicked_down = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::bob_position;
    use glam::Vec3;

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
    fn test_press_on_bob_starts_drag() {
        let mut state = PendulumState::with_angle(0.4);
        state.angular_velocity = 0.02;

        pointer_down(&ray_at_bob(&state), &mut state);

        assert!(state.is_dragging);
        assert!(state.is_clicked_down);
        assert_eq!(state.angular_velocity, 0.0);
        assert_eq!(state.amplitude, state.angle.abs());
    }

    #[test]
    fn test_press_near_bob_within_radius_grabs() {
        let mut state = PendulumState::with_angle(0.0);
        let bob = bob_position(0.0);

        pointer_down(&ray_at(bob.x + 0.3, bob.y), &mut state);
        assert!(state.is_dragging);
    }

    #[test]
    fn test_press_outside_radius_is_ignored() {
        let mut state = PendulumState::with_angle(0.0);
        state.angular_velocity = 0.02;
        let bob = bob_position(0.0);

        pointer_down(&ray_at(bob.x + 0.6, bob.y), &mut state);

        assert!(!state.is_dragging);
        assert!(!state.is_clicked_down);
        assert_eq!(state.angular_velocity, 0.02);
    }

    #[test]
    fn test_move_tracks_pointer_with_quarter_turn_offset() {
        let mut state = PendulumState::with_angle(0.0);
        pointer_down(&ray_at_bob(&state), &mut state);

        // Target angle 0.7: the bob there has raw atan2 angle 0.7 - pi/2.
        let target = bob_position(0.7);
        pointer_move(&ray_at(target.x, target.y), &mut state);

        assert!((state.angle - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut state = PendulumState::with_angle(0.2);
        pointer_move(&ray_at(1.0, 1.0), &mut state);
        assert_eq!(state.angle, 0.2);
    }

    #[test]
    fn test_degenerate_ray_during_drag_keeps_last_angle() {
        let mut state = PendulumState::with_angle(0.0);
        pointer_down(&ray_at_bob(&state), &mut state);
        let angle = state.angle;

        // Parallel ray: no plane hit, so the move must not write NaN.
        let parallel = PointerRay {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::X,
        };
        pointer_move(&parallel, &mut state);

        assert_eq!(state.angle, angle);
        assert!(state.is_dragging);
    }

    #[test]
    fn test_release_ends_drag_with_zero_velocity() {
        let mut state = PendulumState::with_angle(0.0);
        pointer_down(&ray_at_bob(&state), &mut state);
        let target = bob_position(1.1);
        pointer_move(&ray_at(target.x, target.y), &mut state);

        pointer_up(&mut state);

        assert!(!state.is_dragging);
        assert!(!state.is_clicked_down);
        assert_eq!(state.angular_velocity, 0.0);
        assert!((state.angle - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_release_without_drag_is_harmless() {
        let mut state = PendulumState::with_angle(0.3);
        pointer_up(&mut state);
        assert_eq!(state.angle, 0.3);
        assert!(!state.is_dragging);
    }
}
