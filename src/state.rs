//! Pendulum state and physical constants.
//!
//! All simulation state lives in one explicit [`PendulumState`] struct owned
//! by the session and passed by mutable reference to the update functions.
//! Every field has exactly one writer per frame: the integrator writes
//! `angle`/`angular_velocity` in the gravity-on regime, the gravity-off
//! formula writes `angle` only, and the drag handler writes
//! `angle`/`angular_velocity`/`amplitude` plus the interaction flags.

use glam::Vec3;

/// Per-frame angular gravity constant for the damped pendulum ODE.
pub const GRAVITY: f32 = 0.001;

/// Damping factor applied to the angular velocity every gravity-on tick.
pub const DAMPING: f32 = 0.999;

/// Rod length in world units. The pivot sits at the origin.
pub const ROD_LENGTH: f32 = 2.0;

/// Distance from the bob within which a pointer press grabs it.
pub const GRAB_RADIUS: f32 = 0.5;

/// Gravity-off oscillation rate in radians per wall-clock millisecond.
pub const SWAY_RATE: f64 = 0.002;

/// Complete mutable state of the pendulum.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumState {
    /// Signed angle in radians; 0 hangs straight down.
    pub angle: f32,
    /// Angular velocity in radians per frame (not per second).
    pub angular_velocity: f32,
    /// Peak swing magnitude driving the gravity-off oscillation.
    ///
    /// Only written on drag-start (`|angle|`) and on the gravity on-to-off
    /// transition (the angle at that tick). Never touched while the
    /// gravity-on integrator is running.
    pub amplitude: f32,
    /// Global run/pause flag. While false, the integrator is inert.
    pub is_swinging: bool,
    /// Selects the integration regime: damped ODE (on) or clock-driven
    /// sinusoid (off).
    pub gravity_on: bool,
    /// Set while the bob is being dragged.
    pub is_dragging: bool,
    /// Set between a pointer-down that hit the bob and the next pointer-up.
    pub is_clicked_down: bool,
}

impl PendulumState {
    /// State at rest, hanging straight down, swinging with gravity on.
    pub fn new() -> Self {
        Self::with_angle(0.0)
    }

    /// State displaced to `angle` with zero velocity.
    pub fn with_angle(angle: f32) -> Self {
        Self {
            angle,
            angular_velocity: 0.0,
            amplitude: angle.abs(),
            is_swinging: true,
            gravity_on: true,
            is_dragging: false,
            is_clicked_down: false,
        }
    }

    /// World position of the bob for the current angle.
    pub fn bob_position(&self) -> Vec3 {
        bob_position(self.angle)
    }
}

impl Default for PendulumState {
    fn default() -> Self {
        Self::new()
    }
}

/// World position of a bob hanging at `angle` from the pivot at the origin.
///
/// The pendulum lives in the z = 0 plane; angle 0 points straight down the
/// negative y axis and positive angles swing toward positive x.
pub fn bob_position(angle: f32) -> Vec3 {
    Vec3::new(ROD_LENGTH * angle.sin(), -ROD_LENGTH * angle.cos(), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_bob_hangs_down_at_zero() {
        let pos = bob_position(0.0);
        assert!((pos.x).abs() < 1e-6);
        assert!((pos.y + ROD_LENGTH).abs() < 1e-6);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_bob_horizontal_at_quarter_turn() {
        let pos = bob_position(FRAC_PI_2);
        assert!((pos.x - ROD_LENGTH).abs() < 1e-6);
        assert!(pos.y.abs() < 1e-6);

        let pos = bob_position(-FRAC_PI_2);
        assert!((pos.x + ROD_LENGTH).abs() < 1e-6);
        assert!(pos.y.abs() < 1e-6);
    }

    #[test]
    fn test_initial_state() {
        let state = PendulumState::new();
        assert_eq!(state.angle, 0.0);
        assert_eq!(state.angular_velocity, 0.0);
        assert!(state.is_swinging);
        assert!(state.gravity_on);
        assert!(!state.is_dragging);
        assert!(!state.is_clicked_down);
    }

    #[test]
    fn test_with_angle_captures_amplitude() {
        let state = PendulumState::with_angle(-0.8);
        assert_eq!(state.angle, -0.8);
        assert_eq!(state.amplitude, 0.8);
    }
}
