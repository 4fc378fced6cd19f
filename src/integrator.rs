//! Per-tick advancement of the pendulum state.
//!
//! Two regimes share one entry point:
//!
//! - Gravity on: a lightly damped nonlinear pendulum stepped with
//!   semi-implicit Euler. Damping is intentional, so no energy-conserving
//!   integrator is needed.
//! - Gravity off: the angle is not integrated at all; it is recomputed each
//!   frame as a sinusoid of wall-clock milliseconds with the amplitude
//!   frozen at the moment gravity was switched off. The stored velocity is
//!   left untouched, so switching gravity back on resumes from whatever
//!   velocity the on-regime last had. This clock-driven behavior (including
//!   the velocity discontinuity at the transition) is deliberate.

use crate::energy::{self, EnergySample};
use crate::state::{PendulumState, DAMPING, GRAVITY, SWAY_RATE};

/// Advances the pendulum once per frame and detects gravity transitions.
#[derive(Debug)]
pub struct Integrator {
    /// Gravity flag observed on the last running frame, used to catch the
    /// on-to-off transition and capture the amplitude at that tick.
    gravity_was_on: bool,
}

impl Integrator {
    pub fn new(gravity_on: bool) -> Self {
        Self {
            gravity_was_on: gravity_on,
        }
    }

    /// Advance one tick.
    ///
    /// `clock_millis` is wall-clock time driving the gravity-off sway.
    /// Inert (returns `None` without touching state) while paused or while
    /// the bob is being dragged. Returns an energy sample of the
    /// just-updated state in the gravity-on regime only.
    pub fn step(&mut self, state: &mut PendulumState, clock_millis: f64) -> Option<EnergySample> {
        if !state.is_swinging || state.is_dragging {
            return None;
        }

        let was_on = self.gravity_was_on;
        self.gravity_was_on = state.gravity_on;

        if state.gravity_on {
            let acceleration = -GRAVITY * state.angle.sin();
            state.angular_velocity = (state.angular_velocity + acceleration) * DAMPING;
            state.angle += state.angular_velocity;
            Some(energy::sample(state))
        } else {
            if was_on {
                // Start the sway in phase with where the bob was.
                state.amplitude = state.angle;
            }
            state.angle = state.amplitude * (clock_millis * SWAY_RATE).sin() as f32;
            None
        }
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(true)
    }
}
