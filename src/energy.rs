//! Energy bookkeeping for the breakdown chart.
//!
//! Samples are derived from the just-updated state once per gravity-on tick
//! and appended to an ordered, append-only history. Samples carry a logical
//! tick counter rather than wall-clock time, so the series simply stops
//! advancing while the simulation is paused, dragged, or in gravity-off
//! mode.

use crate::state::{PendulumState, GRAVITY, ROD_LENGTH};

/// One energy measurement, immutable once appended.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergySample {
    pub kinetic: f32,
    pub potential: f32,
    pub mechanical: f32,
    /// Logical tick index, assigned by [`EnergyHistory::append`].
    pub time: u64,
}

/// Energies of the current state. `time` is left 0 until appended.
pub fn sample(state: &PendulumState) -> EnergySample {
    let kinetic = 0.5 * (ROD_LENGTH * state.angular_velocity).powi(2);
    let potential = GRAVITY * ROD_LENGTH * (1.0 - state.angle.cos());
    EnergySample {
        kinetic,
        potential,
        mechanical: kinetic + potential,
        time: 0,
    }
}

/// Append-only time series of energy samples.
///
/// Grows without bound over a long-running session; only the latest sample
/// feeds the chart. Known limitation carried over from the original design.
#[derive(Debug, Default)]
pub struct EnergyHistory {
    samples: Vec<EnergySample>,
}

impl EnergyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a sample, assigning the next logical tick (0 when empty).
    pub fn append(&mut self, mut sample: EnergySample) {
        sample.time = self.samples.last().map_or(0, |s| s.time + 1);
        self.samples.push(sample);
    }

    /// The most recent sample, or an all-zero sample when empty.
    pub fn latest(&self) -> EnergySample {
        self.samples.last().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[EnergySample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_tick_sequence_ignores_wall_clock() {
        let mut history = EnergyHistory::new();
        let state = PendulumState::with_angle(0.5);

        for _ in 0..3 {
            history.append(sample(&state));
        }

        let times: Vec<u64> = history.samples().iter().map(|s| s.time).collect();
        assert_eq!(times, vec![0, 1, 2]);
    }

    #[test]
    fn test_latest_is_zero_when_empty() {
        let history = EnergyHistory::new();
        assert_eq!(history.latest(), EnergySample::default());
        assert!(history.is_empty());
    }

    #[test]
    fn test_energy_at_rest_is_zero() {
        let state = PendulumState::new();
        let s = sample(&state);
        assert_eq!(s.kinetic, 0.0);
        assert_eq!(s.potential, 0.0);
        assert_eq!(s.mechanical, 0.0);
    }

    #[test]
    fn test_energy_formulas() {
        let mut state = PendulumState::with_angle(FRAC_PI_2);
        state.angular_velocity = 0.01;
        let s = sample(&state);

        // ke = 0.5 * (L*v)^2, pe = g * L * (1 - cos a)
        assert!((s.kinetic - 0.5 * (ROD_LENGTH * 0.01_f32).powi(2)).abs() < 1e-9);
        assert!((s.potential - GRAVITY * ROD_LENGTH).abs() < 1e-9);
        assert!((s.mechanical - (s.kinetic + s.potential)).abs() < 1e-9);
    }

    #[test]
    fn test_potential_energy_never_negative() {
        for i in -314..=314 {
            let state = PendulumState::with_angle(i as f32 / 100.0);
            assert!(sample(&state).potential >= 0.0);
        }
    }
}
