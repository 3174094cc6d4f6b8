//! Sawtooth wave oscillator implementation.

use super::Oscillator;
use crate::{Param, Signal};
use std::time::Duration;

/// A sawtooth wave oscillator.
///
/// Rises linearly from -1.0 to 1.0 over each cycle, then drops back.
///
/// # Examples
///
/// ```
/// use humdrum::{Signal, SawtoothOscillator};
/// use std::time::Duration;
///
/// let osc = SawtoothOscillator::new(1.0);
/// assert_eq!(osc.value_at(Duration::ZERO), -1.0);
/// assert_eq!(osc.value_at(Duration::from_millis(500)), 0.0);
/// ```
pub struct SawtoothOscillator {
    frequency: Param,
}

impl SawtoothOscillator {
    /// Creates a new sawtooth oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency in Hz (can be fixed or modulated)
    pub fn new(frequency: impl Into<Param>) -> Self {
        Self {
            frequency: frequency.into(),
        }
    }
}

impl Signal for SawtoothOscillator {
    fn value_at(&self, t: Duration) -> f64 {
        2.0 * self.phase_at(t) - 1.0
    }
}

impl Oscillator for SawtoothOscillator {
    fn frequency(&self) -> &Param {
        &self.frequency
    }

    fn set_frequency(&mut self, frequency: impl Into<Param>) {
        self.frequency = frequency.into();
    }
}
