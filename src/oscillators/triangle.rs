//! Triangle wave oscillator implementation.

use super::Oscillator;
use crate::{Param, Signal};
use std::time::Duration;

/// A triangle wave oscillator.
///
/// Rises linearly from -1.0 to 1.0 over the first half of each cycle, then
/// falls back to -1.0 over the second half.
pub struct TriangleOscillator {
    frequency: Param,
}

impl TriangleOscillator {
    /// Creates a new triangle oscillator.
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

impl Signal for TriangleOscillator {
    fn value_at(&self, t: Duration) -> f64 {
        let phase = self.phase_at(t);
        if phase < 0.5 {
            4.0 * phase - 1.0
        } else {
            3.0 - 4.0 * phase
        }
    }
}

impl Oscillator for TriangleOscillator {
    fn frequency(&self) -> &Param {
        &self.frequency
    }

    fn set_frequency(&mut self, frequency: impl Into<Param>) {
        self.frequency = frequency.into();
    }
}
