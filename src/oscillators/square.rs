//! Square wave oscillator implementation.

use super::Oscillator;
use crate::{Param, Signal};
use std::time::Duration;

/// A square wave oscillator.
///
/// Outputs `1.0` for the first half of each cycle and `-1.0` for the second.
pub struct SquareOscillator {
    frequency: Param,
}

impl SquareOscillator {
    /// Creates a square oscillator at the given frequency in Hz.
    pub fn new(frequency: impl Into<Param>) -> Self {
        Self {
            frequency: frequency.into(),
        }
    }
}

impl Signal for SquareOscillator {
    fn value_at(&self, t: Duration) -> f64 {
        if self.phase_at(t) < 0.5 { 1.0 } else { -1.0 }
    }
}

impl Oscillator for SquareOscillator {
    fn frequency(&self) -> &Param {
        &self.frequency
    }

    fn set_frequency(&mut self, frequency: impl Into<Param>) {
        self.frequency = frequency.into();
    }
}
