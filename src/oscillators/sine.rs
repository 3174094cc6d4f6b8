//! Sine wave oscillator implementation.

use super::Oscillator;
use crate::{Param, Signal};
use std::f64::consts::PI;
use std::time::Duration;

/// A sine wave oscillator.
///
/// Evaluates `sin(2π · t_seconds · frequency(t))`. The frequency is a
/// `Param`, so a fixed value gives a pure tone and a signal gives frequency
/// modulation by composition. At `t = 0` the output is `0.0` for any finite
/// frequency.
///
/// # Examples
///
/// ```
/// use humdrum::{Signal, SineOscillator, SignalExt};
/// use std::time::Duration;
///
/// // A4
/// let osc = SineOscillator::new(440.0);
/// assert_eq!(osc.value_at(Duration::ZERO), 0.0);
///
/// // Vibrato: 5 Hz wobble of ±10 Hz around 440 Hz
/// let vibrato = SineOscillator::new(SineOscillator::new(5.0).gain(10.0).offset(440.0));
/// let sample = vibrato.value_at(Duration::from_millis(3));
/// ```
pub struct SineOscillator {
    frequency: Param,
}

impl SineOscillator {
    /// Creates a new sine oscillator.
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

impl Signal for SineOscillator {
    fn value_at(&self, t: Duration) -> f64 {
        (t.as_secs_f64() * 2.0 * PI * self.frequency.value_at(t)).sin()
    }
}

impl Oscillator for SineOscillator {
    fn frequency(&self) -> &Param {
        &self.frequency
    }

    fn set_frequency(&mut self, frequency: impl Into<Param>) {
        self.frequency = frequency.into();
    }
}
