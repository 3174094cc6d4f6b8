//! Core trait definitions for oscillators.

use std::time::Duration;

use crate::{Param, Signal};

/// Oscillators are periodic signals whose frequency is itself a parameter.
///
/// The phase at offset `t` is `t_seconds * frequency(t)`, measured in cycles.
/// When the frequency is time-varying this is frequency times elapsed time,
/// not the integral of the instantaneous frequency, so modulated output is
/// an approximation of true FM rather than phase-accurate FM.
pub trait Oscillator: Signal {
    /// The parameter controlling this oscillator's frequency in Hz.
    fn frequency(&self) -> &Param;

    /// Replaces the frequency parameter.
    fn set_frequency(&mut self, frequency: impl Into<Param>)
    where
        Self: Sized;

    /// Number of cycles elapsed at offset `t`.
    fn cycles_at(&self, t: Duration) -> f64 {
        t.as_secs_f64() * self.frequency().value_at(t)
    }

    /// Position within the current cycle, in `[0.0, 1.0)`.
    ///
    /// Non-finite cycle counts propagate as NaN.
    fn phase_at(&self, t: Duration) -> f64 {
        let cycles = self.cycles_at(t);
        cycles - cycles.floor()
    }
}
