//! Signal combinators for composing and transforming signals.
//!
//! This module provides building blocks for combining and manipulating signals,
//! including mathematical operations (addition, multiplication), gain control,
//! offsetting, mixing, and time-domain transforms (delay, time scaling).
//!
//! Every combinator evaluates its operands at the same time offset it is
//! asked for (or at a deterministic transform of it), so composition keeps
//! signals pure.

use std::time::Duration;

use crate::{Param, Signal};

/// Multiplies two signals together (amplitude modulation / ring modulation).
///
/// When one signal is slow, this creates tremolo. When both signals are in
/// the audio range, this creates ring modulation.
///
/// # Examples
///
/// ```
/// use humdrum::{SineOscillator, combinators::Multiply};
///
/// let carrier = SineOscillator::new(440.0);
/// let modulator = SineOscillator::new(2.0);
/// let ring_mod = Multiply::new(carrier, modulator);
/// ```
pub struct Multiply<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Multiply<A, B> {
    /// Creates a new Multiply combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Multiply<A, B> {
    fn value_at(&self, t: Duration) -> f64 {
        self.a.value_at(t) * self.b.value_at(t)
    }
}

/// Adds two signals together.
///
/// When summing several full-scale signals, reduce the gain to keep the
/// result within `[-1.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use humdrum::{SineOscillator, combinators::Add};
///
/// let osc1 = SineOscillator::new(440.0);
/// let osc2 = SineOscillator::new(880.0);
/// let mixed = Add::new(osc1, osc2);
/// ```
pub struct Add<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Add<A, B> {
    /// Creates a new Add combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Add<A, B> {
    fn value_at(&self, t: Duration) -> f64 {
        self.a.value_at(t) + self.b.value_at(t)
    }
}

/// Scales a signal by a factor (gain/attenuation).
///
/// # Examples
///
/// ```
/// use humdrum::{SineOscillator, combinators::Gain};
///
/// let osc = SineOscillator::new(440.0);
/// let quieter = Gain { source: osc, gain: 0.5.into() };
/// ```
pub struct Gain<S: Signal> {
    pub source: S,
    pub gain: Param,
}

impl<S: Signal> Signal for Gain<S> {
    fn value_at(&self, t: Duration) -> f64 {
        self.source.value_at(t) * self.gain.value_at(t)
    }
}

/// Adds an offset to a signal (DC offset).
///
/// Useful for shifting a modulator into a frequency range before feeding it
/// to an oscillator.
///
/// # Examples
///
/// ```
/// use humdrum::{SineOscillator, combinators::Offset};
///
/// // Shift the signal from [-1, 1] to [0, 2]
/// let osc = SineOscillator::new(440.0);
/// let shifted = Offset { source: osc, offset: 1.0.into() };
/// ```
pub struct Offset<S: Signal> {
    pub source: S,
    pub offset: Param,
}

impl<S: Signal> Signal for Offset<S> {
    fn value_at(&self, t: Duration) -> f64 {
        self.source.value_at(t) + self.offset.value_at(t)
    }
}

/// Mixes two signals together with individual weights.
///
/// # Examples
///
/// ```
/// use humdrum::{SineOscillator, combinators::Mix2};
///
/// let osc1 = SineOscillator::new(440.0);
/// let osc2 = SineOscillator::new(880.0);
/// let mixer = Mix2::new(osc1, 0.5, osc2, 0.5);
/// ```
pub struct Mix2<A: Signal, B: Signal> {
    a: A,
    weight_a: Param,
    b: B,
    weight_b: Param,
}

impl<A: Signal, B: Signal> Mix2<A, B> {
    /// Creates a new Mix2 combinator.
    pub fn new(a: A, weight_a: impl Into<Param>, b: B, weight_b: impl Into<Param>) -> Self {
        Self {
            a,
            weight_a: weight_a.into(),
            b,
            weight_b: weight_b.into(),
        }
    }
}

impl<A: Signal, B: Signal> Signal for Mix2<A, B> {
    fn value_at(&self, t: Duration) -> f64 {
        self.a.value_at(t) * self.weight_a.value_at(t)
            + self.b.value_at(t) * self.weight_b.value_at(t)
    }
}

/// Clips a signal to a range (hard clipping).
///
/// # Examples
///
/// ```
/// use humdrum::{SineOscillator, combinators::Clamp};
///
/// let osc = SineOscillator::new(440.0);
/// let clipped = Clamp { source: osc, min: -0.5, max: 0.5 };
/// ```
pub struct Clamp<S: Signal> {
    pub source: S,
    pub min: f64,
    pub max: f64,
}

impl<S: Signal> Signal for Clamp<S> {
    fn value_at(&self, t: Duration) -> f64 {
        self.source.value_at(t).clamp(self.min, self.max)
    }
}

/// Applies a function to every value of a signal.
///
/// The function is `Fn`, so it cannot carry state between evaluations.
///
/// # Examples
///
/// ```
/// use humdrum::{SineOscillator, combinators::Map};
///
/// let osc = SineOscillator::new(440.0);
/// // Soft clipping with tanh
/// let soft = Map { source: osc, func: |x: f64| (x * 2.0).tanh() };
/// ```
pub struct Map<S: Signal, F>
where
    F: Fn(f64) -> f64,
{
    pub source: S,
    pub func: F,
}

impl<S: Signal, F> Signal for Map<S, F>
where
    F: Fn(f64) -> f64,
{
    fn value_at(&self, t: Duration) -> f64 {
        (self.func)(self.source.value_at(t))
    }
}

/// Inverts the polarity of a signal.
pub struct Invert<S: Signal> {
    pub source: S,
}

impl<S: Signal> Signal for Invert<S> {
    fn value_at(&self, t: Duration) -> f64 {
        -self.source.value_at(t)
    }
}

/// Crossfades between two signals.
///
/// A mix of `0.0` yields only `a`, `1.0` only `b`. The mix value is clamped
/// to `[0.0, 1.0]`.
pub struct Crossfade<A: Signal, B: Signal> {
    a: A,
    b: B,
    mix: Param,
}

impl<A: Signal, B: Signal> Crossfade<A, B> {
    /// Creates a new Crossfade combinator.
    pub fn new(a: A, b: B, mix: impl Into<Param>) -> Self {
        Self {
            a,
            b,
            mix: mix.into(),
        }
    }
}

impl<A: Signal, B: Signal> Signal for Crossfade<A, B> {
    fn value_at(&self, t: Duration) -> f64 {
        let mix = self.mix.value_at(t).clamp(0.0, 1.0);
        self.a.value_at(t) * (1.0 - mix) + self.b.value_at(t) * mix
    }
}

/// Full-wave rectification.
pub struct Abs<S: Signal> {
    pub source: S,
}

impl<S: Signal> Signal for Abs<S> {
    fn value_at(&self, t: Duration) -> f64 {
        self.source.value_at(t).abs()
    }
}

/// Shifts a signal later in time.
///
/// Before `delay` has elapsed the output is `0.0`; afterwards it is the
/// source evaluated at `t - delay`, so the source starts from its own origin.
///
/// # Examples
///
/// ```
/// use humdrum::{ConstantSignal, Signal, combinators::Delay};
/// use std::time::Duration;
///
/// let late = Delay { source: ConstantSignal(1.0), delay: Duration::from_secs(1) };
/// assert_eq!(late.value_at(Duration::from_millis(500)), 0.0);
/// assert_eq!(late.value_at(Duration::from_secs(1)), 1.0);
/// ```
pub struct Delay<S: Signal> {
    pub source: S,
    pub delay: Duration,
}

impl<S: Signal> Signal for Delay<S> {
    fn value_at(&self, t: Duration) -> f64 {
        match t.checked_sub(self.delay) {
            Some(local) => self.source.value_at(local),
            None => 0.0,
        }
    }
}

/// Speeds up or slows down a signal by scaling its time axis.
///
/// The source is evaluated at `t * factor`. A factor of `2.0` plays the
/// source twice as fast; negative or NaN factors are treated as `0.0`, and
/// offsets beyond the `Duration` range saturate.
pub struct TimeScale<S: Signal> {
    pub source: S,
    pub factor: f64,
}

impl<S: Signal> Signal for TimeScale<S> {
    fn value_at(&self, t: Duration) -> f64 {
        let factor = if self.factor > 0.0 { self.factor } else { 0.0 };
        let scaled =
            Duration::try_from_secs_f64(t.as_secs_f64() * factor).unwrap_or(Duration::MAX);
        self.source.value_at(scaled)
    }
}

/// Extension trait providing a fluent builder API for signal combinators.
///
/// Automatically implemented for all types that implement `Signal`.
///
/// # Examples
///
/// ```
/// use humdrum::{SineOscillator, SignalExt};
///
/// let lfo = SineOscillator::new(5.0).gain(0.3).offset(0.5);
/// let osc = SineOscillator::new(440.0);
/// let tremolo = osc.multiply(lfo).clamp(-1.0, 1.0);
/// ```
pub trait SignalExt: Signal + Sized {
    fn multiply<S: Signal>(self, other: S) -> Multiply<Self, S> {
        Multiply { a: self, b: other }
    }

    fn add<S: Signal>(self, other: S) -> Add<Self, S> {
        Add { a: self, b: other }
    }

    fn gain(self, gain: impl Into<Param>) -> Gain<Self> {
        Gain {
            source: self,
            gain: gain.into(),
        }
    }

    fn offset(self, offset: impl Into<Param>) -> Offset<Self> {
        Offset {
            source: self,
            offset: offset.into(),
        }
    }

    fn clamp(self, min: f64, max: f64) -> Clamp<Self> {
        Clamp {
            source: self,
            min,
            max,
        }
    }

    fn map<F>(self, func: F) -> Map<Self, F>
    where
        F: Fn(f64) -> f64,
    {
        Map { source: self, func }
    }

    fn invert(self) -> Invert<Self> {
        Invert { source: self }
    }

    fn crossfade<S: Signal>(self, other: S, mix: impl Into<Param>) -> Crossfade<Self, S> {
        Crossfade {
            a: self,
            b: other,
            mix: mix.into(),
        }
    }

    fn abs(self) -> Abs<Self> {
        Abs { source: self }
    }

    fn delay(self, delay: Duration) -> Delay<Self> {
        Delay {
            source: self,
            delay,
        }
    }

    fn time_scale(self, factor: f64) -> TimeScale<Self> {
        TimeScale {
            source: self,
            factor,
        }
    }
}

// Blanket implementation for all Signal types
impl<T: Signal> SignalExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstantSignal, signal_fn};

    const T: Duration = Duration::from_millis(100);

    #[test]
    fn test_multiply() {
        let mult = Multiply::new(ConstantSignal(2.0), ConstantSignal(3.0));
        assert_eq!(mult.value_at(T), 6.0);
    }

    #[test]
    fn test_add() {
        let add = Add::new(ConstantSignal(2.0), ConstantSignal(3.0));
        assert_eq!(add.value_at(T), 5.0);
    }

    #[test]
    fn test_gain() {
        let gain = Gain {
            source: ConstantSignal(2.0),
            gain: 0.5.into(),
        };
        assert_eq!(gain.value_at(T), 1.0);
    }

    #[test]
    fn test_offset() {
        let offset = Offset {
            source: ConstantSignal(2.0),
            offset: 3.0.into(),
        };
        assert_eq!(offset.value_at(T), 5.0);
    }

    #[test]
    fn test_mix2() {
        let mixer = Mix2::new(ConstantSignal(1.0), 0.25, ConstantSignal(-1.0), 0.75);
        assert_eq!(mixer.value_at(T), -0.5);
    }

    #[test]
    fn test_operands_see_the_same_offset() {
        let clock = signal_fn(|t: Duration| t.as_secs_f64());
        let squared = Multiply::new(&clock, &clock);
        assert_eq!(squared.value_at(Duration::from_secs(3)), 9.0);
    }

    #[test]
    fn test_modulated_gain_follows_time() {
        let ramp = signal_fn(|t: Duration| t.as_secs_f64());
        let gained = ConstantSignal(2.0).gain(ramp);
        assert_eq!(gained.value_at(Duration::ZERO), 0.0);
        assert_eq!(gained.value_at(Duration::from_millis(500)), 1.0);
    }

    #[test]
    fn test_signal_ext_chaining() {
        let signal = ConstantSignal(2.0)
            .multiply(ConstantSignal(3.0))
            .gain(0.5)
            .offset(1.0);

        // (2.0 * 3.0) * 0.5 + 1.0 = 4.0
        assert_eq!(signal.value_at(T), 4.0);
    }

    #[test]
    fn test_clamp() {
        let clamped = Clamp {
            source: ConstantSignal(2.0),
            min: -1.0,
            max: 1.0,
        };
        assert_eq!(clamped.value_at(T), 1.0);

        let clamped2 = ConstantSignal(-2.0).clamp(-1.0, 1.0);
        assert_eq!(clamped2.value_at(T), -1.0);
    }

    #[test]
    fn test_map() {
        let mapped = Map {
            source: ConstantSignal(2.0),
            func: |x| x * 2.0,
        };
        assert_eq!(mapped.value_at(T), 4.0);
    }

    #[test]
    fn test_invert_and_abs() {
        assert_eq!(ConstantSignal(2.0).invert().value_at(T), -2.0);
        assert_eq!(ConstantSignal(-2.0).abs().value_at(T), 2.0);
    }

    #[test]
    fn test_crossfade() {
        let half = Crossfade::new(ConstantSignal(1.0), ConstantSignal(3.0), 0.5);
        assert_eq!(half.value_at(T), 2.0);

        let dry = Crossfade::new(ConstantSignal(1.0), ConstantSignal(3.0), 0.0);
        assert_eq!(dry.value_at(T), 1.0);

        // Out-of-range mix is clamped
        let wet = Crossfade::new(ConstantSignal(1.0), ConstantSignal(3.0), 4.0);
        assert_eq!(wet.value_at(T), 3.0);
    }

    #[test]
    fn test_delay() {
        let clock = signal_fn(|t: Duration| t.as_secs_f64());
        let late = clock.delay(Duration::from_secs(2));
        assert_eq!(late.value_at(Duration::from_secs(1)), 0.0);
        assert_eq!(late.value_at(Duration::from_secs(2)), 0.0);
        assert_eq!(late.value_at(Duration::from_secs(5)), 3.0);
    }

    #[test]
    fn test_time_scale() {
        let clock = signal_fn(|t: Duration| t.as_secs_f64());
        let fast = (&clock).time_scale(2.0);
        assert_eq!(fast.value_at(Duration::from_secs(3)), 6.0);

        let frozen = (&clock).time_scale(-1.0);
        assert_eq!(frozen.value_at(Duration::from_secs(3)), 0.0);

        let saturated = clock.time_scale(f64::INFINITY);
        assert_eq!(
            saturated.value_at(Duration::from_secs(1)),
            Duration::MAX.as_secs_f64()
        );
    }

    #[test]
    fn test_complex_chain() {
        // (2.0 + 1.0) * 0.5 = 1.5, clamped to [0.0, 1.0] = 1.0
        let signal = ConstantSignal(2.0)
            .add(ConstantSignal(1.0))
            .gain(0.5)
            .clamp(0.0, 1.0);
        assert_eq!(signal.value_at(T), 1.0);
    }
}
