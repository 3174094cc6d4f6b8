//! Core signal trait and parameter types.
//!
//! This module provides the fundamental `Signal` trait that represents any
//! continuous-time source as a pure function of elapsed time, as well as the
//! `Param` type for parameters that can be either fixed or driven by another
//! signal.

use std::sync::Arc;
use std::time::Duration;

/// Common interface for all signal sources and combinators.
///
/// A signal maps a time offset to an amplitude. Evaluation takes `&self`, so
/// a signal carries no mutable state: evaluating the same offset twice always
/// yields the same value, in any order and any number of times.
///
/// Amplitudes are nominally in `[-1.0, 1.0]`, but nothing enforces it.
/// Out-of-range and non-finite values are valid outputs.
///
/// # Examples
///
/// ```
/// use humdrum::{ConstantSignal, Signal};
/// use std::time::Duration;
///
/// let dc = ConstantSignal(0.5);
/// assert_eq!(dc.value_at(Duration::ZERO), 0.5);
/// assert_eq!(dc.value_at(Duration::from_secs(3)), 0.5);
/// ```
pub trait Signal {
    /// Evaluates the signal at the given offset from its origin.
    fn value_at(&self, t: Duration) -> f64;
}

impl<S: Signal + ?Sized> Signal for &S {
    fn value_at(&self, t: Duration) -> f64 {
        (**self).value_at(t)
    }
}

impl<S: Signal + ?Sized> Signal for Box<S> {
    fn value_at(&self, t: Duration) -> f64 {
        (**self).value_at(t)
    }
}

impl<S: Signal + ?Sized> Signal for Arc<S> {
    fn value_at(&self, t: Duration) -> f64 {
        (**self).value_at(t)
    }
}

/// A constant signal that always returns the same value.
///
/// The value is not validated; NaN and infinities are returned as-is.
///
/// # Examples
///
/// ```
/// use humdrum::{ConstantSignal, Param};
///
/// let constant = ConstantSignal(0.5);
/// let param: Param = constant.into();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal(pub f64);

impl Signal for ConstantSignal {
    fn value_at(&self, _t: Duration) -> f64 {
        self.0
    }
}

impl From<f64> for ConstantSignal {
    fn from(value: f64) -> Self {
        ConstantSignal(value)
    }
}

/// Adapts a closure over time into a `Signal`.
///
/// The closure must be pure for the signal to honour the `Signal` contract.
#[derive(Clone, Copy)]
pub struct FnSignal<F>(pub F);

impl<F> Signal for FnSignal<F>
where
    F: Fn(Duration) -> f64,
{
    fn value_at(&self, t: Duration) -> f64 {
        (self.0)(t)
    }
}

/// Wraps a closure as a signal.
///
/// # Examples
///
/// ```
/// use humdrum::{signal_fn, Signal};
/// use std::time::Duration;
///
/// // A linear ramp rising by 1.0 per second.
/// let ramp = signal_fn(|t: Duration| t.as_secs_f64());
/// assert_eq!(ramp.value_at(Duration::from_millis(250)), 0.25);
/// ```
pub fn signal_fn<F>(func: F) -> FnSignal<F>
where
    F: Fn(Duration) -> f64,
{
    FnSignal(func)
}

/// A parameter that can be either a fixed value or driven by a signal.
///
/// This type is used throughout the library for parameters that can be
/// controlled either statically or by another signal evaluated at the same
/// time offset. Using `Param` instead of generics keeps type signatures
/// short and lets modulation nest to any depth, at the cost of one level of
/// dynamic dispatch.
///
/// # Examples
///
/// ```
/// use humdrum::{Param, SineOscillator};
/// use std::time::Duration;
///
/// let fixed: Param = 0.5.into();
/// assert_eq!(fixed.value_at(Duration::from_secs(1)), 0.5);
///
/// let lfo = SineOscillator::new(2.0);
/// let modulated = Param::modulated(lfo);
/// assert!(!modulated.is_fixed());
/// ```
pub enum Param {
    /// A fixed, constant value
    Fixed(f64),
    /// A value taken from a signal at the evaluation offset
    Signal(Box<dyn Signal + Send + Sync>),
}

impl Param {
    /// Gets the value of the parameter at the given offset.
    pub fn value_at(&self, t: Duration) -> f64 {
        match self {
            Param::Fixed(v) => *v,
            Param::Signal(s) => s.value_at(t),
        }
    }

    /// Creates a fixed parameter with the given value.
    pub fn fixed(value: f64) -> Self {
        Param::Fixed(value)
    }

    /// Creates a parameter controlled by a signal source.
    pub fn modulated(signal: impl Signal + Send + Sync + 'static) -> Self {
        Param::Signal(Box::new(signal))
    }

    /// Returns true if this parameter is fixed (non-modulated).
    pub fn is_fixed(&self) -> bool {
        matches!(self, Param::Fixed(_))
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Param::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Param::Signal(_) => f.write_str("Signal(..)"),
        }
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Fixed(value)
    }
}

impl<S: Signal + Send + Sync + 'static> From<S> for Param {
    fn from(signal: S) -> Self {
        Param::Signal(Box::new(signal))
    }
}
