//! Noise generators.
//!
//! Noise here is a pure function of time: the value at an offset is derived
//! from a seed and the offset itself, so repeated evaluation is stable.

mod white;

pub use white::WhiteNoise;
