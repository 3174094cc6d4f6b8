//! Oscillator implementations for signal synthesis.
//!
//! This module contains the core `Oscillator` trait and the periodic waveform
//! generators. Every oscillator takes its frequency as a `Param`, so any
//! signal can drive the pitch of any other.

mod sawtooth;
mod sine;
mod square;
mod traits;
mod triangle;

pub use sawtooth::SawtoothOscillator;
pub use sine::SineOscillator;
pub use square::SquareOscillator;
pub use traits::Oscillator;
pub use triangle::TriangleOscillator;
