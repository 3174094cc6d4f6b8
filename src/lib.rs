//! Humdrum - composable continuous-time signals rendered to raw PCM
//!
//! Sound is modelled as pure functions of elapsed time. Signals compose
//! through combinators and modulatable parameters, the sampler discretizes
//! them at a fixed rate, and the encoder writes headerless big-endian f64
//! mono PCM.
//!
//! ```
//! use humdrum::{encode, sample, SineOscillator, SignalExt};
//! use std::time::Duration;
//!
//! let tone = SineOscillator::new(SineOscillator::new(5.0).gain(8.0).offset(440.0));
//! let frames = sample(&tone, 44_100, Duration::ZERO, Duration::from_millis(10))?;
//! let bytes = encode(&frames);
//! assert_eq!(bytes.len(), 441 * 8);
//! # Ok::<(), humdrum::SampleError>(())
//! ```

pub mod combinators;
pub mod error;
#[cfg(feature = "noise")]
pub mod noise;
pub mod oscillators;
pub mod pcm;
pub mod render;
pub mod sampler;
pub mod signals;

// Re-export commonly used types at the crate root
pub use combinators::{
    Abs, Add, Clamp, Crossfade, Delay, Gain, Invert, Map, Mix2, Multiply, Offset, SignalExt,
    TimeScale,
};
pub use error::{DecodeError, RenderError, SampleError};
#[cfg(feature = "noise")]
pub use noise::WhiteNoise;
pub use oscillators::{
    Oscillator, SawtoothOscillator, SineOscillator, SquareOscillator, TriangleOscillator,
};
pub use pcm::{PCM_SAMPLE_BYTES, decode, encode, encode_into, write_frames};
pub use render::{ToneConfig, render, render_tone, render_tone_to};
pub use sampler::{Frames, MAX_BUFFERED_FRAMES, SampleWindow, frame_count, frames, sample};
pub use signals::{ConstantSignal, FnSignal, Param, Signal, signal_fn};
