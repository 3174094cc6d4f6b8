//! Error types for sampling, decoding and rendering.

use std::fmt;
use std::io;
use std::time::Duration;

/// Rejected sampling parameters.
///
/// Raised by the sampler before any signal evaluation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// The sample rate was zero.
    ZeroRate,
    /// `from + span` does not fit in a `Duration`.
    WindowOverflow { from: Duration, span: Duration },
    /// The window holds more frames than a `usize` can count.
    TooManyFrames { rate: u32, span: Duration },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::ZeroRate => write!(f, "sample rate must be positive"),
            SampleError::WindowOverflow { from, span } => {
                write!(f, "sampling window {from:?} + {span:?} overflows")
            }
            SampleError::TooManyFrames { rate, span } => {
                write!(f, "{span:?} at {rate} Hz yields too many frames")
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// A byte buffer that is not a whole number of PCM samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer length is not a multiple of the sample width.
    TrailingBytes { len: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TrailingBytes { len } => {
                write!(f, "{len} bytes is not a whole number of 8-byte samples")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Failure of a full sample-encode-write run.
#[derive(Debug)]
pub enum RenderError {
    Sample(SampleError),
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Sample(e) => write!(f, "Sampling error: {e}"),
            RenderError::Io(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Sample(e) => Some(e),
            RenderError::Io(e) => Some(e),
        }
    }
}

impl From<SampleError> for RenderError {
    fn from(e: SampleError) -> Self {
        RenderError::Sample(e)
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        RenderError::Io(e)
    }
}
