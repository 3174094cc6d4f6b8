//! End-to-end rendering of a tone into encoded PCM.

use std::io::Write;
use std::time::Duration;

use crate::error::{RenderError, SampleError};
use crate::pcm::{encode, write_frames};
use crate::sampler::{SampleWindow, frames, sample};
use crate::{Signal, SineOscillator};

/// Parameters for rendering a sine tone.
///
/// The sample rate is not embedded in the output; consumers need it
/// out-of-band to interpret the stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneConfig {
    /// Oscillator frequency in Hz
    pub frequency: f64,
    /// Length of signal time to render
    pub duration: Duration,
    /// Samples per second
    pub sample_rate: u32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            frequency: 440.0,
            duration: Duration::from_secs(5),
            sample_rate: 44_100,
        }
    }
}

impl ToneConfig {
    /// The oscillator this configuration describes.
    pub fn signal(&self) -> SineOscillator {
        SineOscillator::new(self.frequency)
    }

    /// The sampling window starting at the signal origin.
    pub fn window(&self) -> Result<SampleWindow, SampleError> {
        SampleWindow::new(self.sample_rate, Duration::ZERO, self.duration)
    }
}

/// Samples `signal` from its origin and encodes the frames.
///
/// # Examples
///
/// ```
/// use humdrum::{render, ConstantSignal};
/// use std::time::Duration;
///
/// let bytes = render(&ConstantSignal(0.5), 10, Duration::from_secs(1))?;
/// assert_eq!(bytes.len(), 80);
/// # Ok::<(), humdrum::SampleError>(())
/// ```
pub fn render<S: Signal + ?Sized>(
    signal: &S,
    rate: u32,
    duration: Duration,
) -> Result<Vec<u8>, SampleError> {
    let frames = sample(signal, rate, Duration::ZERO, duration)?;
    Ok(encode(&frames))
}

/// Renders the configured tone into a byte buffer.
pub fn render_tone(config: &ToneConfig) -> Result<Vec<u8>, SampleError> {
    render(&config.signal(), config.sample_rate, config.duration)
}

/// Streams the configured tone to `sink` without materializing the frames.
///
/// Returns the number of bytes written.
pub fn render_tone_to<W: Write>(config: &ToneConfig, sink: W) -> Result<usize, RenderError> {
    let window = config.window()?;
    let signal = config.signal();
    Ok(write_frames(sink, frames(&signal, window))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pcm::decode;

    #[test]
    fn test_default_matches_reference_tone() {
        let config = ToneConfig::default();
        assert_eq!(config.frequency, 440.0);
        assert_eq!(config.duration, Duration::from_secs(5));
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.window().unwrap().len(), 220_500);
    }

    #[test]
    fn test_streamed_and_buffered_output_agree() {
        let config = ToneConfig {
            frequency: 220.0,
            duration: Duration::from_millis(50),
            sample_rate: 8_000,
        };
        let buffered = render_tone(&config).unwrap();
        let mut streamed = Vec::new();
        let written = render_tone_to(&config, &mut streamed).unwrap();
        assert_eq!(written, 400 * 8);
        assert_eq!(streamed, buffered);
    }

    #[test]
    fn test_zero_rate_is_a_sample_error() {
        let config = ToneConfig {
            sample_rate: 0,
            ..ToneConfig::default()
        };
        assert!(matches!(
            render_tone_to(&config, Vec::new()),
            Err(RenderError::Sample(SampleError::ZeroRate))
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_render_is_an_error() {
        let span = Duration::from_secs(1 << 31);
        assert_eq!(
            render(&crate::ConstantSignal(0.0), u32::MAX, span),
            Err(SampleError::TooManyFrames {
                rate: u32::MAX,
                span
            })
        );
    }

    #[test]
    fn test_output_starts_silent() {
        let bytes = render_tone(&ToneConfig::default()).unwrap();
        let frames = decode(&bytes).unwrap();
        assert_eq!(frames[0], 0.0);
        assert!(frames.iter().all(|f| (-1.0..=1.0).contains(f)));
    }
}
