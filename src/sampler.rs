//! Discretizes a continuous signal into a fixed-rate frame sequence.
//!
//! Frame `i` of a window sits at `from + floor(i * 1e9 / rate)` nanoseconds.
//! The offset is computed from the integer index every time, never by
//! accumulating a step, so frame timing and frame count are exact functions
//! of the window and repeated runs are bit-identical.

use std::iter::FusedIterator;
use std::time::Duration;

use crate::Signal;
use crate::error::SampleError;
use crate::pcm::PCM_SAMPLE_BYTES;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Largest window [`sample`] will collect; its encoding must also fit in a
/// single allocation.
pub const MAX_BUFFERED_FRAMES: usize = isize::MAX as usize / PCM_SAMPLE_BYTES;

/// A validated sampling window: a rate and a span of signal time.
///
/// `span` is the length of signal time to cover starting at `from`, not an
/// absolute end offset. Every step offset strictly before `from + span` is
/// part of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    rate: u32,
    from: Duration,
    span: Duration,
    len: usize,
}

impl SampleWindow {
    /// Validates sampling parameters.
    ///
    /// # Errors
    ///
    /// - [`SampleError::ZeroRate`] if `rate` is zero
    /// - [`SampleError::WindowOverflow`] if `from + span` overflows
    /// - [`SampleError::TooManyFrames`] if the frame count exceeds `usize`
    pub fn new(rate: u32, from: Duration, span: Duration) -> Result<Self, SampleError> {
        if rate == 0 {
            return Err(SampleError::ZeroRate);
        }
        if from.checked_add(span).is_none() {
            return Err(SampleError::WindowOverflow { from, span });
        }
        let len = frame_count(rate, span)?;
        Ok(Self {
            rate,
            from,
            span,
            len,
        })
    }

    /// Samples per second.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Offset of the first frame.
    pub fn start(&self) -> Duration {
        self.from
    }

    /// Length of signal time the window covers.
    pub fn span(&self) -> Duration {
        self.span
    }

    /// Number of frames in the window.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the window holds no frames.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exact time offset of frame `index`.
    ///
    /// Indices past [`len`](Self::len) are not clamped; the result is only
    /// meaningful inside the window.
    pub fn offset(&self, index: usize) -> Duration {
        let nanos = index as u128 * NANOS_PER_SEC / u128::from(self.rate);
        self.from.saturating_add(duration_from_nanos(nanos))
    }
}

/// Number of frames `span` holds at `rate`.
///
/// This is the count of indices `i` with `i / rate < span`, i.e.
/// `ceil(span * rate)`. When `span` is a whole number of steps it equals
/// `floor(span * rate)`.
///
/// # Examples
///
/// ```
/// use humdrum::sampler::frame_count;
/// use std::time::Duration;
///
/// assert_eq!(frame_count(44_100, Duration::from_secs(5)), Ok(220_500));
/// assert_eq!(frame_count(10, Duration::from_millis(150)), Ok(2));
/// assert_eq!(frame_count(10, Duration::ZERO), Ok(0));
/// ```
pub fn frame_count(rate: u32, span: Duration) -> Result<usize, SampleError> {
    if rate == 0 {
        return Err(SampleError::ZeroRate);
    }
    // span_nanos < 2^64 * 1e9 and rate < 2^32, so the product fits in u128
    let scaled = span.as_nanos() * u128::from(rate);
    let count = scaled.div_ceil(NANOS_PER_SEC);
    usize::try_from(count).map_err(|_| SampleError::TooManyFrames { rate, span })
}

/// Samples `signal` over `span` of signal time starting at `from`.
///
/// Returns one value per step, in time order. A zero `span` yields an empty
/// sequence.
///
/// # Errors
///
/// Fails before evaluating the signal if the window is invalid (see
/// [`SampleWindow::new`]), or with [`SampleError::TooManyFrames`] if it holds
/// more than [`MAX_BUFFERED_FRAMES`]. Use [`frames`] to stream larger windows.
///
/// # Examples
///
/// ```
/// use humdrum::{sample, ConstantSignal};
/// use std::time::Duration;
///
/// let frames = sample(&ConstantSignal(0.5), 10, Duration::ZERO, Duration::from_secs(1))?;
/// assert_eq!(frames, vec![0.5; 10]);
/// # Ok::<(), humdrum::SampleError>(())
/// ```
pub fn sample<S: Signal + ?Sized>(
    signal: &S,
    rate: u32,
    from: Duration,
    span: Duration,
) -> Result<Vec<f64>, SampleError> {
    let window = SampleWindow::new(rate, from, span)?;
    if window.len() > MAX_BUFFERED_FRAMES {
        return Err(SampleError::TooManyFrames { rate, span });
    }
    Ok(frames(signal, window).collect())
}

/// Lazily samples `signal` over a validated window.
pub fn frames<S: Signal + ?Sized>(signal: &S, window: SampleWindow) -> Frames<'_, S> {
    Frames {
        signal,
        window,
        next: 0,
        end: window.len,
    }
}

/// Iterator over the frames of a [`SampleWindow`].
///
/// Each frame is evaluated independently at its exact offset, so the
/// iterator can be consumed from either end with identical values.
pub struct Frames<'a, S: ?Sized> {
    signal: &'a S,
    window: SampleWindow,
    next: usize,
    end: usize,
}

impl<S: Signal + ?Sized> Frames<'_, S> {
    /// The window being sampled.
    pub fn window(&self) -> &SampleWindow {
        &self.window
    }
}

impl<S: Signal + ?Sized> Iterator for Frames<'_, S> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.end {
            return None;
        }
        let value = self.signal.value_at(self.window.offset(self.next));
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<f64> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl<S: Signal + ?Sized> DoubleEndedIterator for Frames<'_, S> {
    fn next_back(&mut self) -> Option<f64> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.signal.value_at(self.window.offset(self.end)))
    }
}

impl<S: Signal + ?Sized> ExactSizeIterator for Frames<'_, S> {}

impl<S: Signal + ?Sized> FusedIterator for Frames<'_, S> {}

fn duration_from_nanos(nanos: u128) -> Duration {
    let secs = (nanos / NANOS_PER_SEC) as u64;
    let subsec = (nanos % NANOS_PER_SEC) as u32;
    Duration::new(secs, subsec)
}
