//! Raw PCM encoding: mono, 64-bit IEEE-754 floats, big-endian, no header.
//!
//! An encoded buffer is exactly `8 * frames` bytes. The sample rate is not
//! part of the stream and has to travel alongside it. Because there is no
//! header, encoded buffers can be concatenated to append frames.

use std::io::{self, BufWriter, Write};

use crate::error::DecodeError;

/// Width of one encoded sample in bytes.
pub const PCM_SAMPLE_BYTES: usize = 8;

/// Encodes frames as big-endian IEEE-754 doubles.
///
/// Total over all inputs: NaN payloads, infinities and out-of-range values
/// are written bit-for-bit.
///
/// # Examples
///
/// ```
/// use humdrum::encode;
///
/// let bytes = encode(&[1.0]);
/// assert_eq!(bytes, [0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
/// assert!(encode(&[]).is_empty());
/// ```
pub fn encode(frames: &[f64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(frames.len() * PCM_SAMPLE_BYTES);
    encode_into(frames, &mut out);
    out
}

/// Appends the encoding of `frames` to `out`.
pub fn encode_into(frames: &[f64], out: &mut Vec<u8>) {
    out.reserve(frames.len() * PCM_SAMPLE_BYTES);
    for frame in frames {
        out.extend_from_slice(&frame.to_be_bytes());
    }
}

/// Decodes a buffer produced by [`encode`].
///
/// Reconstructs every 64-bit pattern exactly, NaN payloads included.
///
/// # Errors
///
/// Returns [`DecodeError::TrailingBytes`] if the length is not a multiple of
/// [`PCM_SAMPLE_BYTES`].
pub fn decode(bytes: &[u8]) -> Result<Vec<f64>, DecodeError> {
    let chunks = bytes.chunks_exact(PCM_SAMPLE_BYTES);
    if !chunks.remainder().is_empty() {
        return Err(DecodeError::TrailingBytes { len: bytes.len() });
    }
    Ok(chunks
        .map(|chunk| {
            let mut raw = [0u8; PCM_SAMPLE_BYTES];
            raw.copy_from_slice(chunk);
            f64::from_be_bytes(raw)
        })
        .collect())
}

/// Streams frames to `sink` and flushes it.
///
/// Writes go through a [`BufWriter`]; the buffer is flushed before a
/// successful return, and dropped (with a best-effort flush) on error.
/// Returns the number of bytes written. Errors are not retried.
pub fn write_frames<W, I>(sink: W, frames: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = f64>,
{
    let mut writer = BufWriter::new(sink);
    let mut written = 0;
    for frame in frames {
        writer.write_all(&frame.to_be_bytes())?;
        written += PCM_SAMPLE_BYTES;
    }
    writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_patterns() {
        let bytes = encode(&[0.0, 1.0, -1.0]);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[0..8], &[0u8; 8]);
        assert_eq!(&bytes[8..16], &[0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[16..24], &[0xBF, 0xF0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_empty() {
        assert!(encode(&[]).is_empty());
        assert_eq!(decode(&[]), Ok(vec![]));
    }

    #[test]
    fn test_round_trip_is_bit_exact() {
        let frames = [
            0.0,
            -0.0,
            0.5,
            -1.0,
            f64::MIN_POSITIVE,
            f64::MAX,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
            f64::from_bits(0x7FF8_0000_DEAD_BEEF),
            12.75,
        ];
        let decoded = decode(&encode(&frames)).unwrap();
        assert_eq!(decoded.len(), frames.len());
        for (original, restored) in frames.iter().zip(&decoded) {
            assert_eq!(original.to_bits(), restored.to_bits());
        }
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = encode(&[0.25, 0.5]);
        bytes.push(0);
        assert_eq!(decode(&bytes), Err(DecodeError::TrailingBytes { len: 17 }));
        assert_eq!(
            decode(&[1, 2, 3]),
            Err(DecodeError::TrailingBytes { len: 3 })
        );
    }

    #[test]
    fn test_concatenation_appends_frames() {
        let mut bytes = encode(&[0.1, 0.2]);
        encode_into(&[0.3], &mut bytes);
        assert_eq!(decode(&bytes).unwrap(), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_write_frames_matches_encode() {
        let frames = vec![0.0, 0.25, -0.75, 1.0];
        let mut sink = Vec::new();
        let written = write_frames(&mut sink, frames.iter().copied()).unwrap();
        assert_eq!(written, 32);
        assert_eq!(sink, encode(&frames));
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_write_frames_surfaces_sink_failure() {
        let err = write_frames(ClosedSink, [0.5; 4]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
