//! Raw byte stream to sample conversion
//!
//! Each byte is read as unsigned 8-bit PCM and mapped linearly onto
//! `[-1.0, 1.0]`:
//!
//! ```text
//! x = byte / 127.5 - 1.0        0 -> -1.0, 128 -> ~0.0039, 255 -> 1.0
//! ```
//!
//! One byte yields exactly one sample. The declared rate is stored on the
//! buffer as metadata and never changes how many samples are produced.

use std::io::Read;

use crate::error::{PreprocessError, Result, Stage};
use crate::io::audio_buffer::AudioBuffer;

const HALF_RANGE: f32 = 127.5;

/// Map one unsigned 8-bit sample to `[-1.0, 1.0]`
#[inline]
pub fn byte_to_sample(byte: u8) -> f32 {
    byte as f32 / HALF_RANGE - 1.0
}

/// Inverse of [`byte_to_sample`]; values outside `[-1.0, 1.0]` are clamped
#[inline]
pub fn sample_to_byte(sample: f32) -> u8 {
    ((sample.clamp(-1.0, 1.0) + 1.0) * HALF_RANGE).round() as u8
}

/// Convert a byte stream into an [`AudioBuffer`] at `input_sample_rate`
///
/// # Errors
///
/// Returns `InvalidParameter` if `input_sample_rate` is zero. An empty stream
/// is not an error.
///
/// # Example
///
/// ```
/// use stratum_prep::io::sampler::sample;
///
/// let buffer = sample(&[0, 255, 0, 255], 16000)?;
/// assert_eq!(buffer.len(), 4);
/// assert_eq!(buffer.samples()[0], -1.0);
/// # Ok::<(), stratum_prep::PreprocessError>(())
/// ```
pub fn sample(bytes: &[u8], input_sample_rate: u32) -> Result<AudioBuffer> {
    if input_sample_rate == 0 {
        return Err(PreprocessError::invalid(
            Stage::Sampler,
            "input_sample_rate",
            input_sample_rate,
            "must be > 0",
        ));
    }

    let samples: Vec<f32> = bytes.iter().map(|&b| byte_to_sample(b)).collect();
    log::debug!(
        "Sampled {} bytes at {} Hz ({:.3} s)",
        samples.len(),
        input_sample_rate,
        samples.len() as f64 / input_sample_rate as f64
    );

    AudioBuffer::new(samples, input_sample_rate)
}

/// Read `reader` to the end and sample its contents
pub fn sample_reader<R: Read>(mut reader: R, input_sample_rate: u32) -> Result<AudioBuffer> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    sample(&bytes, input_sample_rate)
}
