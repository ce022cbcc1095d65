//! Sample rate conversion by interpolation
//!
//! Output sample `i` reads the fractional source position `i / ratio`, where
//! `ratio = target_rate / source_rate` is kept as a real number. The output
//! holds `round(len * ratio)` samples.
//!
//! # Example
//!
//! ```
//! use stratum_prep::io::audio_buffer::AudioBuffer;
//! use stratum_prep::preprocessing::resample::resample;
//!
//! let buffer = AudioBuffer::new(vec![0.0, 1.0, 0.0, -1.0], 16000)?;
//! let up = resample(buffer, 48000)?;
//! assert_eq!(up.len(), 12);
//! assert_eq!(up.sample_rate(), 48000);
//! # Ok::<(), stratum_prep::PreprocessError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, Result, Stage};
use crate::io::audio_buffer::AudioBuffer;

/// Strategy for reading a sample at a fractional source position
pub trait Interpolation {
    /// Value at `position` (in source samples). `samples` is never empty and
    /// `position` is never negative.
    fn interpolate(&self, samples: &[f32], position: f64) -> f32;
}

/// Linear interpolation between the two nearest source samples
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Interpolation for Linear {
    #[inline]
    fn interpolate(&self, samples: &[f32], position: f64) -> f32 {
        let last = samples.len() - 1;
        if position >= last as f64 {
            return samples[last];
        }
        let idx = position.floor() as usize;
        let frac = (position - idx as f64) as f32;
        samples[idx] + (samples[idx + 1] - samples[idx]) * frac
    }
}

/// Zero-order hold: repeats the source sample at or before the position
#[derive(Debug, Clone, Copy, Default)]
pub struct Nearest;

impl Interpolation for Nearest {
    #[inline]
    fn interpolate(&self, samples: &[f32], position: f64) -> f32 {
        let idx = (position.floor() as usize).min(samples.len() - 1);
        samples[idx]
    }
}

/// Interpolation method selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleMethod {
    /// [`Linear`] (default)
    #[default]
    Linear,
    /// [`Nearest`]
    Nearest,
}

/// Resample with linear interpolation
///
/// # Errors
///
/// Returns `InvalidParameter` if `target_sample_rate` is zero.
pub fn resample(buffer: AudioBuffer, target_sample_rate: u32) -> Result<AudioBuffer> {
    resample_with(buffer, target_sample_rate, &Linear)
}

/// Resample using the configured [`ResampleMethod`]
pub fn resample_method(
    buffer: AudioBuffer,
    target_sample_rate: u32,
    method: ResampleMethod,
) -> Result<AudioBuffer> {
    match method {
        ResampleMethod::Linear => resample_with(buffer, target_sample_rate, &Linear),
        ResampleMethod::Nearest => resample_with(buffer, target_sample_rate, &Nearest),
    }
}

/// Resample using any [`Interpolation`] strategy
pub fn resample_with<I: Interpolation + ?Sized>(
    buffer: AudioBuffer,
    target_sample_rate: u32,
    interpolation: &I,
) -> Result<AudioBuffer> {
    if target_sample_rate == 0 {
        return Err(PreprocessError::invalid(
            Stage::Resampler,
            "target_sample_rate",
            target_sample_rate,
            "must be > 0",
        ));
    }

    let source_rate = buffer.sample_rate();
    if source_rate == target_sample_rate {
        return Ok(buffer);
    }

    let ratio = target_sample_rate as f64 / source_rate as f64;
    let output_len = (buffer.len() as f64 * ratio).round() as usize;

    log::debug!(
        "Resampling {} samples {} Hz -> {} Hz (ratio {:.6}, {} out)",
        buffer.len(),
        source_rate,
        target_sample_rate,
        ratio,
        output_len
    );

    let source = buffer.samples();
    let output: Vec<f32> = if source.is_empty() {
        Vec::new()
    } else {
        (0..output_len)
            .map(|i| interpolation.interpolate(source, i as f64 / ratio))
            .collect()
    };

    Ok(AudioBuffer::from_parts(output, target_sample_rate))
}
