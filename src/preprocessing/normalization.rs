//! Zero-mean / unit-variance normalization
//!
//! Each sample becomes `(x - mean) / std_dev`, with the population mean and
//! population standard deviation of the whole buffer. Statistics accumulate in
//! `f64` so long buffers do not drift.
//!
//! # Example
//!
//! ```
//! use stratum_prep::io::audio_buffer::AudioBuffer;
//! use stratum_prep::preprocessing::normalization::normalize;
//!
//! let buffer = AudioBuffer::new(vec![1.0, 3.0, 1.0, 3.0], 16000)?;
//! let normalized = normalize(buffer)?;
//! assert_eq!(normalized.samples(), &[-1.0, 1.0, -1.0, 1.0]);
//! # Ok::<(), stratum_prep::PreprocessError>(())
//! ```

use crate::error::{PreprocessError, Result, Stage};
use crate::io::audio_buffer::AudioBuffer;

/// Population statistics of a sample sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl SignalStats {
    /// Measure mean and population standard deviation (both 0 when empty)
    pub fn measure(samples: &[f32]) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
            };
        }

        let first = samples[0];
        if samples.iter().all(|&x| x == first) {
            return Self {
                mean: first as f64,
                std_dev: 0.0,
            };
        }

        let n = samples.len() as f64;
        let mean = samples.iter().map(|&x| x as f64).sum::<f64>() / n;
        let variance = samples
            .iter()
            .map(|&x| {
                let d = x as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// True if the signal has zero (or unmeasurable) variance
    pub fn is_degenerate(&self) -> bool {
        self.std_dev.is_nan() || self.std_dev == 0.0
    }
}

/// Normalize to zero mean and unit variance
///
/// # Errors
///
/// Returns `DegenerateSignal` for empty or constant input, or when the scaled
/// samples would not fit in `f32`, instead of producing NaN or infinite samples.
pub fn normalize(buffer: AudioBuffer) -> Result<AudioBuffer> {
    let stats = SignalStats::measure(buffer.samples());
    match scale(buffer.samples(), stats) {
        Some(samples) => Ok(buffer.with_samples(samples)),
        None => Err(PreprocessError::DegenerateSignal {
            stage: Stage::Normalizer,
            std_dev: stats.std_dev,
            len: buffer.len(),
        }),
    }
}

/// `(x - mean) / std_dev` for every sample, `None` if any result is not finite
fn scale(samples: &[f32], stats: SignalStats) -> Option<Vec<f32>> {
    if stats.is_degenerate() {
        return None;
    }

    log::debug!(
        "Normalizing {} samples: mean={:.6e}, std_dev={:.6e}",
        samples.len(),
        stats.mean,
        stats.std_dev
    );

    let scaled: Vec<f32> = samples
        .iter()
        .map(|&x| ((x as f64 - stats.mean) / stats.std_dev) as f32)
        .collect();

    if scaled.iter().all(|x| x.is_finite()) {
        Some(scaled)
    } else {
        None
    }
}

/// Normalize, or return the input unchanged when it is degenerate
///
/// A caller-side recovery policy; the pipeline itself never uses it.
pub fn normalize_or_passthrough(buffer: AudioBuffer) -> AudioBuffer {
    let stats = SignalStats::measure(buffer.samples());
    match scale(buffer.samples(), stats) {
        Some(samples) => buffer.with_samples(samples),
        None => {
            log::warn!(
                "Signal is degenerate over {} samples (std_dev={:e}), passing through unnormalized",
                buffer.len(),
                stats.std_dev
            );
            buffer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_test_signal(length: usize, amplitude: f32, offset: f32) -> Vec<f32> {
        (0..length)
            .map(|i| {
                let t = i as f32 / 16000.0;
                offset + amplitude * (2.0 * std::f32::consts::PI * 440.0 * t).sin()
            })
            .collect()
    }

    #[test]
    fn test_mean_zero_std_one() {
        let buffer = AudioBuffer::new(generate_test_signal(16000, 0.3, 0.7), 16000).unwrap();
        let out = normalize(buffer).unwrap();

        let stats = SignalStats::measure(out.samples());
        assert!(stats.mean.abs() < 1e-5, "mean = {}", stats.mean);
        assert!((stats.std_dev - 1.0).abs() < 1e-5, "std_dev = {}", stats.std_dev);
    }

    #[test]
    fn test_subtraction_binds_before_division() {
        // mean 10, std_dev 2: (12 - 10) / 2 = 1, not 12 - 10 / 2 = 7
        let buffer = AudioBuffer::new(vec![8.0, 12.0], 8000).unwrap();
        let out = normalize(buffer).unwrap();
        assert_eq!(out.samples(), &[-1.0, 1.0]);
        assert_eq!(out.sample_rate(), 8000);
    }

    #[test]
    fn test_constant_signal_is_degenerate() {
        let buffer = AudioBuffer::new(vec![0.25; 1000], 16000).unwrap();
        let err = normalize(buffer).unwrap_err();
        assert!(matches!(
            err,
            PreprocessError::DegenerateSignal {
                stage: Stage::Normalizer,
                len: 1000,
                ..
            }
        ));
    }

    #[test]
    fn test_low_amplitude_signal_normalizes() {
        let buffer = AudioBuffer::new(vec![0.0, 1e-11, 0.0, 1e-11], 16000).unwrap();
        let out = normalize(buffer).unwrap();
        let expected = [-1.0f32, 1.0, -1.0, 1.0];
        for (x, e) in out.samples().iter().zip(expected) {
            assert!((x - e).abs() < 1e-6, "got {:?}", out.samples());
        }
    }

    #[test]
    fn test_non_finite_input_is_degenerate() {
        for bad in [f32::NAN, f32::INFINITY] {
            let buffer = AudioBuffer::new(vec![0.1, bad, -0.2, 0.3], 16000).unwrap();
            let err = normalize(buffer.clone()).unwrap_err();
            assert!(matches!(err, PreprocessError::DegenerateSignal { len: 4, .. }));
            assert_eq!(normalize_or_passthrough(buffer.clone()).len(), 4);
        }
    }

    #[test]
    fn test_empty_signal_is_degenerate() {
        let err = normalize(AudioBuffer::empty(16000).unwrap()).unwrap_err();
        assert!(matches!(err, PreprocessError::DegenerateSignal { len: 0, .. }));
    }

    #[test]
    fn test_passthrough_keeps_degenerate_input() {
        let buffer = AudioBuffer::new(vec![0.5; 32], 16000).unwrap();
        let out = normalize_or_passthrough(buffer.clone());
        assert_eq!(out, buffer);

        let varied = AudioBuffer::new(vec![0.0, 2.0], 16000).unwrap();
        assert_eq!(normalize_or_passthrough(varied).samples(), &[-1.0, 1.0]);
    }

    #[test]
    fn test_stats_of_known_values() {
        let stats = SignalStats::measure(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
    }
}
