//! Single-pole recursive low-pass filter
//!
//! Exponential smoothing derived from the cutoff / sample-rate pair:
//!
//! ```text
//! alpha = 1 - exp(-2π · fc / fs)
//! y[n]  = y[n-1] + alpha · (x[n] - y[n-1])
//! ```
//!
//! The filter state starts at the first input sample (`y[-1] = x[0]`), so a
//! constant signal passes through unchanged from the first output on.
//!
//! # Example
//!
//! ```
//! use stratum_prep::io::audio_buffer::AudioBuffer;
//! use stratum_prep::preprocessing::filter::low_pass;
//!
//! let buffer = AudioBuffer::new(vec![0.5; 256], 48000)?;
//! let filtered = low_pass(buffer, 4000.0)?;
//! assert!(filtered.samples().iter().all(|&x| (x - 0.5).abs() < 1e-6));
//! # Ok::<(), stratum_prep::PreprocessError>(())
//! ```

use crate::error::{PreprocessError, Result, Stage};
use crate::io::audio_buffer::AudioBuffer;

/// One-pole low-pass filter state
#[derive(Debug, Clone)]
pub struct OnePoleLowPass {
    alpha: f32,
    state: Option<f32>,
}

impl OnePoleLowPass {
    /// Create a filter for `cutoff_hz` at `sample_rate`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `0 < cutoff_hz < sample_rate / 2`.
    pub fn new(cutoff_hz: f32, sample_rate: u32) -> Result<Self> {
        let nyquist = sample_rate as f32 / 2.0;
        if !cutoff_hz.is_finite() || cutoff_hz <= 0.0 || cutoff_hz >= nyquist {
            return Err(PreprocessError::invalid(
                Stage::LowPassFilter,
                "cutoff_hz",
                cutoff_hz,
                format!("must satisfy 0 < cutoff < {} Hz (Nyquist at {} Hz)", nyquist, sample_rate),
            ));
        }

        let alpha = 1.0 - (-2.0 * std::f64::consts::PI * cutoff_hz as f64 / sample_rate as f64).exp();
        Ok(Self {
            alpha: alpha as f32,
            state: None,
        })
    }

    /// Smoothing coefficient
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Process a single sample
    #[inline]
    pub fn process(&mut self, sample: f32) -> f32 {
        let prev = self.state.unwrap_or(sample);
        let output = prev + self.alpha * (sample - prev);
        self.state = Some(output);
        output
    }

    /// Forget the filter history; the next sample seeds the state again
    pub fn reset(&mut self) {
        self.state = None;
    }
}

/// Low-pass filter a buffer at `cutoff_hz`
///
/// # Errors
///
/// Returns `InvalidParameter` if the cutoff is not below the buffer's Nyquist
/// frequency or is not positive. Empty input yields empty output.
pub fn low_pass(buffer: AudioBuffer, cutoff_hz: f32) -> Result<AudioBuffer> {
    let mut filter = OnePoleLowPass::new(cutoff_hz, buffer.sample_rate())?;

    log::debug!(
        "Low-pass filtering {} samples at {:.1} Hz (fs={} Hz, alpha={:.6})",
        buffer.len(),
        cutoff_hz,
        buffer.sample_rate(),
        filter.alpha()
    );

    let sample_rate = buffer.sample_rate();
    let mut samples = buffer.into_samples();
    for sample in samples.iter_mut() {
        *sample = filter.process(*sample);
    }

    Ok(AudioBuffer::from_parts(samples, sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, len: usize, sample_rate: u32) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    fn rms(xs: &[f32]) -> f32 {
        (xs.iter().map(|&x| x * x).sum::<f32>() / xs.len() as f32).sqrt()
    }

    #[test]
    fn test_dc_passes_unchanged() {
        let buffer = AudioBuffer::new(vec![-0.75; 1000], 16000).unwrap();
        let out = low_pass(buffer.clone(), 1000.0).unwrap();
        assert_eq!(out, buffer);
    }

    #[test]
    fn test_initial_state_is_first_sample() {
        let mut filter = OnePoleLowPass::new(1000.0, 16000).unwrap();
        assert_eq!(filter.process(0.8), 0.8);
        let y1 = filter.process(0.0);
        assert!((y1 - 0.8 * (1.0 - filter.alpha())).abs() < 1e-6);

        filter.reset();
        assert_eq!(filter.process(-0.3), -0.3);
    }

    #[test]
    fn test_alpha_formula() {
        let filter = OnePoleLowPass::new(4000.0, 48000).unwrap();
        let expected = 1.0 - (-2.0 * std::f64::consts::PI * 4000.0 / 48000.0).exp();
        assert!((filter.alpha() as f64 - expected).abs() < 1e-6);
    }

    #[test]
    fn test_high_frequency_attenuated_more_than_low() {
        let rate = 48000;
        let low = sine(100.0, 4800, rate);
        let high = sine(12000.0, 4800, rate);

        let low_out = low_pass(AudioBuffer::new(low.clone(), rate).unwrap(), 500.0).unwrap();
        let high_out = low_pass(AudioBuffer::new(high.clone(), rate).unwrap(), 500.0).unwrap();

        let low_gain = rms(low_out.samples()) / rms(&low);
        let high_gain = rms(high_out.samples()) / rms(&high);
        assert!(low_gain > 0.9, "low gain = {}", low_gain);
        assert!(high_gain < 0.1, "high gain = {}", high_gain);
    }

    #[test]
    fn test_alternating_signal_heavily_attenuated() {
        // [1, -1, 1, -1, ...] sits exactly at Nyquist; steady-state gain is alpha / (2 - alpha)
        let input: Vec<f32> = (0..1600).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let out = low_pass(AudioBuffer::new(input, 16000).unwrap(), 200.0).unwrap();

        let tail_peak = out.samples()[200..].iter().fold(0.0f32, |m, &x| m.max(x.abs()));
        assert!(tail_peak < 0.05, "tail peak = {}", tail_peak);
    }

    #[test]
    fn test_cutoff_at_or_above_nyquist_rejected() {
        for cutoff in [8000.0, 9000.0] {
            let buffer = AudioBuffer::new(vec![0.0; 8], 16000).unwrap();
            let err = low_pass(buffer, cutoff).unwrap_err();
            assert_eq!(err.stage(), Some(Stage::LowPassFilter));
        }
    }

    #[test]
    fn test_non_positive_or_nan_cutoff_rejected() {
        for cutoff in [0.0, -100.0, f32::NAN, f32::INFINITY] {
            let buffer = AudioBuffer::new(vec![0.0; 8], 16000).unwrap();
            assert!(low_pass(buffer, cutoff).is_err(), "cutoff {} accepted", cutoff);
        }
    }

    #[test]
    fn test_empty_input() {
        let out = low_pass(AudioBuffer::empty(16000).unwrap(), 1000.0).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.sample_rate(), 16000);
    }
}
