//! Stage composition
//!
//! raw bytes → sampler → resampler → normalizer → low-pass filter → segmenter
//!
//! The first failing stage ends the run and its error is returned unchanged.

use std::io::Read;
use std::time::Instant;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::io::audio_buffer::AudioBuffer;
use crate::io::sampler;
use crate::preprocessing::filter::low_pass;
use crate::preprocessing::normalization::normalize;
use crate::preprocessing::resample::resample_method;
use crate::preprocessing::segmentation::segment_with;

/// Configured preprocessing pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline for `config`
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage over `bytes`
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a bad configuration value, `DegenerateSignal` if
    /// the resampled signal has zero variance.
    pub fn process(&self, bytes: &[u8]) -> Result<Vec<AudioBuffer>> {
        let start_time = Instant::now();
        let config = &self.config;

        let sampled = sampler::sample(bytes, config.input_sample_rate)?;
        let resampled = resample_method(sampled, config.target_sample_rate, config.resample_method)?;
        let normalized = normalize(resampled)?;
        let filtered = low_pass(normalized, config.cutoff_hz)?;
        let segments = segment_with(filtered, &config.segment_config())?;

        log::debug!(
            "Preprocessed {} bytes into {} segments in {:.2} ms",
            bytes.len(),
            segments.len(),
            start_time.elapsed().as_secs_f64() * 1000.0
        );

        Ok(segments)
    }

    /// Read `reader` to the end, then [`process`](Self::process) its bytes
    pub fn process_reader<R: Read>(&self, mut reader: R) -> Result<Vec<AudioBuffer>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.process(&bytes)
    }
}

/// Run the full pipeline with explicit parameters and linear interpolation
///
/// # Example
///
/// ```
/// let bytes: Vec<u8> = (0..100).map(|i| (i * 37 % 256) as u8).collect();
/// let segments = stratum_prep::process(&bytes, 16000, 48000, 4000.0, 64)?;
/// assert_eq!(segments.len(), 5);
/// # Ok::<(), stratum_prep::PreprocessError>(())
/// ```
pub fn process(
    bytes: &[u8],
    input_sample_rate: u32,
    target_sample_rate: u32,
    cutoff_hz: f32,
    segment_size: usize,
) -> Result<Vec<AudioBuffer>> {
    Pipeline::new(PipelineConfig {
        input_sample_rate,
        target_sample_rate,
        cutoff_hz,
        segment_size,
        ..Default::default()
    })
    .process(bytes)
}
