//! Configuration parameters for the preprocessing pipeline

use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, Result, Stage};
use crate::preprocessing::resample::ResampleMethod;
use crate::preprocessing::segmentation::SegmentConfig;

/// Pipeline configuration parameters
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    // Sampling
    /// Rate the raw byte stream was recorded at (default: 16000)
    pub input_sample_rate: u32,

    // Resampling
    /// Output sample rate (default: 48000)
    pub target_sample_rate: u32,

    /// Interpolation used for resampling (default: Linear)
    pub resample_method: ResampleMethod,

    // Filtering
    /// Low-pass cutoff in Hz, must be below `target_sample_rate / 2` (default: 4000.0)
    pub cutoff_hz: f32,

    // Segmentation
    /// Samples per segment (default: 64)
    pub segment_size: usize,

    /// Zero-pad the final segment (default: false)
    pub pad_last_segment: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_sample_rate: 16000,
            target_sample_rate: 48000,
            resample_method: ResampleMethod::Linear,
            cutoff_hz: 4000.0,
            segment_size: 64,
            pad_last_segment: false,
        }
    }
}

impl PipelineConfig {
    /// Check every parameter before any samples are touched
    ///
    /// Errors name the stage that would have rejected the value.
    pub fn validate(&self) -> Result<()> {
        if self.input_sample_rate == 0 {
            return Err(PreprocessError::invalid(
                Stage::Sampler,
                "input_sample_rate",
                self.input_sample_rate,
                "must be > 0",
            ));
        }
        if self.target_sample_rate == 0 {
            return Err(PreprocessError::invalid(
                Stage::Resampler,
                "target_sample_rate",
                self.target_sample_rate,
                "must be > 0",
            ));
        }
        let nyquist = self.target_sample_rate as f32 / 2.0;
        if !self.cutoff_hz.is_finite() || self.cutoff_hz <= 0.0 || self.cutoff_hz >= nyquist {
            return Err(PreprocessError::invalid(
                Stage::LowPassFilter,
                "cutoff_hz",
                self.cutoff_hz,
                format!("must satisfy 0 < cutoff < {} Hz", nyquist),
            ));
        }
        if self.segment_size == 0 {
            return Err(PreprocessError::invalid(
                Stage::Segmenter,
                "segment_size",
                self.segment_size,
                "must be > 0",
            ));
        }
        Ok(())
    }

    /// Segmenter options derived from this configuration
    pub fn segment_config(&self) -> SegmentConfig {
        SegmentConfig {
            segment_size: self.segment_size,
            pad_last: self.pad_last_segment,
        }
    }
}
