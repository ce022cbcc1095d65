//! Mono sample buffer shared by every pipeline stage

use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, Result, Stage};

/// Ordered mono samples at a known, positive sample rate
///
/// Buffers are plain values: stages take one by value and hand back a new one.
/// Deserialization goes through [`AudioBuffer::new`], so a zero rate is
/// rejected there too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAudioBuffer")]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

/// Unvalidated wire form of [`AudioBuffer`]
#[derive(Deserialize)]
struct RawAudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl TryFrom<RawAudioBuffer> for AudioBuffer {
    type Error = PreprocessError;

    fn try_from(raw: RawAudioBuffer) -> Result<Self> {
        AudioBuffer::new(raw.samples, raw.sample_rate)
    }
}

impl AudioBuffer {
    /// Create a buffer, rejecting a zero sample rate
    ///
    /// Buffers originate in the sampler, so a zero rate is reported as a
    /// [`Stage::Sampler`] error whichever caller constructs the buffer.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(PreprocessError::invalid(
                Stage::Sampler,
                "sample_rate",
                sample_rate,
                "must be > 0",
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Buffer with no samples
    pub fn empty(sample_rate: u32) -> Result<Self> {
        Self::new(Vec::new(), sample_rate)
    }

    /// Rebuild with new samples at the same rate. The rate is already validated.
    pub(crate) fn with_samples(&self, samples: Vec<f32>) -> Self {
        Self {
            samples,
            sample_rate: self.sample_rate,
        }
    }

    pub(crate) fn from_parts(samples: Vec<f32>, sample_rate: u32) -> Self {
        debug_assert!(sample_rate > 0);
        Self {
            samples,
            sample_rate,
        }
    }

    /// Samples in temporal order
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds (`len / sample_rate`)
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Take ownership of the samples
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}
