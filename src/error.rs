//! Error types for the preprocessing pipeline

use std::fmt;

use thiserror::Error;

/// Pipeline stage that raised an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Byte stream to sample conversion
    Sampler,
    /// Sample rate conversion
    Resampler,
    /// Zero-mean / unit-variance scaling
    Normalizer,
    /// Single-pole low-pass filter
    LowPassFilter,
    /// Fixed-length slicing
    Segmenter,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Sampler => "sampler",
            Stage::Resampler => "resampler",
            Stage::Normalizer => "normalizer",
            Stage::LowPassFilter => "low-pass filter",
            Stage::Segmenter => "segmenter",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during preprocessing
#[derive(Error, Debug)]
pub enum PreprocessError {
    /// A parameter is outside the stage's documented domain
    #[error("{stage}: invalid {parameter} = {value} ({reason})")]
    InvalidParameter {
        /// Stage that rejected the parameter
        stage: Stage,
        /// Parameter name
        parameter: &'static str,
        /// Offending value, formatted
        value: String,
        /// Accepted domain
        reason: String,
    },

    /// The signal has (numerically) zero variance and cannot be normalized
    #[error("{stage}: degenerate signal, std_dev = {std_dev:e} over {len} samples")]
    DegenerateSignal {
        /// Stage that detected the condition
        stage: Stage,
        /// Measured population standard deviation
        std_dev: f64,
        /// Number of samples inspected
        len: usize,
    },

    /// Reading the raw byte stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PreprocessError {
    pub(crate) fn invalid(
        stage: Stage,
        parameter: &'static str,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        PreprocessError::InvalidParameter {
            stage,
            parameter,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Stage that raised the error, if any
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PreprocessError::InvalidParameter { stage, .. }
            | PreprocessError::DegenerateSignal { stage, .. } => Some(*stage),
            PreprocessError::Io(_) => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PreprocessError>;
