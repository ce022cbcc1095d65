//! # Stratum Prep
//!
//! Offline audio preprocessing: turns a raw byte stream into fixed-length,
//! normalized, band-limited sample segments ready for feature extraction or
//! model input.
//!
//! ## Stages
//!
//! - **Sampling**: one unsigned 8-bit sample per byte, mapped to `[-1.0, 1.0]`
//! - **Resampling**: linear interpolation at a real-valued rate ratio
//! - **Normalization**: zero mean, unit variance
//! - **Low-pass filtering**: single-pole recursive filter
//! - **Segmentation**: fixed-length slices, last one may be shorter
//!
//! ## Quick Start
//!
//! ```
//! use stratum_prep::{Pipeline, PipelineConfig};
//!
//! // Raw unsigned 8-bit PCM, already read by the caller
//! let bytes: Vec<u8> = (0..1600).map(|i| (128.0 + 90.0 * (i as f32 * 0.05).sin()) as u8).collect();
//!
//! let pipeline = Pipeline::new(PipelineConfig::default());
//! let segments = pipeline.process(&bytes)?;
//!
//! println!("{} segments at {} Hz", segments.len(), segments[0].sample_rate());
//! # Ok::<(), stratum_prep::PreprocessError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Raw bytes → Sampler → Resampler → Normalizer → LowPassFilter → Segmenter → Segments
//! ```
//!
//! Every stage consumes its input buffer and returns a new one. Errors carry
//! the failing [`Stage`] and the offending value.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod preprocessing;

// Re-export main types
pub use config::PipelineConfig;
pub use error::{PreprocessError, Result, Stage};
pub use io::audio_buffer::AudioBuffer;
pub use pipeline::{process, Pipeline};
