//! Signal processing stages
//!
//! Each stage takes an [`AudioBuffer`](crate::io::audio_buffer::AudioBuffer)
//! by value and returns a new one:
//! - Resampling (linear interpolation)
//! - Normalization (zero mean, unit variance)
//! - Low-pass filtering (single pole)
//! - Segmentation (fixed length)

pub mod filter;
pub mod normalization;
pub mod resample;
pub mod segmentation;
