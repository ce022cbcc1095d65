//! Audio input
//!
//! The shared sample buffer and the byte-stream sampler.

pub mod audio_buffer;
pub mod sampler;
