//! Fixed-length segmentation
//!
//! A buffer of `len` samples yields `ceil(len / segment_size)` segments in
//! temporal order. The final segment keeps whatever remains unless padding is
//! requested.

use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, Result, Stage};
use crate::io::audio_buffer::AudioBuffer;

/// Segmentation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Samples per segment (default: 64)
    pub segment_size: usize,

    /// Zero-pad the final segment up to `segment_size` (default: false)
    pub pad_last: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            segment_size: 64,
            pad_last: false,
        }
    }
}

/// Slice a buffer into `segment_size`-sample segments, last one possibly shorter
///
/// # Errors
///
/// Returns `InvalidParameter` if `segment_size` is zero.
///
/// # Example
///
/// ```
/// use stratum_prep::io::audio_buffer::AudioBuffer;
/// use stratum_prep::preprocessing::segmentation::segment;
///
/// let buffer = AudioBuffer::new((0..10).map(|i| i as f32).collect(), 16000)?;
/// let segments = segment(buffer, 3)?;
/// let lengths: Vec<usize> = segments.iter().map(|s| s.len()).collect();
/// assert_eq!(lengths, vec![3, 3, 3, 1]);
/// # Ok::<(), stratum_prep::PreprocessError>(())
/// ```
pub fn segment(buffer: AudioBuffer, segment_size: usize) -> Result<Vec<AudioBuffer>> {
    segment_with(
        buffer,
        &SegmentConfig {
            segment_size,
            pad_last: false,
        },
    )
}

/// Slice a buffer according to `config`
pub fn segment_with(buffer: AudioBuffer, config: &SegmentConfig) -> Result<Vec<AudioBuffer>> {
    let size = config.segment_size;
    if size == 0 {
        return Err(PreprocessError::invalid(
            Stage::Segmenter,
            "segment_size",
            size,
            "must be > 0",
        ));
    }

    let num_segments = buffer.len().div_ceil(size);
    log::debug!(
        "Segmenting {} samples into {} segments of {} (pad_last={})",
        buffer.len(),
        num_segments,
        size,
        config.pad_last
    );

    let segments: Vec<AudioBuffer> = buffer
        .samples()
        .chunks(size)
        .map(|chunk| {
            let mut samples = chunk.to_vec();
            if config.pad_last {
                samples.resize(size, 0.0);
            }
            buffer.with_samples(samples)
        })
        .collect();

    Ok(segments)
}

/// Apply `f` to every segment, in parallel when the `parallel` feature is on
///
/// Results come back in segment order.
#[cfg(feature = "parallel")]
pub fn par_map_segments<T, F>(segments: &[AudioBuffer], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&AudioBuffer) -> T + Sync + Send,
{
    use rayon::prelude::*;
    segments.par_iter().map(f).collect()
}

/// Apply `f` to every segment, in parallel when the `parallel` feature is on
///
/// Results come back in segment order.
#[cfg(not(feature = "parallel"))]
pub fn par_map_segments<T, F>(segments: &[AudioBuffer], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&AudioBuffer) -> T + Sync + Send,
{
    segments.iter().map(f).collect()
}
