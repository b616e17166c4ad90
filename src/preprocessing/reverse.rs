//! Block-wise time reversal
//!
//! Splits an array along the time axis into equal contiguous segments and
//! reverses frame order inside each one. Segment order is kept, and samples
//! within a frame are never reordered, so stereo pairs stay intact.

use crate::error::{PreprocessError, Result};
use crate::io::sample_buffer::SampleArray;

/// Subdivision that reverses the whole array
pub const DEFAULT_SUBDIVISION: usize = 1;

/// Reverse frame order within each of `subdivision` equal segments
///
/// Reversing twice with the same subdivision restores the input.
///
/// # Arguments
///
/// * `array` - Mono or stereo samples
/// * `subdivision` - Number of equal segments; [`DEFAULT_SUBDIVISION`]
///   reverses the entire array
///
/// # Errors
///
/// Returns [`PreprocessError::InvalidSubdivision`] if `subdivision` is zero or
/// does not evenly divide the frame count
///
/// # Example
///
/// ```
/// use stratum_scope::preprocessing::reverse::reverse;
/// use stratum_scope::SampleArray;
///
/// let samples = SampleArray::mono(vec![1.0, 2.0, 3.0, 4.0]);
/// let reversed = reverse(&samples, 2)?;
/// assert_eq!(reversed.samples(), &[2.0, 1.0, 4.0, 3.0]);
/// # Ok::<(), stratum_scope::PreprocessError>(())
/// ```
pub fn reverse(array: &SampleArray, subdivision: usize) -> Result<SampleArray> {
    let frames = array.len();

    if subdivision == 0 || frames % subdivision != 0 {
        return Err(PreprocessError::InvalidSubdivision {
            frames,
            subdivision,
        });
    }

    log::debug!(
        "Reversing {} {} frames in {} segments",
        frames,
        array.channels(),
        subdivision
    );

    let arity = array.channels().arity();
    let segment_len = frames / subdivision * arity;

    let mut samples = Vec::with_capacity(array.samples().len());
    if segment_len > 0 {
        for segment in array.samples().chunks_exact(segment_len) {
            for frame in segment.chunks_exact(arity).rev() {
                samples.extend_from_slice(frame);
            }
        }
    }

    SampleArray::from_interleaved(samples, array.channels())
}
