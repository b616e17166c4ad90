//! Polarity inversion

use crate::io::sample_buffer::SampleArray;

/// Flip the polarity (phase) of every sample
///
/// Shape and channel layout are preserved. Inverting twice restores the
/// input.
pub fn invert(array: &SampleArray) -> SampleArray {
    log::debug!(
        "Inverting polarity of {} {} frames",
        array.len(),
        array.channels()
    );
    array.map_samples(|x| -x)
}
