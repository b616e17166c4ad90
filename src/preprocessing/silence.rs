//! Silence detection and trimming utilities
//!
//! A sample is silent when its absolute value does not exceed
//! [`SILENCE_EPSILON`]. Trimming removes leading and trailing frames in which
//! every channel is silent, and keeps any frame where at least one channel
//! carries signal. The result is a pure crop of the input: content, order and
//! channel arrangement are untouched.
//!
//! Algorithm:
//! 1. Compute a non-silence mask over every sample
//! 2. For each channel, find the first and last non-silent frame
//! 3. Crop from the earliest first index to the latest last index (inclusive)
//!
//! A fully silent array trims to an empty array of the same channel layout.

use crate::io::sample_buffer::SampleArray;

/// Silence threshold: machine epsilon for `f64`
pub const SILENCE_EPSILON: f64 = f64::EPSILON;

/// Boolean mask of non-silent samples
///
/// Has the same interleaved shape as the array's samples; an entry is true
/// where `|x| > SILENCE_EPSILON`.
pub fn non_silence_mask(array: &SampleArray) -> Vec<bool> {
    array
        .samples()
        .iter()
        .map(|&x| x.abs() > SILENCE_EPSILON)
        .collect()
}

/// First and last non-silent frame index for each channel
///
/// Returns one entry per channel in channel order; `None` marks a channel
/// that is silent throughout. Ties resolve to the leftmost frame for the
/// first index and the rightmost frame for the last index.
pub fn channel_bounds(array: &SampleArray) -> Vec<Option<(usize, usize)>> {
    let arity = array.channels().arity();
    let mask = non_silence_mask(array);

    (0..arity)
        .map(|channel| {
            let mut column = mask.iter().skip(channel).step_by(arity);
            let first = column.clone().position(|&loud| loud)?;
            let last = column.rposition(|&loud| loud)?;
            Some((first, last))
        })
        .collect()
}

/// Inclusive frame range spanning signal in any channel
///
/// Start is the earliest first non-silent frame across channels, end is the
/// latest last non-silent frame. `None` if every channel is silent.
pub fn non_silent_range(array: &SampleArray) -> Option<(usize, usize)> {
    channel_bounds(array)
        .into_iter()
        .flatten()
        .reduce(|(start, end), (first, last)| (start.min(first), end.max(last)))
}

/// Trim leading and trailing silence
///
/// # Arguments
///
/// * `array` - Mono or stereo samples
///
/// # Returns
///
/// The frames `[start, end]` of `array`, or an empty array with the same
/// channel layout if the input is silent throughout
///
/// # Example
///
/// ```
/// use stratum_scope::preprocessing::silence::trim;
/// use stratum_scope::SampleArray;
///
/// let samples = SampleArray::stereo(vec![[0.0, 0.0], [0.0, 0.3], [0.2, 0.0], [0.0, 0.0]]);
/// let trimmed = trim(&samples);
/// assert_eq!(trimmed, SampleArray::stereo(vec![[0.0, 0.3], [0.2, 0.0]]));
/// ```
pub fn trim(array: &SampleArray) -> SampleArray {
    log::debug!(
        "Trimming silence from {} {} frames",
        array.len(),
        array.channels()
    );

    match non_silent_range(array) {
        Some((start, end)) => {
            log::debug!(
                "Keeping frames {}..={}, dropped {} leading and {} trailing",
                start,
                end,
                start,
                array.len() - end - 1
            );
            array.slice_frames(start, end + 1)
        }
        None => {
            if !array.is_empty() {
                log::warn!("Audio is entirely silent, trimming to empty");
            }
            SampleArray::empty(array.channels())
        }
    }
}
