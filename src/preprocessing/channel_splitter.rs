//! Channel splitting (stereo to left/right mono)

use crate::error::{PreprocessError, Result};
use crate::io::sample_buffer::{ChannelCount, SampleArray};

/// Deinterleave a stereo array into left and right mono arrays
///
/// Both outputs have the input's frame count and keep its time order.
///
/// # Errors
///
/// Returns [`PreprocessError::WrongChannelCount`] for mono input
///
/// # Example
///
/// ```
/// use stratum_scope::preprocessing::channel_splitter::split;
/// use stratum_scope::SampleArray;
///
/// let stereo = SampleArray::stereo(vec![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
/// let (left, right) = split(&stereo)?;
/// assert_eq!(left.samples(), &[1.0, 2.0, 3.0]);
/// assert_eq!(right.samples(), &[4.0, 5.0, 6.0]);
/// # Ok::<(), stratum_scope::PreprocessError>(())
/// ```
pub fn split(array: &SampleArray) -> Result<(SampleArray, SampleArray)> {
    if array.channels() != ChannelCount::Stereo {
        return Err(PreprocessError::WrongChannelCount {
            expected: ChannelCount::Stereo,
            actual: array.channels(),
        });
    }

    log::debug!("Splitting {} stereo frames", array.len());

    let (left, right): (Vec<f64>, Vec<f64>) =
        array.frames().map(|frame| (frame[0], frame[1])).unzip();
    Ok((SampleArray::mono(left), SampleArray::mono(right)))
}

/// Interleave two mono arrays into one stereo array
///
/// Inverse of [`split`].
///
/// # Errors
///
/// Returns [`PreprocessError::WrongChannelCount`] if either input is not
/// mono, or [`PreprocessError::LengthMismatch`] if their lengths differ
pub fn interleave(left: &SampleArray, right: &SampleArray) -> Result<SampleArray> {
    for channel in [left, right] {
        if channel.channels() != ChannelCount::Mono {
            return Err(PreprocessError::WrongChannelCount {
                expected: ChannelCount::Mono,
                actual: channel.channels(),
            });
        }
    }

    if left.len() != right.len() {
        return Err(PreprocessError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let frames = left
        .samples()
        .iter()
        .zip(right.samples())
        .map(|(&l, &r)| [l, r])
        .collect();
    Ok(SampleArray::stereo(frames))
}
