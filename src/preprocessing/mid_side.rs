//! Mid/side encoding and decoding
//!
//! Converts between left/right and mid/side representations with the linear
//! map
//!
//! ```text
//! encode:  mid = 0.5 * (L + R)     decode:  L = mid + side
//!          side = 0.5 * (L - R)             R = mid - side
//! ```
//!
//! The two matrices are exact inverses, so decoding an encoded array returns
//! the input up to floating-point rounding.
//!
//! Mono input is treated as a centred stereo signal (L = R). Encoding mono
//! `x` yields stereo frames `(mid = x, side = 0)`; decoding mono `m` reads it
//! as mid with zero side and yields `(L = m, R = m)`. Either way the output
//! is stereo.

use serde::{Deserialize, Serialize};

use crate::io::sample_buffer::{ChannelCount, SampleArray};

/// Direction of a mid/side transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidSideDirection {
    /// Left/right to mid/side
    Encode,
    /// Mid/side to left/right
    Decode,
}

impl MidSideDirection {
    /// Transform matrix for this direction, applied as `[a, b] -> M * [a, b]`
    fn matrix(self) -> [[f64; 2]; 2] {
        match self {
            MidSideDirection::Encode => [[0.5, 0.5], [0.5, -0.5]],
            MidSideDirection::Decode => [[1.0, 1.0], [1.0, -1.0]],
        }
    }
}

/// Apply the mid/side transform in the given direction
///
/// # Arguments
///
/// * `array` - Stereo frames, or mono treated as a centred signal
/// * `direction` - [`MidSideDirection::Encode`] or [`MidSideDirection::Decode`]
///
/// # Returns
///
/// A stereo array of `(mid, side)` frames when encoding, `(left, right)`
/// frames when decoding
///
/// # Example
///
/// ```
/// use stratum_scope::preprocessing::mid_side::{mid_side, MidSideDirection};
/// use stratum_scope::SampleArray;
///
/// let identity = SampleArray::stereo(vec![[1.0, 0.0], [0.0, 1.0]]);
/// let encoded = mid_side(&identity, MidSideDirection::Encode);
/// assert_eq!(encoded, SampleArray::stereo(vec![[0.5, 0.5], [0.5, -0.5]]));
/// assert_eq!(mid_side(&encoded, MidSideDirection::Decode), identity);
/// ```
pub fn mid_side(array: &SampleArray, direction: MidSideDirection) -> SampleArray {
    log::debug!(
        "Mid/side {:?} on {} {} frames",
        direction,
        array.len(),
        array.channels()
    );

    let [[a0, a1], [b0, b1]] = direction.matrix();

    let frames = match array.channels() {
        ChannelCount::Stereo => array
            .frames()
            .map(|frame| {
                let (x, y) = (frame[0], frame[1]);
                [a0 * x + a1 * y, b0 * x + b1 * y]
            })
            .collect(),
        ChannelCount::Mono => match direction {
            MidSideDirection::Encode => array.samples().iter().map(|&x| [x, 0.0]).collect(),
            MidSideDirection::Decode => array.samples().iter().map(|&m| [m, m]).collect(),
        },
    };

    SampleArray::stereo(frames)
}
