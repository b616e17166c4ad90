//! Sample arrays and channel layouts
//!
//! A [`SampleArray`] is an ordered sequence of frames stored interleaved and
//! time-major. A mono array holds one scalar per frame, a stereo array holds
//! one `(left, right)` pair per frame. Amplitudes are nominally in
//! [-1.0, 1.0] but are never clamped here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, Result};

/// Channel layout of a sample array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelCount {
    /// One channel
    Mono,
    /// Two channels, interleaved as (left, right)
    Stereo,
}

impl ChannelCount {
    /// Number of samples per frame
    pub fn arity(self) -> usize {
        match self {
            ChannelCount::Mono => 1,
            ChannelCount::Stereo => 2,
        }
    }
}

impl fmt::Display for ChannelCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelCount::Mono => write!(f, "mono"),
            ChannelCount::Stereo => write!(f, "stereo"),
        }
    }
}

impl TryFrom<u16> for ChannelCount {
    type Error = PreprocessError;

    fn try_from(channels: u16) -> Result<Self> {
        match channels {
            1 => Ok(ChannelCount::Mono),
            2 => Ok(ChannelCount::Stereo),
            n => Err(PreprocessError::InvalidInput(format!(
                "Unsupported channel count: {}",
                n
            ))),
        }
    }
}

/// Parses file-metadata channel tags ("1" / "2")
impl FromStr for ChannelCount {
    type Err = PreprocessError;

    fn from_str(s: &str) -> Result<Self> {
        let channels: u16 = s.trim().parse().map_err(|_| {
            PreprocessError::InvalidInput(format!("Unrecognized channel tag: {:?}", s))
        })?;
        ChannelCount::try_from(channels)
    }
}

/// Interleaved, time-major array of audio frames
///
/// Deserialization goes through [`SampleArray::from_interleaved`], so ragged
/// input is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSampleArray")]
pub struct SampleArray {
    samples: Vec<f64>,
    channels: ChannelCount,
}

/// Unvalidated wire form of [`SampleArray`]
#[derive(Deserialize)]
struct RawSampleArray {
    samples: Vec<f64>,
    channels: ChannelCount,
}

impl TryFrom<RawSampleArray> for SampleArray {
    type Error = PreprocessError;

    fn try_from(raw: RawSampleArray) -> Result<Self> {
        SampleArray::from_interleaved(raw.samples, raw.channels)
    }
}

impl SampleArray {
    /// Create a mono array, one sample per frame
    pub fn mono(samples: Vec<f64>) -> Self {
        Self {
            samples,
            channels: ChannelCount::Mono,
        }
    }

    /// Create a stereo array from (left, right) frames
    pub fn stereo(frames: Vec<[f64; 2]>) -> Self {
        Self {
            samples: frames.into_iter().flatten().collect(),
            channels: ChannelCount::Stereo,
        }
    }

    /// Create an array from interleaved samples
    ///
    /// # Errors
    ///
    /// Returns [`PreprocessError::RaggedFrames`] if `samples.len()` is not a
    /// multiple of the channel arity.
    pub fn from_interleaved(samples: Vec<f64>, channels: ChannelCount) -> Result<Self> {
        if samples.len() % channels.arity() != 0 {
            return Err(PreprocessError::RaggedFrames {
                len: samples.len(),
                channels,
            });
        }
        Ok(Self { samples, channels })
    }

    /// An array with no frames
    pub fn empty(channels: ChannelCount) -> Self {
        Self {
            samples: Vec::new(),
            channels,
        }
    }

    /// Channel layout
    pub fn channels(&self) -> ChannelCount {
        self.channels
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.samples.len() / self.channels.arity()
    }

    /// True if the array holds no frames
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Interleaved samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the array, returning its interleaved samples
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Iterate over frames; each item has one sample per channel
    pub fn frames(&self) -> std::slice::ChunksExact<'_, f64> {
        self.samples.chunks_exact(self.channels.arity())
    }

    /// Samples of frame `index`, or `None` if out of range
    pub fn frame(&self, index: usize) -> Option<&[f64]> {
        let arity = self.channels.arity();
        self.samples.get(index * arity..(index + 1) * arity)
    }

    /// New array with `f` applied to every sample, same channel layout
    pub(crate) fn map_samples(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            samples: self.samples.iter().map(|&x| f(x)).collect(),
            channels: self.channels,
        }
    }

    /// Copy of frames `start..end` with the same channel layout
    pub(crate) fn slice_frames(&self, start: usize, end: usize) -> Self {
        let arity = self.channels.arity();
        Self {
            samples: self.samples[start * arity..end * arity].to_vec(),
            channels: self.channels,
        }
    }

    /// Peak absolute amplitude over every sample (0.0 for an empty array)
    pub fn peak(&self) -> f64 {
        self.samples.iter().map(|&x| x.abs()).fold(0.0f64, f64::max)
    }

    /// Duration in seconds at the given sample rate
    pub fn duration_secs(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_frames_are_interleaved() {
        let array = SampleArray::stereo(vec![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
        assert_eq!(array.samples(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(array.len(), 3);
        assert_eq!(array.frame(1), Some(&[2.0, 5.0][..]));
        assert_eq!(array.frame(3), None);
    }

    #[test]
    fn test_ragged_interleaved_rejected() {
        let result = SampleArray::from_interleaved(vec![0.1, 0.2, 0.3], ChannelCount::Stereo);
        assert!(matches!(
            result,
            Err(PreprocessError::RaggedFrames { len: 3, channels: ChannelCount::Stereo })
        ));
    }

    #[test]
    fn test_deserialize_validates_frames() {
        let ragged =
            serde_json::from_str::<SampleArray>(r#"{"samples":[0.5,0.5,0.5],"channels":"Stereo"}"#);
        let err = ragged.unwrap_err();
        assert!(err.to_string().contains("Ragged frames"), "unexpected error: {}", err);

        let array =
            serde_json::from_str::<SampleArray>(r#"{"samples":[0.5,0.25],"channels":"Stereo"}"#)
                .unwrap();
        assert_eq!(array, SampleArray::stereo(vec![[0.5, 0.25]]));
    }

    #[test]
    fn test_serialize_round_trip() {
        let array = SampleArray::stereo(vec![[0.1, -0.2], [0.3, 0.0]]);
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(serde_json::from_str::<SampleArray>(&json).unwrap(), array);
    }

    #[test]
    fn test_channel_tag_parsing() {
        assert_eq!("1".parse::<ChannelCount>().unwrap(), ChannelCount::Mono);
        assert_eq!("2".parse::<ChannelCount>().unwrap(), ChannelCount::Stereo);
        assert!("6".parse::<ChannelCount>().is_err());
        assert!("stereo".parse::<ChannelCount>().is_err());
        assert!(ChannelCount::try_from(0u16).is_err());
    }

    #[test]
    fn test_peak_and_duration() {
        let array = SampleArray::mono(vec![0.25, -0.75, 0.5, 0.0]);
        assert_eq!(array.peak(), 0.75);
        assert_eq!(array.duration_secs(4), 1.0);
        assert_eq!(SampleArray::empty(ChannelCount::Mono).peak(), 0.0);
    }
}
