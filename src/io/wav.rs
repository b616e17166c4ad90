//! WAV import and export
//!
//! The file boundary of the crate. Decoding and encoding are delegated to
//! `hound`; this module only converts between its integer/float sample
//! streams and [`SampleArray`].

use std::path::Path;

use hound::{SampleFormat, WavReader, WavWriter};
use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, Result};
use crate::io::sample_buffer::{ChannelCount, SampleArray};

/// Sample encoding of a WAV file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleSubtype {
    /// 16-bit signed integer PCM
    Pcm16,
    /// 24-bit signed integer PCM
    Pcm24,
    /// 32-bit signed integer PCM
    Pcm32,
    /// 32-bit IEEE float
    Float32,
}

impl SampleSubtype {
    /// Bits per sample
    pub fn bits_per_sample(self) -> u16 {
        match self {
            SampleSubtype::Pcm16 => 16,
            SampleSubtype::Pcm24 => 24,
            SampleSubtype::Pcm32 | SampleSubtype::Float32 => 32,
        }
    }

    fn sample_format(self) -> SampleFormat {
        match self {
            SampleSubtype::Float32 => SampleFormat::Float,
            _ => SampleFormat::Int,
        }
    }

    fn from_spec(spec: hound::WavSpec) -> Result<Self> {
        match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Int, 16) => Ok(SampleSubtype::Pcm16),
            (SampleFormat::Int, 24) => Ok(SampleSubtype::Pcm24),
            (SampleFormat::Int, 32) => Ok(SampleSubtype::Pcm32),
            (SampleFormat::Float, 32) => Ok(SampleSubtype::Float32),
            (format, bits) => Err(PreprocessError::InvalidInput(format!(
                "Unsupported WAV sample format: {:?} at {} bits",
                format, bits
            ))),
        }
    }

    /// Full-scale value for integer subtypes
    fn full_scale(self) -> f64 {
        (1i64 << (self.bits_per_sample() - 1)) as f64
    }
}

/// WAV header details, read without loading samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// Channel layout
    pub channels: ChannelCount,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Sample encoding
    pub subtype: SampleSubtype,
    /// Number of frames (samples per channel)
    pub frames: usize,
}

/// A decoded WAV file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedAudio {
    /// File name without directory
    pub name: String,
    /// Decoded samples, scaled to [-1.0, 1.0] for integer formats
    pub array: SampleArray,
    /// Sample encoding of the source file
    pub subtype: SampleSubtype,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

/// Read WAV metadata without decoding sample data
pub fn read_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = ChannelCount::try_from(spec.channels)?;

    Ok(WavInfo {
        channels,
        sample_rate: spec.sample_rate,
        subtype: SampleSubtype::from_spec(spec)?,
        frames: reader.len() as usize / channels.arity(),
    })
}

/// Decode a mono or stereo WAV file into a [`SampleArray`]
///
/// # Errors
///
/// Fails on I/O or format errors, on files with more than two channels, and
/// on sample encodings other than 16/24/32-bit PCM or 32-bit float.
pub fn import_array<P: AsRef<Path>>(path: P) -> Result<ImportedAudio> {
    let path = path.as_ref();
    log::debug!("Importing audio file: {}", path.display());

    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = ChannelCount::try_from(spec.channels)?;
    let subtype = SampleSubtype::from_spec(spec)?;

    let samples: Vec<f64> = match subtype {
        SampleSubtype::Float32 => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        _ => {
            let full_scale = subtype.full_scale();
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / full_scale))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let array = SampleArray::from_interleaved(samples, channels)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    log::debug!(
        "Imported {}: {} {} frames at {} Hz ({:?})",
        name,
        array.len(),
        channels,
        spec.sample_rate,
        subtype
    );

    Ok(ImportedAudio {
        name,
        array,
        subtype,
        sample_rate: spec.sample_rate,
    })
}

/// Encode a [`SampleArray`] to a WAV file
///
/// Integer subtypes are scaled by full scale and clamped to the
/// representable range; float output is written as-is.
pub fn export_array<P: AsRef<Path>>(
    path: P,
    array: &SampleArray,
    sample_rate: u32,
    subtype: SampleSubtype,
) -> Result<()> {
    let path = path.as_ref();

    if sample_rate == 0 {
        return Err(PreprocessError::InvalidInput(
            "Invalid sample rate".to_string(),
        ));
    }

    log::debug!(
        "Exporting {} {} frames to {} at {} Hz ({:?})",
        array.len(),
        array.channels(),
        path.display(),
        sample_rate,
        subtype
    );

    let spec = hound::WavSpec {
        channels: array.channels().arity() as u16,
        sample_rate,
        bits_per_sample: subtype.bits_per_sample(),
        sample_format: subtype.sample_format(),
    };
    let mut writer = WavWriter::create(path, spec)?;

    match subtype {
        SampleSubtype::Float32 => {
            for &sample in array.samples() {
                writer.write_sample(sample as f32)?;
            }
        }
        _ => {
            let full_scale = subtype.full_scale();
            for &sample in array.samples() {
                let int_sample = (sample * full_scale).clamp(-full_scale, full_scale - 1.0);
                writer.write_sample(int_sample as i32)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcm24_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tmp.wav");
        let array = SampleArray::stereo(vec![[-1.0, -0.5], [0.0, 0.5]]);

        export_array(&path, &array, 44100, SampleSubtype::Pcm24).unwrap();
        let imported = import_array(&path).unwrap();

        assert_eq!(imported.name, "tmp.wav");
        assert_eq!(imported.array, array);
        assert_eq!(imported.array.channels(), ChannelCount::Stereo);
        assert_eq!(imported.subtype, SampleSubtype::Pcm24);
        assert_eq!(imported.sample_rate, 44100);
    }

    #[test]
    fn test_export_keeps_sample_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tmp.wav");
        let array = SampleArray::stereo(vec![[-1.0, -0.5], [0.0, 0.5]]);

        export_array(&path, &array, 48000, SampleSubtype::Pcm24).unwrap();
        let info = read_info(&path).unwrap();

        assert_eq!(info.sample_rate, 48000);
        assert_eq!(info.frames, 2);
        assert_eq!(info.channels, ChannelCount::Stereo);
    }

    #[test]
    fn test_float_round_trip_mono() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("float.wav");
        let array = SampleArray::mono(vec![0.25, -0.125, 0.5, 1.5]);

        export_array(&path, &array, 22050, SampleSubtype::Float32).unwrap();
        let imported = import_array(&path).unwrap();

        assert_eq!(imported.array, array, "Float export must not clamp");
        assert_eq!(imported.subtype, SampleSubtype::Float32);
    }

    #[test]
    fn test_integer_export_clamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        let array = SampleArray::mono(vec![2.0, -2.0]);

        export_array(&path, &array, 8000, SampleSubtype::Pcm16).unwrap();
        let imported = import_array(&path).unwrap();

        assert_eq!(imported.array.samples()[0], 32767.0 / 32768.0);
        assert_eq!(imported.array.samples()[1], -1.0);
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.wav");
        let array = SampleArray::mono(vec![0.0]);
        assert!(matches!(
            export_array(&path, &array, 0, SampleSubtype::Pcm16),
            Err(PreprocessError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = import_array("/nonexistent/path/to/file.wav");
        assert!(result.is_err());
    }
}
