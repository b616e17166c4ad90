//! # Stratum Scope
//!
//! Sample-array preprocessing for audio visualization. Takes decoded audio
//! (mono or stereo, `f64`) and prepares it for plotting or re-export.
//!
//! ## Features
//!
//! - **Silence trimming**: crop leading/trailing frames where every channel is silent
//! - **Peak normalization**: rescale to unit peak, with an explicit no-op for silence
//! - **Mid/side coding**: invertible L/R ⇄ M/S transform for stereo-width views
//! - **Block reversal**: reverse frame order within equal time segments
//! - **Channel splitting**: deinterleave stereo into left/right mono arrays
//! - **Polarity inversion**
//!
//! ## Quick Start
//!
//! ```
//! use stratum_scope::{preprocess, PreprocessConfig, SampleArray};
//!
//! let samples = SampleArray::stereo(vec![[0.0, 0.0], [0.25, -0.5], [0.1, 0.2], [0.0, 0.0]]);
//! let result = preprocess(&samples, 44100, &PreprocessConfig::default())?;
//!
//! assert_eq!(result.metadata.frames_out, 2);
//! assert_eq!(result.array.peak(), 1.0);
//! # Ok::<(), stratum_scope::PreprocessError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! WAV file → io::wav → SampleArray → preprocessing steps (caller-ordered) → SampleArray → plot / export
//! ```
//!
//! Every transform is a pure function over a borrowed [`SampleArray`]; the
//! crate holds no global state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod preprocessing;
pub mod result;

// Re-export main types
pub use config::{PreprocessConfig, Step};
pub use error::PreprocessError;
pub use io::sample_buffer::{ChannelCount, SampleArray};
pub use preprocessing::mid_side::MidSideDirection;
pub use result::{PreprocessMetadata, PreprocessResult};

use preprocessing::channel_splitter::split;
use preprocessing::mid_side::mid_side;
use preprocessing::normalization::normalize;
use preprocessing::polarity::invert;
use preprocessing::reverse::reverse;
use preprocessing::silence::trim;

/// Run a preprocessing chain
///
/// Applies `config.steps` in order to a copy of `samples` and reports what
/// each step did.
///
/// # Arguments
///
/// * `samples` - Decoded mono or stereo audio
/// * `sample_rate` - Sample rate in Hz, passed through to the metadata
/// * `config` - Steps to run and silence policy
///
/// # Errors
///
/// Returns `PreprocessError` if `sample_rate` is zero, a reverse step's
/// subdivision does not divide the frame count, or `reject_silent` is set
/// and the audio turns out to be fully silent.
///
/// # Example
///
/// ```
/// use stratum_scope::{preprocess, MidSideDirection, PreprocessConfig, SampleArray, Step};
///
/// let config = PreprocessConfig {
///     steps: vec![Step::MidSide { direction: MidSideDirection::Encode }],
///     reject_silent: false,
/// };
/// let samples = SampleArray::stereo(vec![[1.0, 0.0], [0.0, 1.0]]);
/// let result = preprocess(&samples, 48000, &config)?;
/// assert_eq!(result.array, SampleArray::stereo(vec![[0.5, 0.5], [0.5, -0.5]]));
/// # Ok::<(), stratum_scope::PreprocessError>(())
/// ```
pub fn preprocess(
    samples: &SampleArray,
    sample_rate: u32,
    config: &PreprocessConfig,
) -> Result<PreprocessResult, PreprocessError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting preprocessing: {} {} frames at {} Hz, {} steps",
        samples.len(),
        samples.channels(),
        sample_rate,
        config.steps.len()
    );

    if sample_rate == 0 {
        return Err(PreprocessError::InvalidInput(
            "Invalid sample rate".to_string(),
        ));
    }

    let mut array = samples.clone();
    let mut normalization_applied = None;
    let mut normalization_peak = None;
    let mut mid_side_direction = None;
    let mut steps_applied = Vec::with_capacity(config.steps.len());

    for step in &config.steps {
        array = match *step {
            Step::Trim => {
                let trimmed = trim(&array);
                if trimmed.is_empty() && config.reject_silent {
                    return Err(PreprocessError::DegenerateInput(
                        "Audio is entirely silent after trimming".to_string(),
                    ));
                }
                trimmed
            }
            Step::Normalize => {
                let normalized = normalize(&array);
                if !normalized.applied && config.reject_silent {
                    return Err(PreprocessError::DegenerateInput(
                        "Audio is entirely silent, cannot normalize".to_string(),
                    ));
                }
                normalization_applied = Some(normalized.applied);
                normalization_peak = Some(normalized.peak);
                normalized.array
            }
            Step::MidSide { direction } => {
                mid_side_direction = Some(direction);
                mid_side(&array, direction)
            }
            Step::Reverse { subdivision } => reverse(&array, subdivision)?,
            Step::Invert => invert(&array),
        };
        steps_applied.push(step.name().to_string());
    }

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Preprocessing done: {} -> {} frames in {:.3} ms",
        samples.len(),
        array.len(),
        processing_time_ms
    );

    Ok(PreprocessResult {
        metadata: PreprocessMetadata {
            frames_in: samples.len(),
            frames_out: array.len(),
            channels: array.channels(),
            sample_rate,
            duration_seconds: array.duration_secs(sample_rate),
            normalization_applied,
            normalization_peak,
            mid_side: mid_side_direction,
            steps_applied,
            processing_time_ms,
        },
        array,
    })
}

/// Run a preprocessing chain and split the stereo result into left/right
///
/// Convenience for views that plot channels separately.
///
/// # Errors
///
/// Everything [`preprocess`] can return, plus
/// [`PreprocessError::WrongChannelCount`] if the chain's output is mono.
pub fn preprocess_split(
    samples: &SampleArray,
    sample_rate: u32,
    config: &PreprocessConfig,
) -> Result<(SampleArray, SampleArray, PreprocessMetadata), PreprocessError> {
    let result = preprocess(samples, sample_rate, config)?;
    let (left, right) = split(&result.array)?;
    Ok((left, right, result.metadata))
}
