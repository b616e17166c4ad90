//! Peak normalization
//!
//! Rescales an array so its largest absolute sample is exactly 1.0. Mono and
//! stereo arrays are treated alike: the peak is taken over every sample, so
//! the relative balance between channels is preserved.
//!
//! # Example
//!
//! ```
//! use stratum_scope::preprocessing::normalization::normalize;
//! use stratum_scope::SampleArray;
//!
//! let samples = SampleArray::mono(vec![-50.0, -25.0, 0.0, 25.0, 50.0]);
//! let normalized = normalize(&samples);
//!
//! assert!(normalized.applied);
//! assert_eq!(normalized.array.samples(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
//! ```

use serde::Serialize;

use crate::io::sample_buffer::SampleArray;

/// Result of peak normalization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Normalized {
    /// Normalized array, or a copy of the input if nothing was applied
    pub array: SampleArray,
    /// Peak absolute amplitude measured before scaling
    pub peak: f64,
    /// False when the input was fully silent and left unchanged
    pub applied: bool,
}

/// Normalize an array to unit peak amplitude
///
/// Computes `peak = max(|x|)` over all samples. A zero peak (fully silent or
/// empty input) returns the input unchanged with `applied = false`; this is a
/// handled case, not an error. Otherwise every sample is divided by the peak.
///
/// # Arguments
///
/// * `array` - Mono or stereo samples
///
/// # Returns
///
/// [`Normalized`] carrying the scaled array, the measured peak and whether
/// scaling took place
pub fn normalize(array: &SampleArray) -> Normalized {
    let peak = array.peak();

    log::debug!(
        "Normalizing {} {} frames, peak={:.6}",
        array.len(),
        array.channels(),
        peak
    );

    if peak == 0.0 {
        log::warn!("Audio is silent, leaving it unnormalized");
        return Normalized {
            array: array.clone(),
            peak,
            applied: false,
        };
    }

    Normalized {
        array: array.map_samples(|x| x / peak),
        peak,
        applied: true,
    }
}
