//! Preprocessing result types

use serde::Serialize;

use crate::io::sample_buffer::{ChannelCount, SampleArray};
use crate::preprocessing::mid_side::MidSideDirection;

/// Output of a preprocessing chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreprocessResult {
    /// Transformed samples
    pub array: SampleArray,
    /// What the chain did
    pub metadata: PreprocessMetadata,
}

/// Metadata describing a preprocessing run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreprocessMetadata {
    /// Frames before processing
    pub frames_in: usize,
    /// Frames after processing
    pub frames_out: usize,
    /// Channel layout of the output
    pub channels: ChannelCount,
    /// Sample rate in Hz, passed through unchanged
    pub sample_rate: u32,
    /// Duration of the output in seconds
    pub duration_seconds: f64,
    /// Whether normalization scaled the audio (last normalize step wins)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalization_applied: Option<bool>,
    /// Peak measured by the last normalize step, before scaling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalization_peak: Option<f64>,
    /// Direction of the last mid/side step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid_side: Option<MidSideDirection>,
    /// Names of the steps applied, in order
    pub steps_applied: Vec<String>,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,
}
