//! Error types for the preprocessing layer

use crate::io::sample_buffer::ChannelCount;
use thiserror::Error;

/// Errors that can occur while preprocessing a sample array
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// The operation requires a different channel layout than it received
    #[error("Wrong channel count: expected {expected}, got {actual}")]
    WrongChannelCount {
        /// Channel layout the operation requires
        expected: ChannelCount,
        /// Channel layout that was supplied
        actual: ChannelCount,
    },

    /// Frame count is not evenly divisible by the requested subdivision
    #[error("Invalid subdivision: {frames} frames cannot be split into {subdivision} equal segments")]
    InvalidSubdivision {
        /// Number of frames in the array
        frames: usize,
        /// Requested segment count
        subdivision: usize,
    },

    /// Input is fully silent where silence cannot be tolerated
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Interleaved data does not form a whole number of frames
    #[error("Ragged frames: {len} samples do not divide into {channels} frames")]
    RaggedFrames {
        /// Number of interleaved samples supplied
        len: usize,
        /// Channel layout the samples were tagged with
        channels: ChannelCount,
    },

    /// Two channels that must be paired have different lengths
    #[error("Length mismatch: left has {left} samples, right has {right}")]
    LengthMismatch {
        /// Left channel length
        left: usize,
        /// Right channel length
        right: usize,
    },

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// WAV file read/write error
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience result type for preprocessing operations
pub type Result<T> = std::result::Result<T, PreprocessError>;
