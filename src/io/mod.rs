//! Audio I/O modules
//!
//! Sample array types and the WAV file boundary.

pub mod sample_buffer;
pub mod wav;
