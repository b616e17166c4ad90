//! Sample-array preprocessing transforms
//!
//! Stateless transforms applied to decoded audio before plotting:
//! - Silence trimming
//! - Peak normalization
//! - Mid/side encoding and decoding
//! - Block-wise reversal
//! - Channel splitting (stereo to left/right)
//! - Polarity inversion
//!
//! Every transform borrows its input and returns a new array.

pub mod channel_splitter;
pub mod mid_side;
pub mod normalization;
pub mod polarity;
pub mod reverse;
pub mod silence;
