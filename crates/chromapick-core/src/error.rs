//! Error types for the sampling pipeline.
//!
//! Every variant indicates malformed input or an invariant violation, never a
//! transient failure, so nothing here is worth retrying.

use thiserror::Error;

/// Failures the sampling pipeline can report to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The supplied bytes could not be decoded into a pixel buffer.
    #[error("failed to decode image: {0}")]
    DecodeFailed(String),

    /// The click falls outside the declared display frame.
    #[error("click ({x}, {y}) is outside the {width}x{height} display frame")]
    OutOfDisplayBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// The transformed point falls outside the native pixel buffer. Reaching
    /// this after the display check passed means the orientation metadata and
    /// the buffer dimensions disagree.
    #[error("mapped point ({x}, {y}) is outside the {width}x{height} pixel buffer")]
    OutOfBufferBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// The pixel buffer was empty or truncated at the computed offset.
    #[error("pixel buffer is empty or truncated at byte offset {offset}")]
    PixelRead { offset: usize },
}

impl SampleError {
    /// Whether this error indicates an internal invariant violation rather
    /// than bad caller input.
    pub fn is_internal(&self) -> bool {
        matches!(self, SampleError::PixelRead { .. })
    }
}
