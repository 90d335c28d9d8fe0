//! Error types for texture operations.

use thiserror::Error;

/// Result type alias for texture operations.
pub type TextureResult<T> = Result<T, TextureError>;

/// Precondition violations detected before a pass touches any pixel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextureError {
    /// Image does not carry an alpha channel in RGBA layout.
    #[error("expected RGBA image with 4 channels, got {channels}")]
    NotRgba {
        /// Channel count found on the input array.
        channels: usize,
    },

    /// Flat buffer does not match the declared dimensions.
    #[error("buffer length {actual} does not match {expected} (width * height * 4)")]
    BufferLength {
        /// Length implied by width and height.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Alpha threshold outside the 0.0-1.0 range.
    #[error("alpha threshold {0} is outside 0.0-1.0")]
    InvalidThreshold(f32),

    /// Outline color component outside the 0.0-1.0 range.
    #[error("color component {0} is outside 0.0-1.0")]
    InvalidColor(f32),
}

impl TextureError {
    /// Create a channel count error.
    #[must_use]
    pub const fn not_rgba(channels: usize) -> Self {
        Self::NotRgba { channels }
    }

    /// Create a buffer length mismatch error.
    #[must_use]
    pub const fn buffer_length(expected: usize, actual: usize) -> Self {
        Self::BufferLength { expected, actual }
    }
}

/// Check that a threshold lies in 0.0-1.0 (rejects NaN).
pub(crate) fn check_threshold(threshold: f32) -> TextureResult<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(TextureError::InvalidThreshold(threshold))
    }
}
