//! Core utilities shared by the texture filters.
//!
//! This module provides:
//! - Flat pixel index <-> (x, y) coordinate conversion
//! - The [`Sample`] abstraction over u8 and f32 channel values
//! - RGBA shape validation

use ndarray::{ArrayBase, Ix3, RawData};

use crate::error::{TextureError, TextureResult};

/// Flat pixel index of `(x, y)` in a row-major image `width` pixels wide.
///
/// Coordinates are not bounds-checked, so the result can be used for offsets.
#[inline]
pub const fn pixel_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// Inverse of [`pixel_index`]: `(x, y)` for a flat pixel index.
///
/// `width` must be non-zero.
#[inline]
pub const fn pixel_coordinates(idx: usize, width: usize) -> (usize, usize) {
    (idx % width, idx / width)
}

/// Channel value that can be compared against 0.0-1.0 thresholds.
///
/// Implemented for `u8` (0-255) and `f32` (0.0-1.0) so each filter is
/// written once for both bit depths.
pub trait Sample: Copy + Send + Sync + 'static {
    /// Fully transparent / black.
    const ZERO: Self;

    /// Value normalized to 0.0-1.0.
    fn to_unit(self) -> f32;

    /// Convert a 0.0-1.0 value to this sample type.
    fn from_unit(value: f32) -> Self;
}

impl Sample for u8 {
    const ZERO: Self = 0;

    #[inline]
    fn to_unit(self) -> f32 {
        f32::from(self) / 255.0
    }

    #[inline]
    fn from_unit(value: f32) -> Self {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Sample for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn to_unit(self) -> f32 {
        self
    }

    #[inline]
    fn from_unit(value: f32) -> Self {
        value
    }
}

/// Ensure an image is laid out as (height, width, 4).
pub fn ensure_rgba<S: RawData>(image: &ArrayBase<S, Ix3>) -> TextureResult<()> {
    let channels = image.dim().2;
    if channels == 4 {
        Ok(())
    } else {
        Err(TextureError::not_rgba(channels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_index_row_major() {
        assert_eq!(pixel_index(0, 0, 4), 0);
        assert_eq!(pixel_index(3, 0, 4), 3);
        assert_eq!(pixel_index(0, 1, 4), 4);
        assert_eq!(pixel_index(2, 3, 4), 14);
    }

    #[test]
    fn test_index_coordinates_round_trip() {
        for (width, height) in [(1, 1), (4, 4), (7, 3), (3, 9)] {
            for y in 0..height {
                for x in 0..width {
                    let idx = pixel_index(x, y, width);
                    assert!(idx < width * height);
                    assert_eq!(pixel_coordinates(idx, width), (x, y));
                }
            }
        }
    }

    #[test]
    fn test_u8_sample_conversion() {
        assert_eq!(u8::from_unit(0.0), 0);
        assert_eq!(u8::from_unit(1.0), 255);
        assert_eq!(u8::from_unit(0.5), 128);
        assert_eq!(u8::from_unit(2.0), 255);
        assert!((255u8.to_unit() - 1.0).abs() < f32::EPSILON);
        assert!(0u8.to_unit().abs() < f32::EPSILON);
    }

    #[test]
    fn test_ensure_rgba() {
        assert!(ensure_rgba(&Array3::<u8>::zeros((2, 2, 4))).is_ok());
        assert_eq!(
            ensure_rgba(&Array3::<f32>::zeros((2, 2, 3))),
            Err(TextureError::not_rgba(3))
        );
    }
}
