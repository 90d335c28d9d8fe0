//! Parameters for the outline pass.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{check_threshold, TextureError, TextureResult};

/// Alpha above which a pixel counts as painted and seeds an outline.
pub const OUTLINE_SEED_THRESHOLD: f32 = 0.2;

/// Default cutoff for [`clear_alpha`](crate::filters::alpha): alpha strictly
/// below it is forced to zero.
pub const CLEAR_ALPHA_THRESHOLD: f32 = 0.05;

/// Outline configuration.
///
/// # Example
///
/// ```
/// use texture_outline::OutlineParams;
///
/// let params = OutlineParams::default()
///     .color([1.0, 0.0, 0.0, 1.0])
///     .width(3);
/// assert_eq!(params.width, 3);
/// assert!((params.seed_threshold - 0.2).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutlineParams {
    /// Outline color as RGBA, 0.0-1.0.
    pub color: [f32; 4],

    /// Outline radius in pixels. Zero leaves the image untouched.
    pub width: u32,

    /// Alpha separating painted pixels (above) from background (below).
    /// Pixels exactly at the threshold are neither seeded nor recolored.
    pub seed_threshold: f32,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0, 1.0],
            width: 1,
            seed_threshold: OUTLINE_SEED_THRESHOLD,
        }
    }
}

impl OutlineParams {
    /// Create params with a color and radius, keeping the default threshold.
    #[must_use]
    pub const fn new(color: [f32; 4], width: u32) -> Self {
        Self {
            color,
            width,
            seed_threshold: OUTLINE_SEED_THRESHOLD,
        }
    }

    /// Set the outline color.
    #[must_use]
    pub const fn color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Set the outline radius.
    #[must_use]
    pub const fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the painted/background alpha threshold.
    #[must_use]
    pub const fn seed_threshold(mut self, threshold: f32) -> Self {
        self.seed_threshold = threshold;
        self
    }

    /// Reject NaN or out-of-range color components and thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::InvalidColor`] or
    /// [`TextureError::InvalidThreshold`].
    pub fn validate(&self) -> TextureResult<()> {
        if let Some(&c) = self.color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            return Err(TextureError::InvalidColor(c));
        }
        check_threshold(self.seed_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = OutlineParams::default();
        assert_eq!(params.width, 1);
        assert_eq!(params.color, [0.0, 0.0, 0.0, 1.0]);
        assert!((params.seed_threshold - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_thresholds_are_independent() {
        assert!((OUTLINE_SEED_THRESHOLD - 0.2).abs() < f32::EPSILON);
        assert!((CLEAR_ALPHA_THRESHOLD - 0.05).abs() < f32::EPSILON);
    }

    #[test]
    fn test_builder_pattern() {
        let params = OutlineParams::new([0.0, 1.0, 0.0, 1.0], 4)
            .width(2)
            .seed_threshold(0.5);

        assert_eq!(params.color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(params.width, 2);
        assert!((params.seed_threshold - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate() {
        assert!(OutlineParams::default().validate().is_ok());

        let bad_color = OutlineParams::default().color([1.2, 0.0, 0.0, 1.0]);
        assert_eq!(bad_color.validate(), Err(TextureError::InvalidColor(1.2)));

        let bad_threshold = OutlineParams::default().seed_threshold(-0.5);
        assert_eq!(
            bad_threshold.validate(),
            Err(TextureError::InvalidThreshold(-0.5))
        );

        let nan = OutlineParams::default().color([0.0, f32::NAN, 0.0, 1.0]);
        assert!(nan.validate().is_err());
    }
}
