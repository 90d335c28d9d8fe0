//! Owned RGBA texture with the outline and alpha helpers as methods.
//!
//! Pixels are stored as f32 (0.0-1.0) in an `(height, width, 4)` array.
//! Format and mip metadata are not used by any filter; they are carried
//! through copies untouched so the host can re-upload the texture the way
//! it was created. Uploading ("apply") is left to the host.

use ndarray::{Array3, ArrayView3, ArrayViewMut3};

use crate::error::{TextureError, TextureResult};
use crate::filters::alpha::clear_alpha_f32;
use crate::filters::core::{pixel_coordinates, pixel_index, Sample};
use crate::filters::outline::outline_rgba_f32;
use crate::params::{OutlineParams, CLEAR_ALPHA_THRESHOLD};

/// Storage format the texture was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureFormat {
    /// 8 bits per channel.
    #[default]
    Rgba32,
    /// 32-bit float per channel.
    RgbaFloat,
}

/// An RGBA image plus the metadata a host texture carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pixels: Array3<f32>,
    format: TextureFormat,
    mip_map_bias: f32,
    mipmap_count: u32,
}

impl Texture {
    /// Fully transparent texture.
    #[must_use]
    pub fn new(width: usize, height: usize, format: TextureFormat) -> Self {
        Self {
            pixels: Array3::zeros((height, width, 4)),
            format,
            mip_map_bias: 0.0,
            mipmap_count: 1,
        }
    }

    /// Build from a flat RGBA8 buffer in row-major order.
    ///
    /// # Errors
    /// Returns [`TextureError::BufferLength`] if `data.len() != width * height * 4`.
    pub fn from_rgba8(width: usize, height: usize, data: &[u8]) -> TextureResult<Self> {
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(TextureError::buffer_length(expected, data.len()));
        }

        let pixels = Array3::from_shape_fn((height, width, 4), |(y, x, c)| {
            data[pixel_index(x, y, width) * 4 + c].to_unit()
        });
        Ok(Self {
            pixels,
            format: TextureFormat::Rgba32,
            mip_map_bias: 0.0,
            mipmap_count: 1,
        })
    }

    /// Build from a flat RGBA float buffer in row-major order.
    ///
    /// # Errors
    /// Returns [`TextureError::BufferLength`] if `data.len() != width * height * 4`.
    pub fn from_rgba_f32(width: usize, height: usize, data: Vec<f32>) -> TextureResult<Self> {
        let actual = data.len();
        let pixels = Array3::from_shape_vec((height, width, 4), data)
            .map_err(|_| TextureError::buffer_length(width * height * 4, actual))?;
        Ok(Self {
            pixels,
            format: TextureFormat::RgbaFloat,
            mip_map_bias: 0.0,
            mipmap_count: 1,
        })
    }

    /// Set the mip bias carried with the texture.
    #[must_use]
    pub fn with_mip_map_bias(mut self, bias: f32) -> Self {
        self.mip_map_bias = bias;
        self
    }

    /// Set the mip level count carried with the texture.
    #[must_use]
    pub fn with_mipmap_count(mut self, count: u32) -> Self {
        self.mipmap_count = count.max(1);
        self
    }

    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn mip_map_bias(&self) -> f32 {
        self.mip_map_bias
    }

    pub fn mipmap_count(&self) -> u32 {
        self.mipmap_count
    }

    pub fn view(&self) -> ArrayView3<'_, f32> {
        self.pixels.view()
    }

    pub fn view_mut(&mut self) -> ArrayViewMut3<'_, f32> {
        self.pixels.view_mut()
    }

    /// RGBA at `(x, y)`, or `None` outside the texture.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(std::array::from_fn(|c| self.pixels[[y, x, c]]))
    }

    /// Overwrite the pixel at `(x, y)`. Returns `false` outside the texture.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [f32; 4]) -> bool {
        if x >= self.width() || y >= self.height() {
            return false;
        }
        for (c, value) in rgba.into_iter().enumerate() {
            self.pixels[[y, x, c]] = value;
        }
        true
    }

    /// Flat index of `(x, y)` in the pixel buffer. Not bounds-checked.
    pub fn pixel_index(&self, x: usize, y: usize) -> usize {
        pixel_index(x, y, self.width())
    }

    /// `(x, y)` of a flat pixel index. Not bounds-checked.
    ///
    /// # Panics
    /// Panics on a zero-width texture.
    pub fn pixel_coordinates(&self, idx: usize) -> (usize, usize) {
        pixel_coordinates(idx, self.width())
    }

    /// Deep copy of pixels and metadata.
    #[must_use]
    pub fn create_copy(&self) -> Self {
        self.clone()
    }

    /// Paint an outline around painted areas, modifying this texture.
    ///
    /// # Errors
    /// Returns an error for out-of-range params; the texture is untouched.
    pub fn outline(&mut self, params: &OutlineParams) -> TextureResult<()> {
        outline_rgba_f32(self.pixels.view_mut(), params)
    }

    /// Outlined copy; this texture is not modified.
    ///
    /// # Errors
    /// Same as [`Texture::outline`].
    pub fn outlined(&self, params: &OutlineParams) -> TextureResult<Self> {
        let mut copy = self.create_copy();
        copy.outline(params)?;
        Ok(copy)
    }

    /// Zero every alpha strictly below `threshold`.
    ///
    /// # Errors
    /// Returns [`TextureError::InvalidThreshold`] outside 0.0-1.0.
    pub fn clear_alpha(&mut self, threshold: f32) -> TextureResult<()> {
        clear_alpha_f32(self.pixels.view_mut(), threshold)
    }

    /// [`Texture::clear_alpha`] with the default 0.05 cutoff.
    pub fn clear_alpha_default(&mut self) {
        // The default cutoff is in range, so this cannot fail.
        let _ = self.clear_alpha(CLEAR_ALPHA_THRESHOLD);
    }

    /// Copy with alpha cleared; this texture is not modified.
    ///
    /// # Errors
    /// Same as [`Texture::clear_alpha`].
    pub fn cleared_alpha(&self, threshold: f32) -> TextureResult<Self> {
        let mut copy = self.create_copy();
        copy.clear_alpha(threshold)?;
        Ok(copy)
    }

    /// Flat RGBA8 buffer in row-major order.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().map(|&v| u8::from_unit(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite() -> Texture {
        let mut tex = Texture::new(4, 4, TextureFormat::Rgba32)
            .with_mip_map_bias(-0.5)
            .with_mipmap_count(3);
        tex.set_pixel(1, 1, [0.0, 0.0, 1.0, 1.0]);
        tex
    }

    #[test]
    fn test_new_is_transparent() {
        let tex = Texture::new(3, 2, TextureFormat::RgbaFloat);
        assert_eq!(tex.width(), 3);
        assert_eq!(tex.height(), 2);
        assert_eq!(tex.pixel(2, 1), Some([0.0; 4]));
        assert_eq!(tex.pixel(3, 0), None);
        assert_eq!(tex.mipmap_count(), 1);
    }

    #[test]
    fn test_from_rgba8_layout() {
        // 2x1: red then half-transparent green
        let data = [255, 0, 0, 255, 0, 255, 0, 0];
        let tex = Texture::from_rgba8(2, 1, &data).unwrap();

        assert_eq!(tex.format(), TextureFormat::Rgba32);
        assert_eq!(tex.pixel(0, 0), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(tex.pixel(1, 0), Some([0.0, 1.0, 0.0, 0.0]));
        assert_eq!(tex.to_rgba8(), data.to_vec());
    }

    #[test]
    fn test_from_buffers_reject_wrong_length() {
        assert_eq!(
            Texture::from_rgba8(2, 2, &[0; 15]),
            Err(TextureError::buffer_length(16, 15))
        );
        assert_eq!(
            Texture::from_rgba_f32(2, 2, vec![0.0; 17]),
            Err(TextureError::buffer_length(16, 17))
        );
    }

    #[test]
    fn test_pixel_index_round_trip() {
        let tex = Texture::new(5, 3, TextureFormat::Rgba32);
        assert_eq!(tex.pixel_index(4, 2), 14);
        assert_eq!(tex.pixel_coordinates(14), (4, 2));
    }

    #[test]
    fn test_create_copy_keeps_metadata() {
        let tex = sprite();
        let copy = tex.create_copy();

        assert_eq!(copy, tex);
        assert!((copy.mip_map_bias() + 0.5).abs() < f32::EPSILON);
        assert_eq!(copy.mipmap_count(), 3);
    }

    #[test]
    fn test_outlined_copy_and_in_place_agree() {
        let mut tex = sprite();
        let params = OutlineParams::new([1.0, 0.0, 0.0, 1.0], 1);

        let outlined = tex.outlined(&params).unwrap();
        assert_eq!(tex, sprite());
        assert_eq!(outlined.pixel(1, 0), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(outlined.mipmap_count(), 3);

        tex.outline(&params).unwrap();
        assert_eq!(tex, outlined);
    }

    #[test]
    fn test_clear_alpha_default_cutoff() {
        let mut tex = Texture::new(2, 1, TextureFormat::RgbaFloat);
        tex.set_pixel(0, 0, [0.2, 0.2, 0.2, 0.04]);
        tex.set_pixel(1, 0, [0.2, 0.2, 0.2, 0.06]);

        let cleared = tex.cleared_alpha(CLEAR_ALPHA_THRESHOLD).unwrap();
        tex.clear_alpha_default();

        assert_eq!(tex, cleared);
        assert_eq!(tex.pixel(0, 0), Some([0.2, 0.2, 0.2, 0.0]));
        assert_eq!(tex.pixel(1, 0), Some([0.2, 0.2, 0.2, 0.06]));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut tex = Texture::new(1, 1, TextureFormat::Rgba32);
        assert!(!tex.set_pixel(1, 0, [1.0; 4]));
        assert!(tex.set_pixel(0, 0, [1.0; 4]));
    }
}
