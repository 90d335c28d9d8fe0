//! Texture Outline
//!
//! Sprite texture post-processing: paint a solid outline around the painted
//! areas of an RGBA image and clean up nearly-transparent alpha. Python
//! bindings are available via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Filters work on `ndarray` arrays of shape (height, width, 4):
//! - `u8`: 8-bit per channel (0-255)
//! - `f32`: Float per channel (0.0-1.0)
//!
//! [`Texture`] wraps an f32 buffer together with the format and mip metadata
//! a host texture carries, and exposes the filters as methods.
//!
//! ## Example
//!
//! ```
//! use texture_outline::{OutlineParams, Texture, TextureFormat};
//!
//! let mut sprite = Texture::new(4, 4, TextureFormat::Rgba32);
//! sprite.set_pixel(1, 1, [1.0, 1.0, 1.0, 1.0]);
//!
//! let outlined = sprite.outlined(&OutlineParams::new([1.0, 0.0, 0.0, 1.0], 1)).unwrap();
//! assert_eq!(outlined.pixel(0, 1), Some([1.0, 0.0, 0.0, 1.0]));
//! assert_eq!(outlined.pixel(0, 0), Some([0.0; 4]));
//! ```

pub mod filters;

mod error;
mod params;
mod texture;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{TextureError, TextureResult};
pub use filters::core::{pixel_coordinates, pixel_index};
pub use params::{OutlineParams, CLEAR_ALPHA_THRESHOLD, OUTLINE_SEED_THRESHOLD};
pub use texture::{Texture, TextureFormat};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::TextureError;
    use crate::filters::alpha::{cleared_alpha_f32, cleared_alpha_u8};
    use crate::filters::outline::{outlined_rgba_f32, outlined_rgba_u8};
    use crate::params::{OutlineParams, CLEAR_ALPHA_THRESHOLD, OUTLINE_SEED_THRESHOLD};

    fn to_py_err(err: TextureError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    // ========================================================================
    // Outline
    // ========================================================================

    /// Outline painted areas of an RGBA u8 image.
    ///
    /// # Arguments
    /// * `image` - RGBA image (height, width, 4) as u8
    /// * `color` - Outline color as (R, G, B, A) tuple (0-255)
    /// * `width` - Outline radius in pixels (0 returns an unchanged copy)
    /// * `threshold` - Alpha (0.0-1.0) separating painted from background
    ///
    /// # Returns
    /// New outlined image; the input is not modified
    #[pyfunction]
    #[pyo3(signature = (image, color=(0, 0, 0, 255), width=1, threshold=OUTLINE_SEED_THRESHOLD))]
    pub fn outline_rgba<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        color: (u8, u8, u8, u8),
        width: u32,
        threshold: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let color = [color.0, color.1, color.2, color.3].map(|c| f32::from(c) / 255.0);
        let params = OutlineParams::new(color, width).seed_threshold(threshold);
        let result = outlined_rgba_u8(image.as_array(), &params).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// Outline painted areas of an RGBA f32 image.
    ///
    /// Color components and threshold are 0.0-1.0.
    #[pyfunction]
    #[pyo3(signature = (image, color=(0.0, 0.0, 0.0, 1.0), width=1, threshold=OUTLINE_SEED_THRESHOLD))]
    pub fn outline_rgba_f32<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        color: (f32, f32, f32, f32),
        width: u32,
        threshold: f32,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let params = OutlineParams::new([color.0, color.1, color.2, color.3], width)
            .seed_threshold(threshold);
        let result = outlined_rgba_f32(image.as_array(), &params).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Alpha Cleanup
    // ========================================================================

    /// Zero every alpha below `threshold` (0.0-1.0) in an RGBA u8 image.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=CLEAR_ALPHA_THRESHOLD))]
    pub fn clear_alpha_rgba<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = cleared_alpha_u8(image.as_array(), threshold).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// Zero every alpha below `threshold` in an RGBA f32 image.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=CLEAR_ALPHA_THRESHOLD))]
    pub fn clear_alpha_rgba_f32<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        threshold: f32,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let result = cleared_alpha_f32(image.as_array(), threshold).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    /// Python module definition
    #[pymodule]
    pub fn texture_outline(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(outline_rgba, m)?)?;
        m.add_function(wrap_pyfunction!(outline_rgba_f32, m)?)?;
        m.add_function(wrap_pyfunction!(clear_alpha_rgba, m)?)?;
        m.add_function(wrap_pyfunction!(clear_alpha_rgba_f32, m)?)?;

        m.add("OUTLINE_SEED_THRESHOLD", OUTLINE_SEED_THRESHOLD)?;
        m.add("CLEAR_ALPHA_THRESHOLD", CLEAR_ALPHA_THRESHOLD)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::texture_outline;
