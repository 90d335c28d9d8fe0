//! WebAssembly exports for the texture filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Bit Depth Support
//!
//! All filters have two versions:
//! - **u8**: 8-bit per channel (0-255), standard for web/display
//! - **f32**: Float per channel (0.0-1.0), for HDR/linear workflows
//!
//! Inputs are flat row-major RGBA buffers; outputs are new buffers of the
//! same length. Invalid dimensions or parameters raise a JS error.

use ndarray::{Array3, ArrayView3};
use wasm_bindgen::prelude::*;

use crate::error::{TextureError, TextureResult};
use crate::filters::alpha::{cleared_alpha_f32, cleared_alpha_u8};
use crate::filters::outline::{outlined_rgba_f32, outlined_rgba_u8};
use crate::params::OutlineParams;

fn view<T>(data: &[T], width: usize, height: usize) -> TextureResult<ArrayView3<'_, T>> {
    ArrayView3::from_shape((height, width, 4), data)
        .map_err(|_| TextureError::buffer_length(width * height * 4, data.len()))
}

fn into_flat<T>(image: Array3<T>) -> Vec<T> {
    image.into_raw_vec_and_offset().0
}

fn to_js(err: TextureError) -> JsError {
    JsError::new(&err.to_string())
}

// ============================================================================
// Outline
// ============================================================================

/// Outline painted areas of an RGBA u8 image.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `r`, `g`, `b`, `a` - Outline color (0-255)
/// * `radius` - Outline radius in pixels
/// * `threshold` - Alpha (0.0-1.0) separating painted from background
///
/// # Returns
/// Flat array of RGBA bytes with the outline painted
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn outline_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
    radius: u32,
    threshold: f32,
) -> Result<Vec<u8>, JsError> {
    let color = [r, g, b, a].map(|c| f32::from(c) / 255.0);
    let params = OutlineParams::new(color, radius).seed_threshold(threshold);
    let input = view(data, width, height).map_err(to_js)?;
    let result = outlined_rgba_u8(input, &params).map_err(to_js)?;
    Ok(into_flat(result))
}

/// Outline painted areas of an RGBA f32 image.
///
/// Color components and threshold are 0.0-1.0.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn outline_rgba_f32_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    r: f32,
    g: f32,
    b: f32,
    a: f32,
    radius: u32,
    threshold: f32,
) -> Result<Vec<f32>, JsError> {
    let params = OutlineParams::new([r, g, b, a], radius).seed_threshold(threshold);
    let input = view(data, width, height).map_err(to_js)?;
    let result = outlined_rgba_f32(input, &params).map_err(to_js)?;
    Ok(into_flat(result))
}

// ============================================================================
// Alpha Cleanup
// ============================================================================

/// Zero every alpha below `threshold` (0.0-1.0) in an RGBA u8 image.
#[wasm_bindgen]
pub fn clear_alpha_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    threshold: f32,
) -> Result<Vec<u8>, JsError> {
    let input = view(data, width, height).map_err(to_js)?;
    let result = cleared_alpha_u8(input, threshold).map_err(to_js)?;
    Ok(into_flat(result))
}

/// Zero every alpha below `threshold` in an RGBA f32 image.
#[wasm_bindgen]
pub fn clear_alpha_rgba_f32_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    threshold: f32,
) -> Result<Vec<f32>, JsError> {
    let input = view(data, width, height).map_err(to_js)?;
    let result = cleared_alpha_f32(input, threshold).map_err(to_js)?;
    Ok(into_flat(result))
}
