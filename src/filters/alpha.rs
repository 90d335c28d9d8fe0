//! Alpha cleanup: forces nearly-transparent pixels to fully transparent.
//!
//! Every pixel whose alpha is strictly below the threshold gets alpha 0.
//! Color channels are left as they are. Pixels are independent, so
//! contiguous buffers are processed in parallel with rayon.

use ndarray::{Array3, ArrayView3, ArrayViewMut3, Axis};
use rayon::prelude::*;
use tracing::debug;

use super::core::{ensure_rgba, Sample};
use crate::error::{check_threshold, TextureResult};

/// Zero the alpha of every RGBA u8 pixel with `a / 255 < threshold`.
///
/// # Errors
/// Fails without touching the image if it is not RGBA or `threshold` is
/// outside 0.0-1.0.
pub fn clear_alpha_u8(image: ArrayViewMut3<u8>, threshold: f32) -> TextureResult<()> {
    clear_alpha_in_place(image, threshold)
}

/// Zero the alpha of every RGBA f32 pixel with `a < threshold`.
///
/// # Errors
/// Same as [`clear_alpha_u8`].
pub fn clear_alpha_f32(image: ArrayViewMut3<f32>, threshold: f32) -> TextureResult<()> {
    clear_alpha_in_place(image, threshold)
}

/// Copy of an RGBA u8 image with low alpha cleared. The input is never modified.
///
/// # Errors
/// Same as [`clear_alpha_u8`].
pub fn cleared_alpha_u8(input: ArrayView3<u8>, threshold: f32) -> TextureResult<Array3<u8>> {
    let mut output = input.to_owned();
    clear_alpha_in_place(output.view_mut(), threshold)?;
    Ok(output)
}

/// Copy of an RGBA f32 image with low alpha cleared. The input is never modified.
///
/// # Errors
/// Same as [`clear_alpha_u8`].
pub fn cleared_alpha_f32(input: ArrayView3<f32>, threshold: f32) -> TextureResult<Array3<f32>> {
    let mut output = input.to_owned();
    clear_alpha_in_place(output.view_mut(), threshold)?;
    Ok(output)
}

fn clear_alpha_in_place<T: Sample>(mut image: ArrayViewMut3<T>, threshold: f32) -> TextureResult<()> {
    ensure_rgba(&image)?;
    check_threshold(threshold)?;

    let (height, width, _) = image.dim();
    let clear = |alpha: &mut T| {
        if alpha.to_unit() < threshold {
            *alpha = T::ZERO;
        }
    };

    if let Some(data) = image.as_slice_mut() {
        data.par_chunks_exact_mut(4).for_each(|pixel| clear(&mut pixel[3]));
    } else {
        image.index_axis_mut(Axis(2), 3).iter_mut().for_each(clear);
    }

    debug!(width, height, threshold, "alpha cleared");
    Ok(())
}
