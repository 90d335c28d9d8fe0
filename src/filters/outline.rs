//! Outline filter: paints a solid border around painted areas of an image.
//!
//! A single row-major scan looks for painted pixels (alpha above the seed
//! threshold). Each one it meets claims every background pixel (alpha below
//! the threshold) inside a diamond of the given radius, `|dx| + |dy| <= r`,
//! and recolors it with the outline color. A pixel is claimed at most once,
//! so the first painted pixel in scan order wins.
//!
//! ## Supported Formats
//!
//! - **RGBA8**: (height, width, 4) u8, alpha compared as `a / 255`
//! - **RGBA float**: (height, width, 4) f32, 0.0-1.0
//!
//! Painted pixels are never modified. Neighbors outside the image are
//! skipped; there is no wraparound or clamping.

use ndarray::{Array3, ArrayView3, ArrayViewMut3};
use tracing::{debug, trace};

use super::core::{ensure_rgba, pixel_coordinates, pixel_index, Sample};
use crate::error::TextureResult;
use crate::params::OutlineParams;

/// Sign combinations applied to each (dx, dy) offset.
const QUADRANTS: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

// ============================================================================
// In-place
// ============================================================================

/// Outline an RGBA u8 image in place.
///
/// # Arguments
/// * `image` - Mutable view of shape (height, width, 4)
/// * `params` - Outline color, radius and seed threshold
///
/// # Errors
/// Fails without touching the image if it is not RGBA or the params are
/// out of range.
pub fn outline_rgba_u8(image: ArrayViewMut3<u8>, params: &OutlineParams) -> TextureResult<()> {
    outline_in_place(image, params)
}

/// Outline an RGBA f32 image in place.
///
/// # Errors
/// Fails without touching the image if it is not RGBA or the params are
/// out of range.
pub fn outline_rgba_f32(image: ArrayViewMut3<f32>, params: &OutlineParams) -> TextureResult<()> {
    outline_in_place(image, params)
}

// ============================================================================
// Copy-then-outline
// ============================================================================

/// Outlined copy of an RGBA u8 image. The input is never modified.
///
/// # Errors
/// Same as [`outline_rgba_u8`].
pub fn outlined_rgba_u8(input: ArrayView3<u8>, params: &OutlineParams) -> TextureResult<Array3<u8>> {
    let mut output = input.to_owned();
    outline_in_place(output.view_mut(), params)?;
    Ok(output)
}

/// Outlined copy of an RGBA f32 image. The input is never modified.
///
/// # Errors
/// Same as [`outline_rgba_f32`].
pub fn outlined_rgba_f32(
    input: ArrayView3<f32>,
    params: &OutlineParams,
) -> TextureResult<Array3<f32>> {
    let mut output = input.to_owned();
    outline_in_place(output.view_mut(), params)?;
    Ok(output)
}

// ============================================================================
// Implementation
// ============================================================================

fn outline_in_place<T: Sample>(
    mut image: ArrayViewMut3<T>,
    params: &OutlineParams,
) -> TextureResult<()> {
    ensure_rgba(&image)?;
    params.validate()?;

    if params.width == 0 {
        trace!("outline radius is zero, skipping");
        return Ok(());
    }

    let (height, width, _) = image.dim();
    let total = width * height;
    let threshold = params.seed_threshold;
    let steps = params.width as isize;
    let color = params.color.map(T::from_unit);

    let mut visited = vec![false; total];
    let mut seeds = 0usize;
    let mut painted = 0usize;

    for idx in 0..total {
        if visited[idx] {
            continue;
        }

        let (x, y) = pixel_coordinates(idx, width);
        if image[[y, x, 3]].to_unit() <= threshold {
            continue;
        }

        visited[idx] = true;
        seeds += 1;

        for dx in 0..=steps {
            for dy in 0..=(steps - dx) {
                for (sx, sy) in QUADRANTS {
                    let nx = x as isize + sx * dx;
                    let ny = y as isize + sy * dy;
                    if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                        continue;
                    }

                    let (nx, ny) = (nx as usize, ny as usize);
                    let neighbor = pixel_index(nx, ny, width);
                    if visited[neighbor] || image[[ny, nx, 3]].to_unit() >= threshold {
                        continue;
                    }

                    visited[neighbor] = true;
                    for (c, &value) in color.iter().enumerate() {
                        image[[ny, nx, c]] = value;
                    }
                    painted += 1;
                }
            }
        }
    }

    debug!(width, height, radius = params.width, seeds, painted, "outline pass complete");
    Ok(())
}
