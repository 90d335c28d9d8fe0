//! Texture filters operating on RGBA pixel buffers.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGBA8 | (H, W, 4) | u8 | RGB + alpha, 0-255 |
//! | RGBA float | (H, W, 4) | f32 | RGB + alpha, 0.0-1.0 |
//!
//! Pixel `(x, y)` lives at `[[y, x, c]]`; its flat index is `y * W + x`.
//! Thresholds are always given in 0.0-1.0 and u8 alpha is compared as `a / 255`.
//!
//! ## Architecture
//!
//! - **Dual precision** - Both u8 and f32 variants, sharing one implementation
//! - **In-place or copy** - `outline_*` / `clear_alpha_*` mutate the view,
//!   `outlined_*` / `cleared_alpha_*` return a new array
//! - **Fail fast** - Shape and parameter checks run before any pixel is written
//!
//! ## Filters
//!
//! - **Outline**: solid border around painted areas (`outline.rs`)
//! - **Alpha cleanup**: zero alpha below a cutoff (`alpha.rs`)

pub mod core;
pub mod outline;
pub mod alpha;
