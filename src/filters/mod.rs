//! Filter kernels over RGBA rasters.
//!
//! ## Image Format
//!
//! Every filter takes an `ArrayView3<u8>` of shape `(height, width, 4)`
//! with RGBA samples in 0-255 and returns a newly allocated array of the
//! same shape. Inputs are never mutated.
//!
//! ## Shared contracts
//!
//! - **New output** - each call allocates its result; callers keep the
//!   original.
//! - **Clamping** - every arithmetic result affecting a channel is
//!   clamped to 0-255 before being stored.
//! - **Rounding** - fractional channel values round to nearest.
//! - **Alpha preservation** - the alpha channel is copied from input to
//!   output unchanged by every filter.
//!
//! ## Filter categories
//!
//! - **Pixel-wise color transforms**: grayscale, sepia, invert,
//!   threshold ([`color`])
//! - **Spatial convolution**: fixed 5x5 Gaussian blur ([`blur`])
//! - **Global remap**: histogram equalization ([`equalize`])
//! - **Gradient**: Sobel magnitude edge detection ([`edge`])

use ndarray::{Array2, ArrayView3};

pub mod blur;
pub mod color;
pub mod edge;
pub mod equalize;

/// ITU-R BT.601 luma coefficients, shared by grayscale, threshold,
/// equalization and edge detection.
pub(crate) const LUMA_R: f32 = 0.299;
pub(crate) const LUMA_G: f32 = 0.587;
pub(crate) const LUMA_B: f32 = 0.114;

/// Weighted luma of one pixel, rounded to nearest.
#[inline]
pub(crate) fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32).round() as u8
}

/// Reduce an RGBA image to a single-channel luma plane.
pub(crate) fn luma_plane(input: ArrayView3<u8>) -> Array2<u8> {
    let (height, width, _) = input.dim();
    let mut plane = Array2::<u8>::zeros((height, width));

    for y in 0..height {
        for x in 0..width {
            plane[[y, x]] = luma_u8(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
        }
    }

    plane
}

/// Linear interpolation between an original and a transformed channel
/// value: `orig + (transformed - orig) * t`.
///
/// `t` must already be in 0.0-1.0; callers normalize it.
#[inline]
pub(crate) fn blend_channel(orig: u8, transformed: u8, t: f32) -> u8 {
    let blended = orig as f32 + (transformed as f32 - orig as f32) * t;
    blended.round().clamp(0.0, 255.0) as u8
}
