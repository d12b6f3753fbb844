//! Pixel-wise color transforms: Grayscale, Sepia, Invert, Threshold.
//!
//! These filters need no spatial context; each output pixel depends only
//! on the corresponding input pixel. Grayscale, sepia and invert accept
//! a blend intensity `t` in 0.0-1.0 that interpolates between the
//! original and the fully transformed pixel (1.0 = full effect).
//! Out-of-range intensities are clamped into the domain rather than
//! rejected.

use ndarray::{Array3, ArrayView3};

use super::{blend_channel, luma_u8};

// ============================================================================
// Grayscale
// ============================================================================

/// Convert to grayscale using BT.601 luma weights.
///
/// Output is RGBA with R=G=B=luma, blended with the original by
/// `intensity`, alpha preserved.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `intensity` - Blend factor 0.0-1.0; 1.0 replaces the pixel entirely
///
/// # Returns
/// New grayscale-blended image of identical dimensions
pub fn grayscale(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));
    let t = intensity.clamp(0.0, 1.0);

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]];
            let g = input[[y, x, 1]];
            let b = input[[y, x, 2]];
            let gray = luma_u8(r, g, b);

            output[[y, x, 0]] = blend_channel(r, gray, t);
            output[[y, x, 1]] = blend_channel(g, gray, t);
            output[[y, x, 2]] = blend_channel(b, gray, t);
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

// ============================================================================
// Sepia
// ============================================================================

/// Apply the classic sepia tone matrix.
///
/// Each output channel is a fixed weighted sum of the input RGB, clamped
/// to 255, then blended with the original by `intensity`.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `intensity` - Blend factor 0.0-1.0
///
/// # Returns
/// New sepia-toned image of identical dimensions, alpha preserved
pub fn sepia(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));
    let t = intensity.clamp(0.0, 1.0);

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;

            let sr = (0.393 * r + 0.769 * g + 0.189 * b).round().min(255.0) as u8;
            let sg = (0.349 * r + 0.686 * g + 0.168 * b).round().min(255.0) as u8;
            let sb = (0.272 * r + 0.534 * g + 0.131 * b).round().min(255.0) as u8;

            output[[y, x, 0]] = blend_channel(input[[y, x, 0]], sr, t);
            output[[y, x, 1]] = blend_channel(input[[y, x, 1]], sg, t);
            output[[y, x, 2]] = blend_channel(input[[y, x, 2]], sb, t);
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

// ============================================================================
// Invert
// ============================================================================

/// Invert the color channels: c' = 255 - c.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `intensity` - Blend factor 0.0-1.0
///
/// # Returns
/// New inverted image of identical dimensions, alpha preserved
pub fn invert(input: ArrayView3<u8>, intensity: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));
    let t = intensity.clamp(0.0, 1.0);

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let v = input[[y, x, c]];
                output[[y, x, c]] = blend_channel(v, 255 - v, t);
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

// ============================================================================
// Threshold
// ============================================================================

/// Binarize on luma: pixels with luma >= `cutoff` become white, the rest
/// black, written identically to R, G and B.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `cutoff` - Threshold value 0-255
///
/// # Returns
/// New black-and-white image of identical dimensions, alpha preserved
pub fn threshold(input: ArrayView3<u8>, cutoff: u8) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let lum = luma_u8(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
            let v = if lum >= cutoff { 255 } else { 0 };

            output[[y, x, 0]] = v;
            output[[y, x, 1]] = v;
            output[[y, x, 2]] = v;
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}
