//! Sobel gradient magnitude edge detection.
//!
//! The image is reduced to a luma plane, the 3x3 Sobel pair estimates
//! the horizontal and vertical gradients of every interior pixel, and
//! the clamped magnitude `sqrt(gx^2 + gy^2)` is written to R, G and B.
//! The outermost one-pixel ring carries no gradient data and is set to
//! 0; alpha is preserved everywhere.

use ndarray::{Array3, ArrayView3, Axis};
use rayon::prelude::*;

use super::luma_plane;

const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Detect edges as Sobel gradient magnitude.
///
/// Rows are processed in parallel.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// New grayscale edge-intensity image of identical dimensions
pub fn sobel_edges(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let luma = luma_plane(input);
    let mut output = Array3::<u8>::zeros((height, width, 4));

    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            let interior_y = y >= 1 && y + 1 < height;
            for x in 0..width {
                let v = if interior_y && x >= 1 && x + 1 < width {
                    let mut gx = 0i32;
                    let mut gy = 0i32;
                    for ky in 0..3 {
                        for kx in 0..3 {
                            let p = luma[[y + ky - 1, x + kx - 1]] as i32;
                            gx += p * SOBEL_X[ky][kx];
                            gy += p * SOBEL_Y[ky][kx];
                        }
                    }
                    let magnitude = ((gx * gx + gy * gy) as f32).sqrt();
                    magnitude.round().min(255.0) as u8
                } else {
                    0
                };

                row[[x, 0]] = v;
                row[[x, 1]] = v;
                row[[x, 2]] = v;
                row[[x, 3]] = input[[y, x, 3]];
            }
        });

    output
}
