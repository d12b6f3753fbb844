//! Gaussian blur: fixed 5x5 integer kernel convolution.
//!
//! The kernel is the binomial approximation of a Gaussian with weight
//! sum 256. Accumulation is integer per channel; the division by 256
//! rounds to nearest. Neighborhood coordinates outside the image are
//! clamped to the nearest valid pixel (border replication).

use ndarray::{Array3, ArrayView3, Axis};
use rayon::prelude::*;

/// 5x5 binomial kernel, weight sum 256.
const KERNEL: [[i32; 5]; 5] = [
    [1, 4, 6, 4, 1],
    [4, 16, 24, 16, 4],
    [6, 24, 36, 24, 6],
    [4, 16, 24, 16, 4],
    [1, 4, 6, 4, 1],
];
const KERNEL_SUM: i32 = 256;

/// Apply the fixed 5x5 Gaussian blur.
///
/// Each output R, G, B is the kernel-weighted neighborhood average;
/// alpha is passed through unchanged. Rows are processed in parallel.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// New blurred image of identical dimensions
pub fn gaussian_blur(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for x in 0..width {
                let mut acc = [0i32; 3];

                for ky in -2..=2isize {
                    let py = (y as isize + ky).clamp(0, height as isize - 1) as usize;
                    for kx in -2..=2isize {
                        let px = (x as isize + kx).clamp(0, width as isize - 1) as usize;
                        let weight = KERNEL[(ky + 2) as usize][(kx + 2) as usize];

                        for (c, sum) in acc.iter_mut().enumerate() {
                            *sum += input[[py, px, c]] as i32 * weight;
                        }
                    }
                }

                for (c, sum) in acc.iter().enumerate() {
                    // Rounding division, then clamp before the store.
                    let v = (sum + KERNEL_SUM / 2) / KERNEL_SUM;
                    row[[x, c]] = v.clamp(0, 255) as u8;
                }
                row[[x, 3]] = input[[y, x, 3]];
            }
        });

    output
}
