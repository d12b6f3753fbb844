//! Histogram equalization.
//!
//! Flattens the luma distribution of an image: one pass builds the luma
//! plane and its 256-bin histogram, the cumulative distribution is
//! normalized into a lookup table, and every pixel is remapped through
//! it. Output is grayscale (R=G=B), alpha preserved.

use ndarray::{Array2, Array3, ArrayView3};

use super::luma_u8;

/// Equalize the luma histogram of an image.
///
/// A single-intensity image has `cdf_min == pixel_count`, which would
/// make the normalization denominator zero; that case short-circuits to
/// an identity lookup table, so the output is simply the grayscale
/// reduction of the input.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// New grayscale image with flattened intensity distribution
pub fn histogram_equalize(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();

    // Pass 1: luma plane and histogram together.
    let mut plane = Array2::<u8>::zeros((height, width));
    let mut histogram = [0u32; 256];
    for y in 0..height {
        for x in 0..width {
            let lum = luma_u8(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
            plane[[y, x]] = lum;
            histogram[lum as usize] += 1;
        }
    }

    // Cumulative distribution.
    let mut cdf = [0u32; 256];
    cdf[0] = histogram[0];
    for i in 1..256 {
        cdf[i] = cdf[i - 1] + histogram[i];
    }

    let cdf_min = cdf.iter().copied().find(|&v| v > 0).unwrap_or(0);
    let pixel_count = (width * height) as u32;

    let lut = build_lut(&cdf, cdf_min, pixel_count);

    // Pass 2: remap through the lookup table.
    let mut output = Array3::<u8>::zeros((height, width, 4));
    for y in 0..height {
        for x in 0..width {
            let v = lut[plane[[y, x]] as usize];
            output[[y, x, 0]] = v;
            output[[y, x, 1]] = v;
            output[[y, x, 2]] = v;
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

/// Normalize a CDF into a 256-entry lookup table.
fn build_lut(cdf: &[u32; 256], cdf_min: u32, pixel_count: u32) -> [u8; 256] {
    let mut lut = [0u8; 256];

    if pixel_count == cdf_min {
        // Degenerate histogram: identity mapping.
        for (i, entry) in lut.iter_mut().enumerate() {
            *entry = i as u8;
        }
        return lut;
    }

    let denom = (pixel_count - cdf_min) as f32;
    for i in 0..256 {
        // Bins below the first occupied one go negative; the clamp
        // pins them to 0.
        let v = (cdf[i] as f32 - cdf_min as f32) / denom * 255.0;
        lut[i] = v.round().clamp(0.0, 255.0) as u8;
    }

    lut
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn flat_image(width: usize, height: usize, gray: u8) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((height, width, 4));
        for y in 0..height {
            for x in 0..width {
                img[[y, x, 0]] = gray;
                img[[y, x, 1]] = gray;
                img[[y, x, 2]] = gray;
                img[[y, x, 3]] = 255;
            }
        }
        img
    }

    #[test]
    fn test_equalize_degenerate_flat_image_unchanged() {
        // 1x2 image with luma {10, 10}: denominator would be zero.
        let img = flat_image(2, 1, 10);
        let result = histogram_equalize(img.view());
        assert_eq!(result, img);
    }

    #[test]
    fn test_equalize_two_values_stretch_to_full_range() {
        let mut img = flat_image(2, 1, 100);
        img[[0, 1, 0]] = 150;
        img[[0, 1, 1]] = 150;
        img[[0, 1, 2]] = 150;

        let result = histogram_equalize(img.view());
        assert_eq!(result[[0, 0, 0]], 0);
        assert_eq!(result[[0, 1, 0]], 255);
    }

    #[test]
    fn test_equalize_output_is_monochrome_with_alpha() {
        let mut img = Array3::<u8>::zeros((2, 2, 4));
        let values = [[10u8, 200, 30], [250, 5, 90], [90, 90, 90], [0, 0, 255]];
        for (i, px) in values.iter().enumerate() {
            let (y, x) = (i / 2, i % 2);
            img[[y, x, 0]] = px[0];
            img[[y, x, 1]] = px[1];
            img[[y, x, 2]] = px[2];
            img[[y, x, 3]] = (i * 60) as u8;
        }

        let result = histogram_equalize(img.view());
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(result[[y, x, 0]], result[[y, x, 1]]);
                assert_eq!(result[[y, x, 1]], result[[y, x, 2]]);
                assert_eq!(result[[y, x, 3]], img[[y, x, 3]]);
            }
        }
    }

    #[test]
    fn test_equalize_spans_zero_to_255() {
        // Any image with >= 2 distinct luma values maps its darkest bin
        // to 0 and its brightest to 255.
        let mut img = flat_image(4, 1, 60);
        for (x, v) in [(1usize, 80u8), (2, 120), (3, 200)] {
            img[[0, x, 0]] = v;
            img[[0, x, 1]] = v;
            img[[0, x, 2]] = v;
        }

        let result = histogram_equalize(img.view());
        let values: Vec<u8> = (0..4).map(|x| result[[0, x, 0]]).collect();
        assert_eq!(*values.iter().min().unwrap(), 0);
        assert_eq!(*values.iter().max().unwrap(), 255);
    }

    #[test]
    fn test_lut_monotonic() {
        let mut img = Array3::<u8>::zeros((1, 4, 4));
        for (x, v) in [(0usize, 10u8), (1, 50), (2, 50), (3, 240)] {
            img[[0, x, 0]] = v;
            img[[0, x, 1]] = v;
            img[[0, x, 2]] = v;
            img[[0, x, 3]] = 255;
        }

        let result = histogram_equalize(img.view());
        assert!(result[[0, 0, 0]] <= result[[0, 1, 0]]);
        assert!(result[[0, 1, 0]] <= result[[0, 3, 0]]);
        assert_eq!(result[[0, 1, 0]], result[[0, 2, 0]]);
    }
}
