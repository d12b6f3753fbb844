//! WebAssembly exports for the rasterlab filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Each one
//! takes a flat RGBA byte slice plus dimensions, copies it into an
//! owned array, runs the corresponding filter and returns the result as
//! a new byte vector. The copy-in/copy-out keeps the core
//! non-destructive: callers' `ImageData` buffers are never written to.
//!
//! A data slice whose length does not match `width * height * 4` is a
//! JS-side contract violation and panics.

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::filters::{blur, color, edge, equalize};

fn to_array(data: &[u8], width: usize, height: usize) -> Array3<u8> {
    Array3::from_shape_vec((height, width, 4), data.to_vec()).expect("Invalid dimensions")
}

/// Grayscale with blend intensity (1.0 = full effect).
#[wasm_bindgen]
pub fn grayscale_rgba_wasm(data: &[u8], width: usize, height: usize, intensity: f32) -> Vec<u8> {
    let input = to_array(data, width, height);
    color::grayscale(input.view(), intensity).into_raw_vec_and_offset().0
}

/// Sepia with blend intensity (1.0 = full effect).
#[wasm_bindgen]
pub fn sepia_rgba_wasm(data: &[u8], width: usize, height: usize, intensity: f32) -> Vec<u8> {
    let input = to_array(data, width, height);
    color::sepia(input.view(), intensity).into_raw_vec_and_offset().0
}

/// Color inversion with blend intensity (1.0 = full effect).
#[wasm_bindgen]
pub fn invert_rgba_wasm(data: &[u8], width: usize, height: usize, intensity: f32) -> Vec<u8> {
    let input = to_array(data, width, height);
    color::invert(input.view(), intensity).into_raw_vec_and_offset().0
}

/// Luma threshold: pixels at or above `cutoff` become white.
#[wasm_bindgen]
pub fn threshold_rgba_wasm(data: &[u8], width: usize, height: usize, cutoff: u8) -> Vec<u8> {
    let input = to_array(data, width, height);
    color::threshold(input.view(), cutoff).into_raw_vec_and_offset().0
}

/// Fixed 5x5 Gaussian blur.
#[wasm_bindgen]
pub fn gaussian_blur_rgba_wasm(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let input = to_array(data, width, height);
    blur::gaussian_blur(input.view()).into_raw_vec_and_offset().0
}

/// Histogram equalization.
#[wasm_bindgen]
pub fn histogram_equalize_rgba_wasm(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let input = to_array(data, width, height);
    equalize::histogram_equalize(input.view()).into_raw_vec_and_offset().0
}

/// Sobel gradient magnitude edge detection.
#[wasm_bindgen]
pub fn sobel_edges_rgba_wasm(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let input = to_array(data, width, height);
    edge::sobel_edges(input.view()).into_raw_vec_and_offset().0
}
