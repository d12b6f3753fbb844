//! rasterlab
//!
//! Raster pixel-processing kernels over in-memory RGBA buffers:
//! color-space transforms (grayscale, sepia, invert, threshold), a
//! fixed 5x5 Gaussian blur, histogram equalization, and Sobel-magnitude
//! edge detection. WASM bindings for JavaScript are available behind
//! the `wasm` feature.
//!
//! ## Image Format
//!
//! Images are 8-bit, 4-channel (R, G, B, A) rasters stored row-major as
//! a `(height, width, 4)` array. [`RasterBuffer`] validates dimensions
//! at construction; every filter then takes one buffer and returns a
//! new one of identical dimensions, with alpha passed through and every
//! channel write clamped to 0-255.
//!
//! ## Usage
//!
//! ```
//! use rasterlab::{apply, ColorTransform, FilterOp, RasterBuffer};
//!
//! let buffer = RasterBuffer::from_samples(2, 1, vec![255u8; 8]).unwrap();
//! let edges = apply(&buffer, FilterOp::SobelEdges);
//! let faded = apply(
//!     &buffer,
//!     FilterOp::Color(ColorTransform::Sepia { intensity: 0.5 }),
//! );
//! assert_eq!(edges.width(), faded.width());
//! ```

pub mod buffer;
pub mod filters;
pub mod ops;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::{RasterBuffer, RasterError};
pub use ops::{apply, ColorTransform, FilterOp};
