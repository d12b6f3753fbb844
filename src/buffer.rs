//! The `RasterBuffer` image model shared by every filter.
//!
//! A buffer owns a `(height, width, 4)` array of 8-bit RGBA samples,
//! row-major. Validation happens here, at construction: once a
//! `RasterBuffer` exists, every filter can assume its invariants and
//! none of them needs to return a `Result`.

use ndarray::{Array3, ArrayView3};
use thiserror::Error;

/// Errors raised when constructing a [`RasterBuffer`] from caller data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    /// The flat sample slice does not hold `width * height * 4` values.
    #[error("expected {expected} samples for a {width}x{height} RGBA image, got {actual}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// Width or height of zero.
    #[error("image dimensions must be positive")]
    ZeroDimension,
}

/// An owned RGBA image: `(height, width, 4)` u8 samples.
///
/// Filters take a view of one buffer and produce a new buffer of the
/// same dimensions; no filter mutates its input and no filter retains
/// the buffer between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    data: Array3<u8>,
}

impl RasterBuffer {
    /// Build a buffer from a flat, row-major RGBA sample vector.
    ///
    /// Rejects zero dimensions and any sample count other than
    /// `width * height * 4` before touching the pixel data.
    pub fn from_samples(
        width: usize,
        height: usize,
        samples: Vec<u8>,
    ) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroDimension);
        }
        let expected = width * height * 4;
        let actual = samples.len();
        if actual != expected {
            return Err(RasterError::InvalidDimensions {
                width,
                height,
                expected,
                actual,
            });
        }
        let data = Array3::from_shape_vec((height, width, 4), samples).map_err(|_| {
            RasterError::InvalidDimensions {
                width,
                height,
                expected,
                actual,
            }
        })?;
        Ok(Self { data })
    }

    /// Wrap an existing `(height, width, 4)` array.
    pub fn from_array(data: Array3<u8>) -> Result<Self, RasterError> {
        let (height, width, channels) = data.dim();
        if channels != 4 {
            return Err(RasterError::InvalidDimensions {
                width,
                height,
                expected: width * height * 4,
                actual: width * height * channels,
            });
        }
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroDimension);
        }
        Ok(Self { data })
    }

    /// Wrap an array produced by a filter. Filters always emit
    /// `(height, width, 4)` shapes matching a validated input, so no
    /// re-validation happens here.
    pub(crate) fn from_filter_output(data: Array3<u8>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn view(&self) -> ArrayView3<u8> {
        self.data.view()
    }

    /// Consume the buffer, returning the flat row-major RGBA samples.
    pub fn into_samples(self) -> Vec<u8> {
        self.data.into_raw_vec_and_offset().0
    }

    pub fn as_samples(&self) -> &[u8] {
        // The array is always built from a contiguous Vec.
        self.data.as_slice().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples_valid() {
        let buf = RasterBuffer::from_samples(2, 1, vec![0; 8]).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 1);
        assert_eq!(buf.as_samples().len(), 8);
    }

    #[test]
    fn test_from_samples_wrong_length() {
        let err = RasterBuffer::from_samples(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            RasterError::InvalidDimensions {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15,
            }
        );
    }

    #[test]
    fn test_from_samples_zero_dimension() {
        let err = RasterBuffer::from_samples(0, 3, vec![]).unwrap_err();
        assert_eq!(err, RasterError::ZeroDimension);
    }

    #[test]
    fn test_from_array_rejects_rgb() {
        let arr = Array3::<u8>::zeros((2, 2, 3));
        assert!(RasterBuffer::from_array(arr).is_err());
    }

    #[test]
    fn test_into_samples_roundtrip() {
        let samples: Vec<u8> = (0..16).collect();
        let buf = RasterBuffer::from_samples(2, 2, samples.clone()).unwrap();
        assert_eq!(buf.into_samples(), samples);
    }
}
