//! Tagged filter operations and their dispatch.
//!
//! Callers describe the operation they want as a [`FilterOp`] value and
//! hand it to [`apply`] together with a buffer they own. There is no
//! name-based lookup and no process-wide image state: each call fully
//! consumes its view of the input and returns a freshly allocated
//! output buffer.

use tracing::debug;

use crate::buffer::RasterBuffer;
use crate::filters::{blur, color, edge, equalize};

/// Per-pixel color transform selector.
///
/// Grayscale, sepia and invert carry a blend intensity in 0.0-1.0
/// (clamped into range when applied); threshold carries its cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorTransform {
    Grayscale { intensity: f32 },
    Sepia { intensity: f32 },
    Invert { intensity: f32 },
    Threshold { cutoff: u8 },
}

impl ColorTransform {
    /// Full-strength grayscale.
    pub fn grayscale() -> Self {
        Self::Grayscale { intensity: 1.0 }
    }

    /// Full-strength sepia.
    pub fn sepia() -> Self {
        Self::Sepia { intensity: 1.0 }
    }

    /// Full-strength invert.
    pub fn invert() -> Self {
        Self::Invert { intensity: 1.0 }
    }
}

/// The four raster operations the crate exposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterOp {
    Color(ColorTransform),
    GaussianBlur,
    HistogramEqualize,
    SobelEdges,
}

/// Run one filter over a buffer, returning a new buffer of identical
/// dimensions. The input is never mutated.
pub fn apply(input: &RasterBuffer, op: FilterOp) -> RasterBuffer {
    debug!(
        ?op,
        width = input.width(),
        height = input.height(),
        "applying filter"
    );

    let view = input.view();
    let data = match op {
        FilterOp::Color(ColorTransform::Grayscale { intensity }) => {
            color::grayscale(view, intensity)
        }
        FilterOp::Color(ColorTransform::Sepia { intensity }) => color::sepia(view, intensity),
        FilterOp::Color(ColorTransform::Invert { intensity }) => color::invert(view, intensity),
        FilterOp::Color(ColorTransform::Threshold { cutoff }) => color::threshold(view, cutoff),
        FilterOp::GaussianBlur => blur::gaussian_blur(view),
        FilterOp::HistogramEqualize => equalize::histogram_equalize(view),
        FilterOp::SobelEdges => edge::sobel_edges(view),
    };

    RasterBuffer::from_filter_output(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: usize, height: usize) -> RasterBuffer {
        let mut samples = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                samples.extend_from_slice(&[v, v, v, 255]);
            }
        }
        RasterBuffer::from_samples(width, height, samples).unwrap()
    }

    #[test]
    fn test_apply_preserves_dimensions() {
        let input = checkerboard(7, 5);
        for op in [
            FilterOp::Color(ColorTransform::grayscale()),
            FilterOp::Color(ColorTransform::sepia()),
            FilterOp::Color(ColorTransform::invert()),
            FilterOp::Color(ColorTransform::Threshold { cutoff: 128 }),
            FilterOp::GaussianBlur,
            FilterOp::HistogramEqualize,
            FilterOp::SobelEdges,
        ] {
            let output = apply(&input, op);
            assert_eq!(output.width(), 7);
            assert_eq!(output.height(), 5);
        }
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let input = checkerboard(4, 4);
        let before = input.clone();
        let _ = apply(&input, FilterOp::Color(ColorTransform::invert()));
        let _ = apply(&input, FilterOp::GaussianBlur);
        assert_eq!(input, before);
    }

    #[test]
    fn test_apply_invert_roundtrip() {
        let input = checkerboard(3, 3);
        let once = apply(&input, FilterOp::Color(ColorTransform::invert()));
        let twice = apply(&once, FilterOp::Color(ColorTransform::invert()));
        assert_eq!(twice, input);
    }

    #[test]
    fn test_full_strength_constructors() {
        assert_eq!(
            ColorTransform::grayscale(),
            ColorTransform::Grayscale { intensity: 1.0 }
        );
        assert_eq!(
            ColorTransform::invert(),
            ColorTransform::Invert { intensity: 1.0 }
        );
    }
}
