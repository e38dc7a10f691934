//! Backward-projection resampling.
//!
//! For every destination pixel, the inverse of the forward transform gives
//! its pre-image in source coordinates; the source pixel there is copied
//! whole, or the background value is written when the pre-image falls off
//! the source. No source pixel is scattered forward, so every destination
//! pixel is written exactly once and the pass has no cross-pixel data
//! dependency.
//!
//! # Sampling Policy
//!
//! Nearest-neighbor by flooring: the mapped coordinate is floored
//! (`f64::floor`, toward negative infinity) and the resulting integer index
//! is tested against `[0, width) x [0, height)`. Flooring before the bounds
//! test keeps edge behavior exact: a pre-image of exactly `width` floors to
//! `width` and becomes background, while `width - epsilon` floors to
//! `width - 1` and samples the last column. No interpolation is performed.

use crate::raster::{Pixel, RasterImage};
use crate::{Mat3, TransformError};

/// Resample `source` through `forward` into a fresh destination buffer.
///
/// # Arguments
///
/// * `source` - Source image; read-only.
/// * `dst_width`, `dst_height` - Destination dimensions. Must equal the
///   source dimensions; the displayed image always has the shape of the
///   loaded one.
/// * `forward` - The forward transform from source space to destination
///   space. Inverted internally for backward projection.
/// * `background` - Pixel value for destinations whose pre-image falls
///   outside the source. Copied verbatim; YCbCr hosts pass
///   [`crate::color::YCBCR_BLACK`].
///
/// # Errors
///
/// * [`TransformError::DimensionMismatch`] - destination dimensions differ
///   from the source's.
/// * [`TransformError::SingularMatrix`] - `forward` is not invertible.
/// * [`TransformError::DegenerateProjection`] - a pre-image's homogeneous
///   coordinate vanished.
///
/// Validation and inversion happen before the first pixel is produced, and
/// an error mid-pass abandons the local buffer; the caller never observes a
/// partially written image.
pub fn resample(
    source: &RasterImage,
    dst_width: u32,
    dst_height: u32,
    forward: &Mat3,
    background: Pixel,
) -> Result<RasterImage, TransformError> {
    if dst_width != source.width || dst_height != source.height {
        return Err(TransformError::DimensionMismatch {
            src_width: source.width,
            src_height: source.height,
            dst_width,
            dst_height,
        });
    }
    let inverse = forward.invert()?;

    let src_w = f64::from(source.width);
    let src_h = f64::from(source.height);

    let mut pixels = Vec::with_capacity(source.byte_size());
    for y in 0..dst_height {
        for x in 0..dst_width {
            let (src_x, src_y) = inverse.apply(f64::from(x), f64::from(y))?;
            let sx = src_x.floor();
            let sy = src_y.floor();
            let pixel = if sx < 0.0 || sx >= src_w || sy < 0.0 || sy >= src_h {
                background
            } else {
                source.pixel(sx as u32, sy as u32)
            };
            pixels.extend_from_slice(&pixel);
        }
    }

    Ok(RasterImage::new(dst_width, dst_height, pixels))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
