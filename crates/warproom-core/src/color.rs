//! Luma/chroma pixel helpers.
//!
//! Hosts following the reference display path convert decoded images to
//! YCbCr so intensity edits touch only the luma channel, and fill
//! out-of-bounds pixels with the chroma-neutral black `(0, 128, 128)` rather
//! than all zeros. The conversions here use the full-range BT.601
//! coefficients (the JPEG convention), so they agree with what common
//! decoders produce. The resampler itself never interprets channels.

use crate::raster::{Pixel, RasterImage};

/// Black in YCbCr: zero luma, neutral chroma.
///
/// The usual background value for sessions over YCbCr images; an all-zero
/// triple would render as a saturated green instead.
pub const YCBCR_BLACK: Pixel = [0, 128, 128];

/// Convert one RGB pixel to YCbCr.
pub fn rgb_to_ycbcr(p: Pixel) -> Pixel {
    let [r, g, b] = p.map(f64::from);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = 128.0 - 0.168_736 * r - 0.331_264 * g + 0.5 * b;
    let cr = 128.0 + 0.5 * r - 0.418_688 * g - 0.081_312 * b;
    [quantize(y), quantize(cb), quantize(cr)]
}

/// Convert one YCbCr pixel back to RGB.
pub fn ycbcr_to_rgb(p: Pixel) -> Pixel {
    let [y, cb, cr] = p.map(f64::from);
    let r = y + 1.402 * (cr - 128.0);
    let g = y - 0.344_136 * (cb - 128.0) - 0.714_136 * (cr - 128.0);
    let b = y + 1.772 * (cb - 128.0);
    [quantize(r), quantize(g), quantize(b)]
}

/// Convert a whole RGB image to YCbCr.
pub fn image_to_ycbcr(image: &RasterImage) -> RasterImage {
    convert(image, rgb_to_ycbcr)
}

/// Convert a whole YCbCr image back to RGB.
pub fn image_to_rgb(image: &RasterImage) -> RasterImage {
    convert(image, ycbcr_to_rgb)
}

fn convert(image: &RasterImage, f: fn(Pixel) -> Pixel) -> RasterImage {
    let mut pixels = Vec::with_capacity(image.byte_size());
    for chunk in image.pixels.chunks_exact(3) {
        pixels.extend_from_slice(&f([chunk[0], chunk[1], chunk[2]]));
    }
    RasterImage::new(image.width, image.height, pixels)
}

fn quantize(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
