//! Colourspace conversion bindings.
//!
//! Hosts that follow the reference display path decode to RGB, convert to
//! YCbCr for editing, and convert back for presentation. These bindings
//! expose the core helpers so that round trip stays in WASM memory.

use warproom_core::color;
use wasm_bindgen::prelude::*;

use crate::types::JsRasterImage;

/// Convert an RGB image to YCbCr (full-range BT.601 coefficients).
#[wasm_bindgen]
pub fn rgb_to_ycbcr_image(image: &JsRasterImage) -> JsRasterImage {
    JsRasterImage::from_raster(color::image_to_ycbcr(&image.to_raster()))
}

/// Convert a YCbCr image back to RGB.
#[wasm_bindgen]
pub fn ycbcr_to_rgb_image(image: &JsRasterImage) -> JsRasterImage {
    JsRasterImage::from_raster(color::image_to_rgb(&image.to_raster()))
}

/// The chroma-neutral black pixel `[0, 128, 128]`, the background value for
/// sessions over YCbCr images.
#[wasm_bindgen]
pub fn ycbcr_black() -> Vec<u8> {
    color::YCBCR_BLACK.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ycbcr_black_value() {
        assert_eq!(ycbcr_black(), vec![0, 128, 128]);
    }

    #[test]
    fn test_rgb_black_converts_to_neutral_chroma() {
        let img = JsRasterImage::new(1, 1, vec![0, 0, 0]);
        let ycbcr = rgb_to_ycbcr_image(&img);
        assert_eq!(ycbcr.pixels(), vec![0, 128, 128]);
    }

    #[test]
    fn test_gray_image_round_trip() {
        let img = JsRasterImage::new(2, 1, vec![40, 40, 40, 210, 210, 210]);
        let back = ycbcr_to_rgb_image(&rgb_to_ycbcr_image(&img));
        assert_eq!(back.pixels(), img.pixels());
    }
}
