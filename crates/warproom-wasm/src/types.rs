//! WASM-compatible wrapper types for image data.
//!
//! This module provides the JavaScript-friendly image type that wraps the
//! core raster buffer, handling the conversion between Rust and JavaScript
//! data representations.

use warproom_core::RasterImage;
use wasm_bindgen::prelude::*;

/// A raster image wrapper for JavaScript.
///
/// Wraps the core `RasterImage` and exposes dimensions and pixel data with
/// a JavaScript-friendly interface. Channel meaning (RGB or YCbCr) is up to
/// the host; the engine copies triples whole either way.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. Calling `pixels()` copies it out to
/// JavaScript as a `Uint8Array`; for frame-per-gesture rendering, extract
/// pixels once per returned frame. `free()` releases WASM memory eagerly,
/// though wasm-bindgen's finalizer handles cleanup automatically as well.
#[wasm_bindgen]
pub struct JsRasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - Pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRasterImage {
        JsRasterImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns the pixel data as a Uint8Array.
    ///
    /// Note: this copies the pixel data out of WASM memory.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this to release a large frame immediately.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRasterImage {
    /// Create a JsRasterImage from a core RasterImage.
    pub(crate) fn from_raster(img: RasterImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core RasterImage.
    ///
    /// Note: this clones the pixel data.
    pub(crate) fn to_raster(&self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}
