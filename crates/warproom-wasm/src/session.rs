//! WASM bindings for the interactive transform session.
//!
//! The host's input layer classifies pointer gestures and forwards them
//! here; every gesture event returns a freshly resampled frame to present.
//! On pointer release the host calls `end_gesture` so the next gesture
//! composes onto the committed transform.

use wasm_bindgen::prelude::*;
use warproom_core::color::YCBCR_BLACK;
use warproom_core::{Gesture, Mat3, TransformError, TransformSession};

use crate::types::JsRasterImage;

/// Interactive transform session exposed to JavaScript.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const session = JsTransformSession.with_ycbcr_background(image);
///
/// // Pointer drag in progress: render each event's frame.
/// canvas.draw(session.translate(dx, dy));
///
/// // Pointer released: commit, so the next gesture builds on this one.
/// session.end_gesture();
/// ```
#[wasm_bindgen]
pub struct JsTransformSession {
    inner: TransformSession,
}

#[wasm_bindgen]
impl JsTransformSession {
    /// Start a session on `image`.
    ///
    /// `background` is the 3-channel fill value for destination pixels
    /// whose pre-image falls outside the source.
    #[wasm_bindgen(constructor)]
    pub fn new(image: &JsRasterImage, background: &[u8]) -> Result<JsTransformSession, JsValue> {
        let background: [u8; 3] = background
            .try_into()
            .map_err(|_| JsValue::from_str("background must have exactly 3 channels"))?;
        Ok(Self {
            inner: TransformSession::new(image.to_raster(), background),
        })
    }

    /// Start a session on a YCbCr host image, filling out-of-bounds pixels
    /// with chroma-neutral black.
    pub fn with_ycbcr_background(image: &JsRasterImage) -> JsTransformSession {
        Self {
            inner: TransformSession::new(image.to_raster(), YCBCR_BLACK),
        }
    }

    /// Replace the loaded image and reset both transforms to identity.
    pub fn load_original(&mut self, image: &JsRasterImage) {
        self.inner.load_original(image.to_raster());
    }

    /// Translate gesture event: shift by `(dx, dy)` pixels and return the
    /// fresh frame.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<JsRasterImage, JsValue> {
        self.gesture_frame(&Gesture::Translate { dx, dy })
    }

    /// Rotate gesture event: `theta` radians about the image center,
    /// counter-clockwise positive in a y-up frame (negate for y-down
    /// screen coordinates).
    pub fn rotate(&mut self, theta: f64) -> Result<JsRasterImage, JsValue> {
        self.gesture_frame(&Gesture::Rotate { theta })
    }

    /// Scale gesture event: uniform `factor` about the image center.
    /// Negative factors mirror; zero is rejected.
    pub fn scale(&mut self, factor: f64) -> Result<JsRasterImage, JsValue> {
        self.gesture_frame(&Gesture::Scale { factor })
    }

    /// Gesture event from a structured object, e.g.
    /// `{ Translate: { dx: 4, dy: 0 } }` or `{ Scale: { factor: 1.5 } }`.
    pub fn apply_gesture(&mut self, gesture: JsValue) -> Result<JsRasterImage, JsValue> {
        let gesture: Gesture = serde_wasm_bindgen::from_value(gesture)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.gesture_frame(&gesture)
    }

    /// Commit the in-progress gesture (pointer release).
    pub fn end_gesture(&mut self) {
        self.inner.end_gesture();
    }

    /// Reset both transforms to identity without reloading the image.
    pub fn reset(&mut self) {
        self.inner.begin();
    }

    /// Resample the original through the current transform without a new
    /// gesture event, e.g. for an initial paint.
    pub fn render(&self) -> Result<JsRasterImage, JsValue> {
        self.inner
            .render()
            .map(JsRasterImage::from_raster)
            .map_err(to_js)
    }

    /// Serialize the committed transform for host-side persistence.
    pub fn past_to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.past())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Restore a committed transform serialized by `past_to_json`.
    pub fn restore_past(&mut self, value: JsValue) -> Result<(), JsValue> {
        let past: Mat3 = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.restore(past);
        Ok(())
    }
}

impl JsTransformSession {
    fn gesture_frame(&mut self, gesture: &Gesture) -> Result<JsRasterImage, JsValue> {
        self.inner
            .apply_gesture(gesture)
            .map(JsRasterImage::from_raster)
            .map_err(to_js)
    }
}

fn to_js(e: TransformError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 black test image with a single white pixel at (1, 1).
    fn marker_image() -> JsRasterImage {
        let mut pixels = vec![0u8; 4 * 4 * 3];
        let idx = (4 + 1) * 3;
        pixels[idx] = 255;
        pixels[idx + 1] = 255;
        pixels[idx + 2] = 255;
        JsRasterImage::new(4, 4, pixels)
    }

    fn pixel_at(pixels: &[u8], width: u32, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * width + x) * 3) as usize;
        [pixels[idx], pixels[idx + 1], pixels[idx + 2]]
    }

    #[test]
    fn test_translate_returns_shifted_frame() {
        let mut session = JsTransformSession::with_ycbcr_background(&marker_image());
        let frame = session.translate(1.0, 0.0).unwrap();

        let pixels = frame.pixels();
        assert_eq!(pixel_at(&pixels, 4, 2, 1), [255, 255, 255]);
        assert_eq!(pixel_at(&pixels, 4, 0, 0), [0, 128, 128]);
    }

    #[test]
    fn test_gestures_compose_across_commits() {
        let mut session = JsTransformSession::with_ycbcr_background(&marker_image());
        session.translate(1.0, 0.0).unwrap();
        session.end_gesture();

        let frame = session.translate(1.0, 0.0).unwrap();
        let pixels = frame.pixels();
        assert_eq!(pixel_at(&pixels, 4, 3, 1), [255, 255, 255]);
    }

    #[test]
    fn test_scale_identity_factor_keeps_image() {
        let mut session = JsTransformSession::with_ycbcr_background(&marker_image());
        let frame = session.scale(1.0).unwrap();
        assert_eq!(frame.pixels(), marker_image().pixels());
    }

    #[test]
    fn test_render_before_any_gesture_is_original() {
        let session = JsTransformSession::with_ycbcr_background(&marker_image());
        let frame = session.render().unwrap();
        assert_eq!(frame.pixels(), marker_image().pixels());
    }

    #[test]
    fn test_reset_discards_committed_transforms() {
        let mut session = JsTransformSession::with_ycbcr_background(&marker_image());
        session.translate(2.0, 0.0).unwrap();
        session.end_gesture();
        session.reset();

        let frame = session.render().unwrap();
        assert_eq!(frame.pixels(), marker_image().pixels());
    }

    #[test]
    fn test_load_original_switches_image() {
        let mut session = JsTransformSession::with_ycbcr_background(&marker_image());
        session.translate(2.0, 0.0).unwrap();
        session.end_gesture();

        session.load_original(&JsRasterImage::new(2, 2, vec![9u8; 12]));
        let frame = session.render().unwrap();
        assert_eq!(frame.pixels(), vec![9u8; 12]);
    }
}
