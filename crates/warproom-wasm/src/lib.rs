//! Warproom WASM - WebAssembly bindings for Warproom
//!
//! This crate exposes the warproom-core transform engine to
//! JavaScript/TypeScript hosts: the host owns the window, the event loop
//! and image I/O, and drives a transform session with classified gesture
//! events, presenting the frame each event returns.
//!
//! # Module Structure
//!
//! - `session` - Interactive transform session (translate/rotate/scale
//!   gestures, commit on release)
//! - `types` - WASM-compatible wrapper types for image data
//! - `color` - YCbCr conversion helpers for the reference display path
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRasterImage, JsTransformSession } from '@warproom/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new JsRasterImage(width, height, pixels);
//! const session = JsTransformSession.with_ycbcr_background(image);
//!
//! // Pointer drag: present each returned frame.
//! const frame = session.translate(dx, dy);
//! // Pointer release: the gesture becomes the base for the next one.
//! session.end_gesture();
//! ```

use wasm_bindgen::prelude::*;

mod color;
mod session;
mod types;

// Re-export public types
pub use color::{rgb_to_ycbcr_image, ycbcr_black, ycbcr_to_rgb_image};
pub use session::JsTransformSession;
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
