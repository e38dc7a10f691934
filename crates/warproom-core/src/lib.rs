//! Warproom Core - 2D affine transform engine
//!
//! This crate provides the core functionality for Warproom: homogeneous
//! transform matrices, gesture-driven transform construction, backward-
//! projection resampling, and the session state that accumulates committed
//! transforms across gestures.
//!
//! # Architecture
//!
//! The host application (windowing, input classification, image I/O) stays
//! outside this crate. It hands over a decoded [`raster::RasterImage`] and a
//! stream of classified [`Gesture`] events; a [`TransformSession`] turns each
//! event into a cumulative [`Mat3`] and a freshly resampled frame. Every
//! frame is resampled from the originally loaded image, never from the
//! previous frame, so resampling error does not accumulate across gestures.

pub mod color;
pub mod gesture;
pub mod matrix;
pub mod raster;
pub mod resample;
pub mod session;

pub use gesture::{compose, Gesture, GestureKind};
pub use matrix::Mat3;
pub use raster::{Pixel, RasterImage};
pub use resample::resample;
pub use session::TransformSession;

use thiserror::Error;

/// Error types for transform and resampling operations.
///
/// Every operation that can fail does so synchronously, before any
/// destination pixel is produced; callers never observe partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The forward transform is not invertible (determinant within tolerance
    /// of zero), so backward projection is impossible.
    #[error("transform matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// Applying a matrix to a point produced a vanishing homogeneous
    /// coordinate.
    #[error("degenerate projection: homogeneous w vanished at ({x}, {y})")]
    DegenerateProjection {
        /// Input x coordinate.
        x: f64,
        /// Input y coordinate.
        y: f64,
    },

    /// Destination buffer dimensions differ from the source image.
    #[error("dimension mismatch: source is {src_width}x{src_height}, destination is {dst_width}x{dst_height}")]
    DimensionMismatch {
        /// Source width in pixels.
        src_width: u32,
        /// Source height in pixels.
        src_height: u32,
        /// Requested destination width in pixels.
        dst_width: u32,
        /// Requested destination height in pixels.
        dst_height: u32,
    },

    /// A gesture carried parameters the engine rejects, such as a scale
    /// factor of exactly zero or a non-finite value.
    #[error("invalid gesture parameters: {0}")]
    InvalidGesture(String),
}
