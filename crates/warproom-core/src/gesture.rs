//! Gesture-driven elementary transforms.
//!
//! Each user gesture (one translate, rotate, or scale action between pointer
//! press and release) reduces to a single elementary homogeneous matrix.
//! Rotation and scaling are composed about the image center as
//! `T(cx, cy) * M * T(-cx, -cy)`: move the center to the origin, transform,
//! move it back.
//!
//! # Coordinate System
//!
//! Angles are in radians, counter-clockwise positive in a y-up mathematical
//! frame. Hosts working in y-down screen coordinates must negate the angle
//! before calling in; this sign convention is part of the contract, not an
//! implementation detail.

use serde::{Deserialize, Serialize};

use crate::{Mat3, TransformError};

/// The gesture classes the engine accepts from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    /// Drag: shift the image in the plane.
    Translate,
    /// Twist: rotate the image about its center.
    Rotate,
    /// Pinch: scale the image about its center.
    Scale,
}

/// A classified gesture event with its parameters.
///
/// The input layer is responsible for turning raw pointer motion into these
/// values (pixel deltas, an angle, or a distance ratio); the engine only
/// validates and builds matrices from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    /// Shift by `(dx, dy)` pixels.
    Translate {
        /// Horizontal shift in pixels.
        dx: f64,
        /// Vertical shift in pixels (positive is up in a y-up frame).
        dy: f64,
    },
    /// Rotate about the image center by `theta` radians,
    /// counter-clockwise positive in a y-up frame.
    Rotate {
        /// Rotation angle in radians.
        theta: f64,
    },
    /// Scale uniformly about the image center.
    ///
    /// Negative factors are accepted and mirror the image through its
    /// center; a factor of exactly zero is rejected.
    Scale {
        /// Uniform scale factor.
        factor: f64,
    },
}

impl Gesture {
    /// The class of this gesture.
    pub fn kind(&self) -> GestureKind {
        match self {
            Gesture::Translate { .. } => GestureKind::Translate,
            Gesture::Rotate { .. } => GestureKind::Rotate,
            Gesture::Scale { .. } => GestureKind::Scale,
        }
    }

    /// Build the elementary matrix for this gesture about center `(cx, cy)`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidGesture`] for non-finite parameters
    /// or a scale factor of exactly zero, which would make the composed
    /// transform non-invertible.
    pub fn matrix(&self, cx: f64, cy: f64) -> Result<Mat3, TransformError> {
        if !cx.is_finite() || !cy.is_finite() {
            return Err(TransformError::InvalidGesture(format!(
                "non-finite center ({cx}, {cy})"
            )));
        }
        match *self {
            Gesture::Translate { dx, dy } => {
                if !dx.is_finite() || !dy.is_finite() {
                    return Err(TransformError::InvalidGesture(format!(
                        "non-finite translation ({dx}, {dy})"
                    )));
                }
                Ok(translation(dx, dy))
            }
            Gesture::Rotate { theta } => {
                if !theta.is_finite() {
                    return Err(TransformError::InvalidGesture(format!(
                        "non-finite rotation angle {theta}"
                    )));
                }
                Ok(rotation_about_center(cx, cy, theta))
            }
            Gesture::Scale { factor } => {
                if !factor.is_finite() || factor == 0.0 {
                    return Err(TransformError::InvalidGesture(format!(
                        "scale factor must be finite and non-zero, got {factor}"
                    )));
                }
                Ok(scale_about_center(cx, cy, factor))
            }
        }
    }
}

/// Homogeneous translation by `(dx, dy)`.
pub fn translation(dx: f64, dy: f64) -> Mat3 {
    Mat3::from_rows([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
}

/// Rotation by `theta` radians about `(cx, cy)`.
///
/// Counter-clockwise positive in a y-up frame; y-down callers negate the
/// angle. Composed as `T(cx, cy) * R(theta) * T(-cx, -cy)`.
pub fn rotation_about_center(cx: f64, cy: f64, theta: f64) -> Mat3 {
    let (sin, cos) = theta.sin_cos();
    let rotate = Mat3::from_rows([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]]);
    translation(cx, cy) * rotate * translation(-cx, -cy)
}

/// Uniform scale by `s` about `(cx, cy)`.
///
/// Composed as `T(cx, cy) * S(s, s) * T(-cx, -cy)`. Total for any `s`;
/// validation of host-supplied factors happens at the [`Gesture`] boundary,
/// where a zero factor is rejected before it can reach [`crate::resample`].
pub fn scale_about_center(cx: f64, cy: f64, s: f64) -> Mat3 {
    let scale = Mat3::from_rows([[s, 0.0, 0.0], [0.0, s, 0.0], [0.0, 0.0, 1.0]]);
    translation(cx, cy) * scale * translation(-cx, -cy)
}

/// Compose a fresh elementary transform onto the accumulated past transform.
///
/// Returns `elementary * past`. Order matters: the elementary matrix
/// multiplies from the left, so the new gesture acts on the image as already
/// transformed by everything committed before it.
pub fn compose(elementary: Mat3, past: Mat3) -> Mat3 {
    elementary * past
}
