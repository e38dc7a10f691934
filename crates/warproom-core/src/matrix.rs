//! 3x3 homogeneous transform matrices.
//!
//! [`Mat3`] is the value type every transform in Warproom reduces to: a
//! row-major 3x3 real matrix applied to 2D points promoted to homogeneous
//! coordinates `(x, y, 1)`. Operations never mutate in place; composition
//! and inversion always return new matrices.

use serde::{Deserialize, Serialize};

use crate::TransformError;

/// Determinant magnitude below which a matrix is treated as singular.
///
/// The same tolerance guards the homogeneous divide in [`Mat3::apply`]. The
/// affine matrices built from gestures have `|det| = s^2` for a scale factor
/// `s`, so a determinant this small indicates degenerate caller input rather
/// than accumulated rounding.
pub const DET_EPSILON: f64 = 1e-12;

/// A 3x3 homogeneous transform over `f64`, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat3 {
    m: [[f64; 3]; 3],
}

impl Mat3 {
    /// The identity transform.
    pub const IDENTITY: Mat3 = Mat3 {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Construct a matrix from row-major rows.
    pub const fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// The row-major entries.
    pub fn rows(&self) -> [[f64; 3]; 3] {
        self.m
    }

    /// Determinant, by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Compute the inverse via the adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::SingularMatrix`] when the determinant's
    /// magnitude is below [`DET_EPSILON`]; the division by the determinant
    /// is only performed after that check.
    pub fn invert(&self) -> Result<Mat3, TransformError> {
        let det = self.determinant();
        if det.abs() < DET_EPSILON {
            return Err(TransformError::SingularMatrix);
        }
        let m = &self.m;
        let inv_det = 1.0 / det;
        Ok(Mat3 {
            m: [
                [
                    (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                    (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                    (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
                ],
                [
                    (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                    (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                    (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
                ],
                [
                    (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                    (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                    (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
                ],
            ],
        })
    }

    /// Apply this transform to a 2D point.
    ///
    /// Promotes `(x, y)` to `(x, y, 1)`, multiplies, and divides by the
    /// resulting w component to recover 2D coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DegenerateProjection`] when `|w|` falls
    /// below [`DET_EPSILON`]. Affine transforms keep w = 1, so this only
    /// fires for degenerate caller-built matrices; it is surfaced rather
    /// than swallowed.
    pub fn apply(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        let m = &self.m;
        let tx = m[0][0] * x + m[0][1] * y + m[0][2];
        let ty = m[1][0] * x + m[1][1] * y + m[1][2];
        let w = m[2][0] * x + m[2][1] * y + m[2][2];
        if w.abs() < DET_EPSILON {
            return Err(TransformError::DegenerateProjection { x, y });
        }
        Ok((tx / w, ty / w))
    }

    /// Entrywise comparison within `eps`.
    pub fn approx_eq(&self, other: &Mat3, eps: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Mat3 {
    type Output = Mat3;

    /// Standard 3x3 matrix product `self * rhs`. Always defined.
    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut out = [[0.0f64; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Mat3 { m: out }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use std::f64::consts::PI;

    use proptest::prelude::*;

    use super::*;
    use crate::gesture::{compose, rotation_about_center, scale_about_center, translation};

    /// Strategy for invertible affine transforms: translate * rotate * scale
    /// about an arbitrary center, with the scale bounded away from zero.
    fn affine_strategy() -> impl Strategy<Value = Mat3> {
        (
            -200.0f64..=200.0, // dx
            -200.0f64..=200.0, // dy
            -PI..=PI,          // theta
            0.1f64..=8.0,      // scale magnitude
            prop::bool::ANY,   // mirror
            -50.0f64..=50.0,   // cx
            -50.0f64..=50.0,   // cy
        )
            .prop_map(|(dx, dy, theta, s, mirror, cx, cy)| {
                let s = if mirror { -s } else { s };
                translation(dx, dy)
                    * rotation_about_center(cx, cy, theta)
                    * scale_about_center(cx, cy, s)
            })
    }

    proptest! {
        /// Property: applying the inverse undoes the forward transform.
        #[test]
        fn prop_invert_round_trips_points(
            m in affine_strategy(),
            x in -100.0f64..=100.0,
            y in -100.0f64..=100.0,
        ) {
            let inv = m.invert().unwrap();
            let (fx, fy) = m.apply(x, y).unwrap();
            let (bx, by) = inv.apply(fx, fy).unwrap();
            prop_assert!(
                (bx - x).abs() < 1e-6 && (by - y).abs() < 1e-6,
                "round trip moved ({}, {}) to ({}, {})",
                x, y, bx, by
            );
        }

        /// Property: composition is associative.
        #[test]
        fn prop_composition_associative(
            a in affine_strategy(),
            b in affine_strategy(),
            c in affine_strategy(),
        ) {
            let lhs = compose(a, compose(b, c));
            let rhs = compose(compose(a, b), c);
            prop_assert!(lhs.approx_eq(&rhs, 1e-6));
        }

        /// Property: the identity is neutral on both sides.
        #[test]
        fn prop_identity_is_neutral(m in affine_strategy()) {
            prop_assert!((m * Mat3::IDENTITY).approx_eq(&m, 1e-12));
            prop_assert!((Mat3::IDENTITY * m).approx_eq(&m, 1e-12));
        }

        /// Property: affine transforms never produce a degenerate w.
        #[test]
        fn prop_affine_apply_never_degenerate(
            m in affine_strategy(),
            x in -100.0f64..=100.0,
            y in -100.0f64..=100.0,
        ) {
            prop_assert!(m.apply(x, y).is_ok());
        }
    }
}
