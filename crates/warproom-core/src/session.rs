//! Interactive transform session state.
//!
//! The originally loaded image is the source of truth: every displayed
//! frame is a fresh resample of it through the current cumulative transform,
//! never an incremental transform of the previous frame, so resampling
//! error cannot compound across gestures.
//!
//! Two matrices make up the state. `past` holds everything committed by
//! finished gestures; `current` additionally reflects the one in-progress
//! gesture. Every gesture event recomputes `current = elementary * past`
//! wholesale, and releasing the gesture folds it in with `commit`.

use crate::gesture::{compose, Gesture};
use crate::raster::{Pixel, RasterImage};
use crate::resample::resample;
use crate::{Mat3, TransformError};

/// Session state driving interactive transforms of one loaded image.
///
/// Single-threaded by design: [`update`](Self::update) reads `past` and
/// writes `current`, while [`commit`](Self::commit) reads `current` and
/// writes `past`. A host driving one session from multiple threads must
/// serialize those calls externally or the two fields fall out of step.
#[derive(Debug, Clone)]
pub struct TransformSession {
    original: RasterImage,
    background: Pixel,
    past: Mat3,
    current: Mat3,
}

impl TransformSession {
    /// Start a session on `original` with both transforms at identity.
    ///
    /// `background` fills destination pixels whose pre-image falls off the
    /// source; YCbCr hosts pass [`crate::color::YCBCR_BLACK`].
    pub fn new(original: RasterImage, background: Pixel) -> Self {
        Self {
            original,
            background,
            past: Mat3::IDENTITY,
            current: Mat3::IDENTITY,
        }
    }

    /// Replace the loaded image and reset the session.
    pub fn load_original(&mut self, image: RasterImage) {
        self.original = image;
        self.begin();
    }

    /// Reset both transforms to identity.
    pub fn begin(&mut self) {
        self.past = Mat3::IDENTITY;
        self.current = Mat3::IDENTITY;
    }

    /// Adopt a previously committed transform, e.g. one restored from host
    /// storage. Both `past` and `current` take the value, as if a gesture
    /// had just been committed.
    pub fn restore(&mut self, past: Mat3) {
        self.past = past;
        self.current = past;
    }

    /// Recompute the in-progress transform from a gesture event.
    ///
    /// Builds the gesture's elementary matrix about the original image's
    /// center and composes it onto `past`, replacing `current` wholesale.
    /// `past` itself is untouched, so a stream of updates from a single
    /// gesture keeps being measured against the same committed base.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidGesture`] for rejected parameters;
    /// the session state is left unchanged in that case.
    pub fn update(&mut self, gesture: &Gesture) -> Result<Mat3, TransformError> {
        let (cx, cy) = self.center();
        let elementary = gesture.matrix(cx, cy)?;
        self.current = compose(elementary, self.past);
        Ok(self.current)
    }

    /// Fold the in-progress gesture into the committed transform.
    ///
    /// Call once per completed gesture (pointer release), never mid-gesture.
    pub fn commit(&mut self) {
        self.past = self.current;
    }

    /// Resample the original through the current transform.
    ///
    /// This is the displayed-image invariant made callable: the frame a
    /// host should be showing is exactly this function's result.
    ///
    /// # Errors
    ///
    /// Propagates resampling failures; see [`resample`].
    pub fn render(&self) -> Result<RasterImage, TransformError> {
        resample(
            &self.original,
            self.original.width,
            self.original.height,
            &self.current,
            self.background,
        )
    }

    /// Handle a gesture-update event: recompute `current` and return the
    /// freshly resampled frame for immediate presentation.
    pub fn apply_gesture(&mut self, gesture: &Gesture) -> Result<RasterImage, TransformError> {
        self.update(gesture)?;
        self.render()
    }

    /// Handle gesture completion (pointer release).
    pub fn end_gesture(&mut self) {
        self.commit();
    }

    /// Center of the original image, the fixed point for rotate and scale
    /// gestures.
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.original.width) / 2.0,
            f64::from(self.original.height) / 2.0,
        )
    }

    /// The committed transform.
    pub fn past(&self) -> Mat3 {
        self.past
    }

    /// The transform including the in-progress gesture.
    pub fn current(&self) -> Mat3 {
        self.current
    }

    /// The loaded image. Never mutated by the session.
    pub fn original(&self) -> &RasterImage {
        &self.original
    }

    /// The out-of-bounds fill value.
    pub fn background(&self) -> Pixel {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_3;

    use super::*;
    use crate::gesture::{compose, rotation_about_center, translation};

    const BG: Pixel = [0, 128, 128];

    fn session_4x4() -> TransformSession {
        let mut img = RasterImage::filled(4, 4, [0, 0, 0]);
        img.set_pixel(1, 1, [255, 255, 255]);
        TransformSession::new(img, BG)
    }

    #[test]
    fn test_new_session_is_identity() {
        let session = session_4x4();
        assert_eq!(session.past(), Mat3::IDENTITY);
        assert_eq!(session.current(), Mat3::IDENTITY);
    }

    #[test]
    fn test_center_uses_original_dimensions() {
        let img = RasterImage::filled(5, 3, [0, 0, 0]);
        let session = TransformSession::new(img, BG);
        assert_eq!(session.center(), (2.5, 1.5));
    }

    #[test]
    fn test_update_leaves_past_untouched() {
        let mut session = session_4x4();
        session
            .update(&Gesture::Translate { dx: 1.0, dy: 0.0 })
            .unwrap();
        assert_eq!(session.past(), Mat3::IDENTITY);
        assert_eq!(session.current(), translation(1.0, 0.0));
    }

    #[test]
    fn test_updates_within_a_gesture_replace_current() {
        // A gesture in progress keeps being measured against the same
        // committed base; deltas do not pile up between events.
        let mut session = session_4x4();
        session
            .update(&Gesture::Translate { dx: 1.0, dy: 0.0 })
            .unwrap();
        session
            .update(&Gesture::Translate { dx: 5.0, dy: 0.0 })
            .unwrap();
        assert_eq!(session.current(), translation(5.0, 0.0));
    }

    #[test]
    fn test_commit_makes_gesture_the_new_base() {
        // translate, commit, then rotate: the second gesture's transform
        // must compose onto the committed translation, not replace it.
        let mut session = session_4x4();
        session
            .update(&Gesture::Translate { dx: 1.0, dy: 0.0 })
            .unwrap();
        session.end_gesture();
        assert_eq!(session.past(), translation(1.0, 0.0));

        session
            .update(&Gesture::Rotate { theta: FRAC_PI_3 })
            .unwrap();
        let expected = compose(
            rotation_about_center(2.0, 2.0, FRAC_PI_3),
            translation(1.0, 0.0),
        );
        assert_eq!(session.current(), expected);
    }

    #[test]
    fn test_render_identity_returns_original() {
        let session = session_4x4();
        let frame = session.render().unwrap();
        assert_eq!(frame.pixels, session.original().pixels);
    }

    #[test]
    fn test_apply_gesture_returns_fresh_frame() {
        let mut session = session_4x4();
        let frame = session
            .apply_gesture(&Gesture::Translate { dx: 1.0, dy: 0.0 })
            .unwrap();
        assert_eq!(frame.pixel(2, 1), [255, 255, 255]);
        assert_eq!(frame.pixel(0, 0), BG);
        // The loaded image itself is untouched.
        assert_eq!(session.original().pixel(1, 1), [255, 255, 255]);
    }

    #[test]
    fn test_committed_gestures_accumulate_in_frames() {
        // Two committed single-pixel shifts resample like one double shift,
        // because each frame is rebuilt from the original image.
        let mut session = session_4x4();
        session
            .apply_gesture(&Gesture::Translate { dx: 1.0, dy: 0.0 })
            .unwrap();
        session.end_gesture();
        let frame = session
            .apply_gesture(&Gesture::Translate { dx: 1.0, dy: 0.0 })
            .unwrap();
        session.end_gesture();

        assert_eq!(frame.pixel(3, 1), [255, 255, 255]);
        // Columns 0 and 1 have no pre-image after a shift of two.
        assert_eq!(frame.pixel(1, 1), BG);
        assert_eq!(session.past(), session.current());
    }

    #[test]
    fn test_invalid_gesture_leaves_state_unchanged() {
        let mut session = session_4x4();
        session
            .update(&Gesture::Translate { dx: 1.0, dy: 0.0 })
            .unwrap();
        let err = session.update(&Gesture::Scale { factor: 0.0 });
        assert!(matches!(err, Err(TransformError::InvalidGesture(_))));
        assert_eq!(session.current(), translation(1.0, 0.0));
        assert_eq!(session.past(), Mat3::IDENTITY);
    }

    #[test]
    fn test_load_original_resets_transforms() {
        let mut session = session_4x4();
        session
            .update(&Gesture::Translate { dx: 1.0, dy: 0.0 })
            .unwrap();
        session.end_gesture();

        session.load_original(RasterImage::filled(2, 2, [9, 9, 9]));
        assert_eq!(session.past(), Mat3::IDENTITY);
        assert_eq!(session.current(), Mat3::IDENTITY);
        assert_eq!(session.center(), (1.0, 1.0));
    }

    #[test]
    fn test_restore_sets_both_transforms() {
        let mut session = session_4x4();
        let saved = translation(2.0, -1.0);
        session.restore(saved);
        assert_eq!(session.past(), saved);
        assert_eq!(session.current(), saved);
    }
}
