// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default multiplier applied to raw wheel deltas when panning.
pub const DEFAULT_WHEEL_PAN_FACTOR: f64 = 2.0;

/// Default multiplier applied to the raw vertical wheel delta when zooming.
pub const DEFAULT_WHEEL_ZOOM_FACTOR: f64 = 0.01;

/// Configuration for a [`crate::GestureReducer`].
///
/// The wheel factors are tuning constants rather than physical ones; the
/// defaults reproduce the usual "2× pan, 1% zoom per wheel unit" feel.
///
/// ```
/// use understory_gesture::GestureOptions;
///
/// let options = GestureOptions::default()
///     .with_snap_back_on_release(true)
///     .with_wheel_zoom_factor(0.005);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureOptions {
    /// Discard translation when a drag or pair gesture is released.
    ///
    /// When `false` (the default), translation persists across gestures.
    /// Rotation and scale are never snapped back.
    pub snap_back_on_release: bool,
    /// Wheel-to-pan multiplier. Wheel deltas are inverted and scaled by this.
    pub wheel_pan_factor: f64,
    /// Wheel-to-zoom multiplier, used when the zoom modifier is held.
    pub wheel_zoom_factor: f64,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            snap_back_on_release: false,
            wheel_pan_factor: DEFAULT_WHEEL_PAN_FACTOR,
            wheel_zoom_factor: DEFAULT_WHEEL_ZOOM_FACTOR,
        }
    }
}

impl GestureOptions {
    /// Sets [`Self::snap_back_on_release`].
    #[must_use]
    pub fn with_snap_back_on_release(mut self, snap_back: bool) -> Self {
        self.snap_back_on_release = snap_back;
        self
    }

    /// Sets [`Self::wheel_pan_factor`].
    #[must_use]
    pub fn with_wheel_pan_factor(mut self, factor: f64) -> Self {
        self.wheel_pan_factor = factor;
        self
    }

    /// Sets [`Self::wheel_zoom_factor`].
    #[must_use]
    pub fn with_wheel_zoom_factor(mut self, factor: f64) -> Self {
        self.wheel_zoom_factor = factor;
        self
    }

    /// Checks that both wheel factors are finite.
    ///
    /// Negative and zero factors are allowed: zero disables that wheel
    /// behavior, a negative factor flips its direction.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.wheel_pan_factor.is_finite() {
            return Err(OptionsError::NonFiniteWheelPanFactor(self.wheel_pan_factor));
        }
        if !self.wheel_zoom_factor.is_finite() {
            return Err(OptionsError::NonFiniteWheelZoomFactor(
                self.wheel_zoom_factor,
            ));
        }
        Ok(())
    }
}

/// Rejected [`GestureOptions`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    /// The wheel pan factor is NaN or infinite.
    #[error("wheel pan factor must be finite, got {0}")]
    NonFiniteWheelPanFactor(f64),
    /// The wheel zoom factor is NaN or infinite.
    #[error("wheel zoom factor must be finite, got {0}")]
    NonFiniteWheelZoomFactor(f64),
}
