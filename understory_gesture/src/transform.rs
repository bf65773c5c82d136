// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Cumulative pan/rotate/scale state produced by a [`crate::GestureReducer`].
///
/// All four fields accumulate additively. `scale` follows the same rule: a
/// pinch that grows the contact distance by 10% adds `0.1` to it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Horizontal translation in input (device) units.
    pub move_x: f64,
    /// Vertical translation in input (device) units.
    pub move_y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Scale factor; `1.0` is the natural size.
    pub scale: f64,
}

impl Transform {
    /// The transform before any input has been reduced: no translation, no
    /// rotation, unit scale.
    pub const INITIAL: Self = Self {
        move_x: 0.0,
        move_y: 0.0,
        rotation: 0.0,
        scale: 1.0,
    };

    /// Returns this transform with `delta` folded in field by field.
    #[must_use]
    pub fn with_delta(self, delta: TransformDelta) -> Self {
        Self {
            move_x: self.move_x + delta.move_x,
            move_y: self.move_y + delta.move_y,
            rotation: self.rotation + delta.rotation,
            scale: self.scale + delta.scale,
        }
    }

    /// Returns this transform with translation discarded.
    #[must_use]
    pub fn without_translation(self) -> Self {
        Self {
            move_x: 0.0,
            move_y: 0.0,
            ..self
        }
    }

    /// Returns `true` if every field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.move_x.is_finite()
            && self.move_y.is_finite()
            && self.rotation.is_finite()
            && self.scale.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Returns [`Transform::INITIAL`].
#[must_use]
pub const fn initial_transform() -> Transform {
    Transform::INITIAL
}

/// A partial update to a [`Transform`], produced by interpreting one input event.
///
/// Fields not touched by an event stay at `0.0` and contribute nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformDelta {
    /// Change in horizontal translation.
    pub move_x: f64,
    /// Change in vertical translation.
    pub move_y: f64,
    /// Change in rotation, in degrees.
    pub rotation: f64,
    /// Change in scale.
    pub scale: f64,
}

impl TransformDelta {
    /// A delta that changes nothing.
    pub const ZERO: Self = Self {
        move_x: 0.0,
        move_y: 0.0,
        rotation: 0.0,
        scale: 0.0,
    };

    /// A pure translation delta.
    #[must_use]
    pub const fn translate(move_x: f64, move_y: f64) -> Self {
        Self {
            move_x,
            move_y,
            ..Self::ZERO
        }
    }

    /// A pure rotation/scale delta.
    #[must_use]
    pub const fn rotate_scale(rotation: f64, scale: f64) -> Self {
        Self {
            rotation,
            scale,
            ..Self::ZERO
        }
    }

    /// Returns `true` if every field is exactly zero.
    ///
    /// Applying such a delta is a no-op.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.move_x == 0.0 && self.move_y == 0.0 && self.rotation == 0.0 && self.scale == 0.0
    }

    /// Returns `true` if every field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.move_x.is_finite()
            && self.move_y.is_finite()
            && self.rotation.is_finite()
            && self.scale.is_finite()
    }
}
