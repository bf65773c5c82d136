// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture anchor: the reference needed to compute the next incremental delta.
//!
//! ## Usage
//!
//! 1) Start a single-contact drag with [`GestureAnchor::start_drag`].
//! 2) On each move, call [`GestureAnchor::drag_to`] to get the movement since
//!    the previous move (not since the start).
//! 3) When a second contact appears, call [`GestureAnchor::start_pair`]; each
//!    [`GestureAnchor::pair_to`] then yields rotation/scale deltas relative to
//!    the previous pair sample.
//! 4) End with [`GestureAnchor::end`].
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::anchor::GestureAnchor;
//!
//! let mut anchor = GestureAnchor::default();
//! anchor.start_drag(Point::new(100.0, 100.0));
//!
//! assert_eq!(anchor.drag_to(Point::new(140.0, 130.0)), Some(Vec2::new(40.0, 30.0)));
//! assert_eq!(anchor.drag_to(Point::new(150.0, 150.0)), Some(Vec2::new(10.0, 20.0)));
//! ```

use kurbo::{Point, Vec2};

use crate::geometry::{angle_between, distance_between};

/// Coarse phase of the gesture being tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No active contact.
    #[default]
    Idle,
    /// One contact is being dragged.
    SingleDrag,
    /// A second contact appeared on top of the first one, so the pair start is
    /// deferred until the contacts separate.
    PairPending,
    /// Two contacts are tracked for pinch/rotate.
    MultiGesture,
}

/// Last-known reference for the active gesture.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureAnchor {
    /// Nothing tracked; moves are ignored.
    #[default]
    Idle,
    /// Last observed position of the primary contact.
    SingleDrag {
        /// Position reported by the previous event.
        last: Point,
    },
    /// Two contacts are down but coincide; waiting for a usable distance.
    PairPending,
    /// Last observed pair metrics.
    MultiGesture {
        /// Inter-contact distance, always strictly positive.
        distance: f64,
        /// Inter-contact angle in degrees.
        angle: f64,
    },
}

/// Result of feeding a pair sample to a [`GestureAnchor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PairUpdate {
    /// The pair reference was (re)captured; there is nothing to emit yet.
    Started,
    /// Rotation (degrees) and relative scale change since the previous sample.
    Moved {
        /// `current angle - previous angle`.
        rotation: f64,
        /// `(current distance - previous distance) / previous distance`.
        scale: f64,
    },
}

impl GestureAnchor {
    /// Returns the coarse phase for this anchor.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self {
            Self::Idle => GesturePhase::Idle,
            Self::SingleDrag { .. } => GesturePhase::SingleDrag,
            Self::PairPending => GesturePhase::PairPending,
            Self::MultiGesture { .. } => GesturePhase::MultiGesture,
        }
    }

    /// Start tracking a single-contact drag from `pos`, replacing any previous state.
    ///
    /// A non-finite `pos` is ignored and the anchor is left as it was.
    pub fn start_drag(&mut self, pos: Point) {
        if pos.is_finite() {
            *self = Self::SingleDrag { last: pos };
        }
    }

    /// Move the dragged contact to `pos`, returning the movement since the last call.
    ///
    /// Returns `None` and leaves the anchor untouched unless a single drag is
    /// active and `pos` is finite.
    pub fn drag_to(&mut self, pos: Point) -> Option<Vec2> {
        match self {
            Self::SingleDrag { last } if pos.is_finite() => {
                let delta = pos - *last;
                *last = pos;
                Some(delta)
            }
            _ => None,
        }
    }

    /// Capture `p1`/`p2` as the pair reference, discarding any drag anchor.
    ///
    /// Returns `false` when the contacts coincide (or are non-finite); the anchor
    /// is then left in [`GestureAnchor::PairPending`] so that the next usable
    /// sample starts the pair instead.
    pub fn start_pair(&mut self, p1: Point, p2: Point) -> bool {
        let distance = distance_between(p1, p2);
        let angle = angle_between(p1, p2);
        if distance > 0.0 && distance.is_finite() && angle.is_finite() {
            *self = Self::MultiGesture { distance, angle };
            true
        } else {
            *self = Self::PairPending;
            false
        }
    }

    /// Feed the current pair positions.
    ///
    /// - In [`GestureAnchor::MultiGesture`], returns the change since the previous
    ///   sample and moves the reference to the current one.
    /// - In [`GestureAnchor::PairPending`], tries to start the pair.
    /// - Otherwise returns `None`: pair moves without a pair start are stray.
    ///
    /// A sample whose distance is zero or non-finite never becomes the reference,
    /// which keeps the next scale division well defined.
    pub fn pair_to(&mut self, p1: Point, p2: Point) -> Option<PairUpdate> {
        match *self {
            Self::MultiGesture { distance, angle } => {
                let current_distance = distance_between(p1, p2);
                let current_angle = angle_between(p1, p2);
                if !current_distance.is_finite() || !current_angle.is_finite() {
                    return None;
                }
                let update = PairUpdate::Moved {
                    rotation: current_angle - angle,
                    scale: (current_distance - distance) / distance,
                };
                if current_distance > 0.0 {
                    *self = Self::MultiGesture {
                        distance: current_distance,
                        angle: current_angle,
                    };
                } else {
                    *self = Self::PairPending;
                }
                Some(update)
            }
            Self::PairPending => self.start_pair(p1, p2).then_some(PairUpdate::Started),
            Self::Idle | Self::SingleDrag { .. } => None,
        }
    }

    /// End the current gesture and reset to [`GestureAnchor::Idle`].
    pub fn end(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{GestureAnchor, GesturePhase, PairUpdate};

    #[test]
    fn new_anchor_is_idle() {
        let anchor = GestureAnchor::default();
        assert_eq!(anchor.phase(), GesturePhase::Idle);
    }

    #[test]
    fn non_finite_drag_samples_keep_the_anchor() {
        let mut anchor = GestureAnchor::default();
        anchor.start_drag(Point::new(f64::NAN, 0.0));
        assert_eq!(anchor, GestureAnchor::Idle);

        anchor.start_drag(Point::new(0.0, 0.0));
        assert_eq!(anchor.drag_to(Point::new(f64::NAN, 5.0)), None);
        assert_eq!(anchor.drag_to(Point::new(f64::INFINITY, 5.0)), None);
        assert_eq!(anchor, GestureAnchor::SingleDrag { last: Point::ZERO });

        assert_eq!(
            anchor.drag_to(Point::new(10.0, 10.0)),
            Some(Vec2::new(10.0, 10.0))
        );

        // Restarting with a bad point does not drop the live drag either.
        anchor.start_drag(Point::new(0.0, f64::NEG_INFINITY));
        assert_eq!(
            anchor,
            GestureAnchor::SingleDrag {
                last: Point::new(10.0, 10.0)
            }
        );
    }

    #[test]
    fn non_finite_pair_sample_keeps_the_reference() {
        let mut anchor = GestureAnchor::default();
        anchor.start_pair(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

        assert_eq!(
            anchor.pair_to(Point::new(0.0, 0.0), Point::new(f64::NAN, 0.0)),
            None
        );
        assert_eq!(
            anchor,
            GestureAnchor::MultiGesture {
                distance: 10.0,
                angle: 0.0
            }
        );
    }

    #[test]
    fn drag_to_without_start_is_ignored() {
        let mut anchor = GestureAnchor::default();
        assert_eq!(anchor.drag_to(Point::new(15.0, 25.0)), None);
        assert_eq!(anchor, GestureAnchor::Idle);
    }

    #[test]
    fn drag_deltas_are_relative_to_previous_move() {
        let mut anchor = GestureAnchor::default();
        anchor.start_drag(Point::new(0.0, 0.0));

        assert_eq!(anchor.drag_to(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(anchor.drag_to(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(anchor.drag_to(Point::new(6.0, 7.0)), Some(Vec2::new(-2.0, 0.0)));
        assert_eq!(
            anchor,
            GestureAnchor::SingleDrag {
                last: Point::new(6.0, 7.0)
            }
        );
    }

    #[test]
    fn drag_starting_at_origin_is_tracked() {
        let mut anchor = GestureAnchor::default();
        anchor.start_drag(Point::ZERO);
        assert_eq!(anchor.drag_to(Point::new(1.0, 1.0)), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn start_pair_discards_drag_anchor() {
        let mut anchor = GestureAnchor::default();
        anchor.start_drag(Point::new(10.0, 10.0));

        assert!(anchor.start_pair(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
        assert_eq!(
            anchor,
            GestureAnchor::MultiGesture {
                distance: 10.0,
                angle: 0.0
            }
        );
        assert_eq!(anchor.drag_to(Point::new(20.0, 20.0)), None);
    }

    #[test]
    fn pair_move_reports_rotation_and_scale() {
        let mut anchor = GestureAnchor::default();
        anchor.start_pair(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

        let update = anchor.pair_to(Point::new(0.0, 0.0), Point::new(0.0, 20.0));
        assert_eq!(
            update,
            Some(PairUpdate::Moved {
                rotation: 90.0,
                scale: 1.0
            })
        );
        assert_eq!(
            anchor,
            GestureAnchor::MultiGesture {
                distance: 20.0,
                angle: 90.0
            }
        );
    }

    #[test]
    fn coincident_pair_start_is_deferred() {
        let mut anchor = GestureAnchor::default();
        let p = Point::new(5.0, 5.0);

        assert!(!anchor.start_pair(p, p));
        assert_eq!(anchor.phase(), GesturePhase::PairPending);

        // Still coincident: stays pending, nothing to emit.
        assert_eq!(anchor.pair_to(p, p), None);
        assert_eq!(anchor.phase(), GesturePhase::PairPending);

        // Separation starts the pair without emitting a delta.
        assert_eq!(
            anchor.pair_to(p, Point::new(15.0, 5.0)),
            Some(PairUpdate::Started)
        );
        assert_eq!(anchor.phase(), GesturePhase::MultiGesture);
    }

    #[test]
    fn collapsing_pair_falls_back_to_pending() {
        let mut anchor = GestureAnchor::default();
        anchor.start_pair(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

        let update = anchor.pair_to(Point::new(3.0, 0.0), Point::new(3.0, 0.0));
        assert_eq!(
            update,
            Some(PairUpdate::Moved {
                rotation: 0.0,
                scale: -1.0
            })
        );
        assert_eq!(anchor.phase(), GesturePhase::PairPending);
    }

    #[test]
    fn stray_pair_move_is_ignored() {
        let mut anchor = GestureAnchor::default();
        assert_eq!(
            anchor.pair_to(Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
            None
        );
        assert_eq!(anchor, GestureAnchor::Idle);
    }

    #[test]
    fn end_resets_any_phase() {
        let mut anchor = GestureAnchor::default();
        anchor.start_pair(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        anchor.end();
        assert_eq!(anchor, GestureAnchor::Idle);

        anchor.end();
        assert_eq!(anchor, GestureAnchor::Idle);
    }
}
