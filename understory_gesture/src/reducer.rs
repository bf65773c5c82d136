// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Vec2};
use tracing::{debug, trace};

use crate::anchor::{GestureAnchor, GesturePhase, PairUpdate};
use crate::options::{GestureOptions, OptionsError};
use crate::transform::{Transform, TransformDelta};

/// One platform-normalized input event.
///
/// Adapters that queue events can feed these through [`GestureReducer::handle`];
/// the `on_*` methods on [`GestureReducer`] are shorthands for the same thing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureInput {
    /// Primary button pressed, or a single touch started.
    PrimaryDown {
        /// Contact position.
        position: Point,
        /// Whether the event target is the surface or one of its descendants.
        within_surface: bool,
    },
    /// Primary contact moved.
    PrimaryMove {
        /// Contact position.
        position: Point,
    },
    /// Primary button released, or the single touch ended.
    PrimaryUp,
    /// A second contact appeared; `first` and `second` are the first two
    /// contacts reported by the input source.
    SecondaryContactStart {
        /// First reported contact.
        first: Point,
        /// Second reported contact.
        second: Point,
    },
    /// Two contacts moved.
    SecondaryContactMove {
        /// First reported contact.
        first: Point,
        /// Second reported contact.
        second: Point,
    },
    /// A contact of the pair lifted.
    SecondaryContactEnd {
        /// Contacts still down after this event.
        remaining: usize,
    },
    /// Wheel or trackpad scroll.
    Wheel {
        /// Raw wheel delta.
        delta: Vec2,
        /// Whether the zoom modifier (usually Ctrl, or a trackpad pinch) is active.
        zoom_modifier: bool,
    },
}

/// What a [`Step`] asks the owner of the transform to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Fold this delta into the transform.
    Apply(TransformDelta),
    /// Discard translation, keeping rotation and scale.
    SnapBack,
}

/// The outcome of [`step`]: the next anchor and an optional effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Anchor to keep for the next event.
    pub anchor: GestureAnchor,
    /// Transform change requested by this event, if any.
    pub effect: Option<Effect>,
}

/// Pure transition function: interpret `input` against `anchor`.
///
/// This never looks at the transform; the caller decides how to apply the
/// returned [`Effect`]. Events must be fed in delivery order since each move is
/// measured against the previous event, not the gesture start.
#[must_use]
pub fn step(anchor: GestureAnchor, options: &GestureOptions, input: GestureInput) -> Step {
    let mut next = anchor;
    let effect = match input {
        GestureInput::PrimaryDown {
            position,
            within_surface,
        } => {
            if within_surface {
                next.start_drag(position);
            }
            None
        }
        GestureInput::PrimaryMove { position } => next
            .drag_to(position)
            .map(|d| Effect::Apply(TransformDelta::translate(d.x, d.y))),
        GestureInput::PrimaryUp => {
            next.end();
            options.snap_back_on_release.then_some(Effect::SnapBack)
        }
        GestureInput::SecondaryContactStart { first, second } => {
            if !next.start_pair(first, second) {
                debug!(?first, ?second, "pair start deferred: contacts coincide");
            }
            None
        }
        GestureInput::SecondaryContactMove { first, second } => {
            match next.pair_to(first, second) {
                Some(PairUpdate::Moved { rotation, scale }) => {
                    Some(Effect::Apply(TransformDelta::rotate_scale(rotation, scale)))
                }
                Some(PairUpdate::Started) | None => None,
            }
        }
        GestureInput::SecondaryContactEnd { remaining } => {
            if remaining < 2 {
                next.end();
                options.snap_back_on_release.then_some(Effect::SnapBack)
            } else {
                None
            }
        }
        GestureInput::Wheel {
            delta,
            zoom_modifier,
        } => Some(Effect::Apply(wheel_delta(options, delta, zoom_modifier))),
    };
    if next.phase() != anchor.phase() {
        debug!(from = ?anchor.phase(), to = ?next.phase(), "gesture phase changed");
    }
    Step {
        anchor: next,
        effect,
    }
}

/// Translate a raw wheel delta into a transform delta.
///
/// With the zoom modifier only the vertical component is used, inverted so that
/// scrolling "up" zooms in. Otherwise both components pan, inverted.
#[must_use]
pub fn wheel_delta(options: &GestureOptions, delta: Vec2, zoom_modifier: bool) -> TransformDelta {
    if zoom_modifier {
        TransformDelta {
            scale: -delta.y * options.wheel_zoom_factor,
            ..TransformDelta::ZERO
        }
    } else {
        TransformDelta::translate(
            -delta.x * options.wheel_pan_factor,
            -delta.y * options.wheel_pan_factor,
        )
    }
}

type Observer = Box<dyn FnMut(&Transform)>;

/// Reduces pointer, touch and wheel input on one surface into a [`Transform`].
///
/// The reducer exclusively owns the transform and the gesture anchor. Every
/// change replaces all four transform fields at once, bumps [`Self::revision`]
/// and then notifies the observer, if one is set.
///
/// ```
/// use kurbo::Point;
/// use understory_gesture::{GestureOptions, GestureReducer};
///
/// let mut reducer = GestureReducer::new("canvas", GestureOptions::default());
///
/// reducer.on_primary_down(100.0, 100.0, true);
/// reducer.on_primary_move(140.0, 130.0);
/// reducer.on_primary_move(150.0, 150.0);
/// reducer.on_primary_up();
///
/// let t = reducer.current_transform();
/// assert_eq!((t.move_x, t.move_y), (50.0, 50.0));
/// ```
pub struct GestureReducer<S> {
    surface: S,
    options: GestureOptions,
    transform: Transform,
    anchor: GestureAnchor,
    revision: u64,
    observer: Option<Observer>,
}

impl<S: fmt::Debug> fmt::Debug for GestureReducer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureReducer")
            .field("surface", &self.surface)
            .field("options", &self.options)
            .field("transform", &self.transform)
            .field("anchor", &self.anchor)
            .field("revision", &self.revision)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl<S> GestureReducer<S> {
    /// Creates a reducer for `surface` starting from [`Transform::INITIAL`].
    ///
    /// `surface` is an application-defined identifier for the interactive
    /// element; the adapter decides whether an event target lies within it.
    #[must_use]
    pub fn new(surface: S, options: GestureOptions) -> Self {
        Self {
            surface,
            options,
            transform: Transform::INITIAL,
            anchor: GestureAnchor::Idle,
            revision: 0,
            observer: None,
        }
    }

    /// Like [`Self::new`], but rejects invalid options.
    pub fn try_new(surface: S, options: GestureOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::new(surface, options))
    }

    /// Returns the surface this reducer tracks.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the active options.
    #[must_use]
    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    /// Returns the latest transform.
    #[must_use]
    pub fn current_transform(&self) -> Transform {
        self.transform
    }

    /// Returns the coarse phase of the tracked gesture.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.anchor.phase()
    }

    /// Monotonic counter bumped on every transform change.
    ///
    /// Consumers that poll can compare revisions instead of transforms.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sets a callback invoked with the new transform after every change.
    ///
    /// It fires at most once per admitted input event and never for a
    /// degenerate (all-zero) delta. Replaces any previous observer.
    pub fn set_observer(&mut self, observer: impl FnMut(&Transform) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer, if any.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Replaces the transform wholesale, e.g. for a "reset view" button.
    ///
    /// The gesture anchor is left alone so an in-flight gesture keeps going
    /// from the new value. A transform with a non-finite field is rejected.
    /// Returns `true` if the transform changed.
    pub fn set_transform(&mut self, next: Transform) -> bool {
        if !next.is_finite() {
            debug!(?next, "rejecting non-finite transform");
            return false;
        }
        self.commit(next)
    }

    /// Returns to [`Transform::INITIAL`] and drops any in-flight gesture.
    pub fn reset(&mut self) {
        self.anchor.end();
        self.commit(Transform::INITIAL);
    }

    /// Folds `delta` into the transform.
    ///
    /// An all-zero delta is a no-op: nothing changes, the revision is not
    /// bumped and the observer is not called. Deltas with a non-finite field
    /// are dropped the same way. Returns `true` if the transform changed.
    pub fn apply_delta(&mut self, delta: TransformDelta) -> bool {
        if delta.is_zero() {
            return false;
        }
        if !delta.is_finite() {
            debug!(?delta, "dropping non-finite delta");
            return false;
        }
        trace!(?delta, "applying delta");
        self.commit(self.transform.with_delta(delta))
    }

    /// Interprets one input event. Returns the delta that was applied, if any.
    pub fn handle(&mut self, input: GestureInput) -> Option<TransformDelta> {
        let Step { anchor, effect } = step(self.anchor, &self.options, input);
        self.anchor = anchor;
        match effect? {
            Effect::Apply(delta) => self.apply_delta(delta).then_some(delta),
            Effect::SnapBack => {
                let undo =
                    TransformDelta::translate(-self.transform.move_x, -self.transform.move_y);
                debug!(?undo, "snapping translation back");
                self.commit(self.transform.without_translation()).then_some(undo)
            }
        }
    }

    /// Primary button down (or single touch start) at `(x, y)`.
    ///
    /// Ignored unless `target_within_surface` is set.
    pub fn on_primary_down(
        &mut self,
        x: f64,
        y: f64,
        target_within_surface: bool,
    ) -> Option<TransformDelta> {
        self.handle(GestureInput::PrimaryDown {
            position: Point::new(x, y),
            within_surface: target_within_surface,
        })
    }

    /// Primary contact moved to `(x, y)`.
    pub fn on_primary_move(&mut self, x: f64, y: f64) -> Option<TransformDelta> {
        self.handle(GestureInput::PrimaryMove {
            position: Point::new(x, y),
        })
    }

    /// Primary button up (or touch end).
    pub fn on_primary_up(&mut self) -> Option<TransformDelta> {
        self.handle(GestureInput::PrimaryUp)
    }

    /// Two contacts down at `p1` and `p2`.
    pub fn on_secondary_contact_start(&mut self, p1: Point, p2: Point) -> Option<TransformDelta> {
        self.handle(GestureInput::SecondaryContactStart {
            first: p1,
            second: p2,
        })
    }

    /// Two contacts moved to `p1` and `p2`.
    pub fn on_secondary_contact_move(&mut self, p1: Point, p2: Point) -> Option<TransformDelta> {
        self.handle(GestureInput::SecondaryContactMove {
            first: p1,
            second: p2,
        })
    }

    /// A contact lifted, leaving `remaining_contact_count` down.
    pub fn on_secondary_contact_end(
        &mut self,
        remaining_contact_count: usize,
    ) -> Option<TransformDelta> {
        self.handle(GestureInput::SecondaryContactEnd {
            remaining: remaining_contact_count,
        })
    }

    /// Wheel input with raw deltas.
    pub fn on_wheel(
        &mut self,
        delta_x: f64,
        delta_y: f64,
        zoom_modifier_active: bool,
    ) -> Option<TransformDelta> {
        self.handle(GestureInput::Wheel {
            delta: Vec2::new(delta_x, delta_y),
            zoom_modifier: zoom_modifier_active,
        })
    }

    fn commit(&mut self, next: Transform) -> bool {
        if next == self.transform {
            return false;
        }
        self.transform = next;
        self.revision = self.revision.wrapping_add(1);
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.transform);
        }
        true
    }
}
