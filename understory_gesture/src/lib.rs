// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: reduce pointer, touch and wheel input into a 2D transform.
//!
//! This crate turns a stream of raw input events on one interactive surface
//! into a continuously updated [`Transform`]: translation, rotation (degrees)
//! and scale. It is aimed at image and canvas viewers that need pan,
//! pinch-zoom and two-finger rotation without any inertia model.
//!
//! - [`geometry`]: angle and distance between two contacts
//! - [`anchor`]: the per-gesture reference used to compute incremental deltas
//! - [`GestureReducer`]: owns the transform and exposes the event handlers
//! - [`GestureOptions`]: snap-back policy and wheel tuning
//!
//! ## Interaction model
//!
//! The reducer tracks one gesture at a time:
//!
//! - **Single drag**: primary button (or a single touch) down inside the surface,
//!   then moves. Each move adds the offset from the *previous* move.
//! - **Pair gesture**: two contacts. Each move adds the angle change as rotation
//!   and the relative distance change as scale. Only the first two contacts are
//!   consulted. Coincident contacts defer the start until they separate.
//! - **Wheel**: stateless. Pans by the inverted wheel delta, or zooms by the
//!   inverted vertical delta while the zoom modifier is held.
//!
//! With [`GestureOptions::snap_back_on_release`], translation is discarded when
//! a gesture ends; rotation and scale are kept.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::{GestureOptions, GestureReducer, Transform};
//!
//! let mut reducer = GestureReducer::new("viewer", GestureOptions::default());
//!
//! // Two-finger rotate: a quarter turn at constant distance.
//! reducer.on_secondary_contact_start(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
//! reducer.on_secondary_contact_move(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
//! reducer.on_secondary_contact_end(1);
//!
//! // Ctrl + wheel zooms.
//! reducer.on_wheel(0.0, -50.0, true);
//!
//! let t = reducer.current_transform();
//! assert_eq!(t.rotation, 90.0);
//! assert_eq!(t.scale, 1.5);
//! ```
//!
//! ## Integration
//!
//! The crate does not attach listeners or render anything. A platform adapter
//! picks the event set to bind (mouse vs touch), normalizes events into the
//! `on_*` calls (or [`GestureInput`] values) in delivery order, and decides
//! whether an event target lies within the surface. Consumers either poll
//! [`GestureReducer::current_transform`] / [`GestureReducer::revision`] or set an
//! observer with [`GestureReducer::set_observer`].
//!
//! Diagnostics are emitted through `tracing`; install a subscriber to see them.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to dependencies.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`Transform`],
//!   [`TransformDelta`] and [`GestureOptions`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod anchor;
pub mod geometry;
mod options;
mod reducer;
mod transform;

pub use anchor::GesturePhase;
pub use options::{
    DEFAULT_WHEEL_PAN_FACTOR, DEFAULT_WHEEL_ZOOM_FACTOR, GestureOptions, OptionsError,
};
pub use reducer::{Effect, GestureInput, GestureReducer, Step, step, wheel_delta};
pub use transform::{Transform, TransformDelta, initial_transform};
