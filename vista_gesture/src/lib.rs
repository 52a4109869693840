// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_gesture --heading-base-level=0

//! Vista Gesture: one canonical gesture stream for image viewers.
//!
//! Touch input reaches an image viewer through very different recognizer
//! stacks. This crate turns whatever the host has into a single ordered
//! stream of [`GestureEvent`]s (`began → changed* → ended | cancelled`) that
//! the `vista_zoom` transform engine consumes.
//!
//! - [`TouchAdapter`]: low-level recognizers that report state, translation,
//!   velocity and raw pinch centers. Predicted release translations are
//!   reconstructed with [`predicted_translation`].
//! - [`ContinuousAdapter`]: continuous-gesture backends that report predicted
//!   end translations directly but never a `began` callback.
//! - [`TapRecognizer`]: single/double tap disambiguation where the single tap
//!   explicitly requires failure of the double tap.
//! - [`PanSession`]: per-pan state with a first-delta-wins [`DragDirection`] lock.
//! - [`GestureArbiter`]: the token a pager and its items share so only one of
//!   them owns a pan at a time.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use vista_gesture::{GestureEvent, PanSample, RecognizerState, TouchAdapter};
//!
//! let mut adapter = TouchAdapter::default();
//! let mut stream = Vec::new();
//! for (state, y, t) in [
//!     (RecognizerState::Began, 0.0, 0),
//!     (RecognizerState::Changed, 25.0, 16),
//!     (RecognizerState::Cancelled, 25.0, 32),
//! ] {
//!     stream.extend(adapter.pan(PanSample {
//!         state,
//!         translation: Vec2::new(0.0, y),
//!         velocity: Vec2::ZERO,
//!         location: Point::new(50.0, 50.0),
//!         time_ms: t,
//!     }));
//! }
//! assert_eq!(stream.last(), Some(&GestureEvent::PanCancelled));
//! ```
//!
//! All adapters are plain state machines: they own no timers and perform no
//! I/O. Hosts pass monotonic millisecond timestamps in.
//!
//! This crate is `no_std`.

#![no_std]

mod arbiter;
mod continuous;
mod event;
mod release;
mod session;
mod tap;
mod touch;
mod unit;

pub use arbiter::{GestureArbiter, GestureOwner};
pub use continuous::{ContentFrame, ContinuousAdapter, DragValue, MagnifyValue};
pub use event::{GestureEvent, GestureEvents, RecognizerState};
pub use release::{
    AdapterConfig, ReleaseTracker, VELOCITY_PROJECTION_DIVISOR, predicted_translation,
};
pub use session::{DragDirection, PanSession};
pub use tap::{SingleTapPolicy, TapConfig, TapRecognizer};
pub use touch::{PanSample, PinchSample, TouchAdapter};
pub use unit::UnitPoint;
