// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_zoom --heading-base-level=0

//! Vista Zoom: the zoom/pan transform engine behind an image viewer.
//!
//! This crate turns a canonical gesture stream (see `vista_gesture`) into the
//! displayed size, offset and background opacity of one image. It covers:
//! - Fit-width layout with automatic or explicit maximum zoom ([`Layout`]).
//! - Pan with edge resistance, or pan-to-dismiss while the image fits the
//!   viewport height ([`ZoomView`]).
//! - Damped pinch zoom around a fixed unit anchor, with snap-back and a
//!   haptic cue below the fitted size.
//! - Double-tap toggling between the fitted and the maximum size.
//! - A two-phase rebound (compressed overshoot, then snap) for flicks
//!   released past an edge ([`Rebound`], [`ReboundCurve`]).
//!
//! It does **not** render, load images, or own timers. Callers are expected to:
//! - Feed gestures in, either through [`ZoomView::handle`] or the individual
//!   operations.
//! - Call [`ZoomView::tick`] with a monotonic millisecond clock while
//!   [`ZoomView::is_animating`] is `true`.
//! - Render [`ZoomView::transform`] (or [`ZoomView::affine`]) and drain
//!   [`ZoomView::take_events`] for dismiss, haptic and tap intents.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vista_zoom::{PanPhase, ViewerConfig, ZoomView};
//!
//! // A 400 x 2000 image in a 400 x 800 viewport scrolls vertically.
//! let mut view = ZoomView::with_sizes(
//!     ViewerConfig::default(),
//!     Size::new(400.0, 800.0),
//!     Size::new(400.0, 2000.0),
//! );
//!
//! // Dragging down past the top edge meets resistance.
//! view.begin_pan(Point::new(200.0, 400.0));
//! view.update_pan(Vec2::new(0.0, 300.0));
//! assert!((view.transform().offset.y - 105.0).abs() < 1e-9);
//!
//! // Releasing rebounds onto the edge.
//! view.end_pan(Vec2::new(0.0, 300.0), Vec2::new(0.0, 300.0));
//! assert_eq!(view.phase(), PanPhase::Settling);
//! let mut now = 0;
//! while view.tick(now) {
//!     now += 16;
//! }
//! assert_eq!(view.transform().offset, Vec2::ZERO);
//! ```
//!
//! ## Design notes
//!
//! - Offsets are relative to the fitted content's resting origin, so
//!   `offset == (0, 0)` always means "at rest, fitted".
//! - Released gestures commit their final state right away and schedule a
//!   transition towards it. Starting a new pan or pinch interrupts a settle
//!   at its last sampled pose; a dismiss cannot be interrupted.
//! - Degenerate sizes are not errors: the engine simply has no [`Layout`] and
//!   ignores gestures until it gets one.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod config;
mod engine;
mod event;
mod geometry;
mod layout;
mod modes;
mod rebound;
mod transform;

pub use animation::{Easing, Interpolate, Pose, Transition};
pub use config::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, Timings, ViewerConfig};
pub use engine::{PanPhase, ZoomView, ZoomViewDebugInfo};
pub use event::{HapticStyle, ViewerEvent};
pub use geometry::{
    Envelope, anchor_shift, append_damping, axis_bounds, dismiss_opacity, resist_axis,
};
pub use layout::Layout;
pub use modes::{PanRegime, ReboundCurve};
pub use rebound::Rebound;
pub use transform::Transform;
