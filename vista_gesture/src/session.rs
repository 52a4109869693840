// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan session state: start point, cumulative translation, and direction lock.
//!
//! ## Usage
//!
//! 1) Open a session with [`PanSession::new`] when a pan begins.
//! 2) Feed every cumulative translation into [`PanSession::update`]. The first
//!    non-zero translation locks the session to a [`DragDirection`].
//! 3) Drop the session when the pan ends or is cancelled.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vista_gesture::{DragDirection, PanSession};
//!
//! let mut session = PanSession::new(Point::new(10.0, 20.0), 1_000);
//! assert_eq!(session.direction(), None);
//!
//! // Mostly downwards: the session locks vertically.
//! assert_eq!(session.update(Vec2::new(2.0, 9.0)), Some(DragDirection::Vertical));
//!
//! // Later deltas never flip the lock, even when they turn sideways.
//! assert_eq!(session.update(Vec2::new(80.0, 10.0)), Some(DragDirection::Vertical));
//! ```

use kurbo::{Point, Vec2};

use crate::UnitPoint;

/// The axis a pan session locked onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDirection {
    /// The first movement was predominantly horizontal.
    Horizontal,
    /// The first movement was vertical or diagonal.
    Vertical,
}

impl DragDirection {
    /// Classifies a translation; ties go to [`DragDirection::Vertical`].
    #[must_use]
    pub fn of(translation: Vec2) -> Self {
        if translation.x.abs() > translation.y.abs() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Projects `v` onto this axis, zeroing the other component.
    #[must_use]
    pub fn project(self, v: Vec2) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(v.x, 0.0),
            Self::Vertical => Vec2::new(0.0, v.y),
        }
    }
}

/// Ephemeral per-gesture state, alive from pan begin to pan end or cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSession {
    start: Point,
    start_ms: u64,
    anchor: Option<UnitPoint>,
    translation: Vec2,
    direction: Option<DragDirection>,
}

impl PanSession {
    /// Opens a session that began at `start` at time `start_ms`.
    #[must_use]
    pub fn new(start: Point, start_ms: u64) -> Self {
        Self {
            start,
            start_ms,
            anchor: None,
            translation: Vec2::ZERO,
            direction: None,
        }
    }

    /// Records the start point relative to the content, if known.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Option<UnitPoint>) -> Self {
        self.anchor = anchor;
        self
    }

    /// Records the latest cumulative translation and returns the direction lock.
    ///
    /// The lock is decided by the first non-zero translation and never
    /// re-evaluated for the rest of the session.
    pub fn update(&mut self, translation: Vec2) -> Option<DragDirection> {
        self.translation = translation;
        if self.direction.is_none() && translation != Vec2::ZERO {
            self.direction = Some(DragDirection::of(translation));
        }
        self.direction
    }

    /// Where the pan began.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// When the pan began, in host milliseconds.
    #[must_use]
    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    /// The start point in content-unit coordinates, if it was recorded.
    #[must_use]
    pub fn anchor(&self) -> Option<UnitPoint> {
        self.anchor
    }

    /// The latest cumulative translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// The direction lock, once decided.
    #[must_use]
    pub fn direction(&self) -> Option<DragDirection> {
        self.direction
    }
}
