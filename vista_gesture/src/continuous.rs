// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for continuous-gesture backends.
//!
//! Continuous backends deliver `changed`/`ended` callbacks only, with values
//! that already carry a predicted end translation. Magnify values carry a
//! start location in viewport space rather than a content anchor, so the
//! adapter needs the content's current frame to derive one.

use kurbo::{Point, Size, Vec2};

use crate::{AdapterConfig, GestureEvent, GestureEvents, ReleaseTracker, UnitPoint};

/// A drag value from a continuous-gesture backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragValue {
    /// Cumulative translation since the drag began.
    pub translation: Vec2,
    /// Translation the drag would reach if it kept its momentum.
    pub predicted_end_translation: Vec2,
    /// Where the drag began.
    pub start_location: Point,
    /// Host timestamp of the value in milliseconds.
    pub time_ms: u64,
}

/// A magnify value from a continuous-gesture backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnifyValue {
    /// Cumulative magnification since the gesture began.
    pub magnification: f64,
    /// Pinch center when the gesture began, relative to the content's
    /// unscrolled origin.
    pub start_location: Point,
}

/// The displayed content's current size and scroll offset.
///
/// Offsets are non-positive once content has been scrolled past its origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ContentFrame {
    /// Current displayed content size.
    pub size: Size,
    /// Current content offset.
    pub offset: Vec2,
}

impl ContentFrame {
    /// Converts a start location into a content-unit anchor.
    ///
    /// Falls back to [`UnitPoint::CENTER`] for empty content.
    #[must_use]
    pub fn anchor_for(&self, start_location: Point) -> UnitPoint {
        let scrolled = Vec2::new(self.offset.x.abs(), self.offset.y.abs());
        UnitPoint::from_point_in(start_location + scrolled, self.size)
            .unwrap_or(UnitPoint::CENTER)
    }
}

/// Normalizes continuous-gesture values into [`GestureEvent`]s.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use vista_gesture::{ContentFrame, ContinuousAdapter, GestureEvent, MagnifyValue, UnitPoint};
///
/// let mut adapter = ContinuousAdapter::default();
/// let frame = ContentFrame { size: Size::new(400.0, 800.0), offset: Vec2::new(-100.0, 0.0) };
/// let events = adapter.magnify_changed(
///     MagnifyValue { magnification: 1.2, start_location: Point::new(100.0, 400.0) },
///     frame,
/// );
/// // The first value opens the gesture with an anchor that accounts for the scroll offset.
/// assert_eq!(events[0], GestureEvent::PinchBegan { anchor: UnitPoint::new(0.5, 0.5) });
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContinuousAdapter {
    config: AdapterConfig,
    release: ReleaseTracker,
    pan_active: bool,
    pinch_anchor: Option<UnitPoint>,
}

impl ContinuousAdapter {
    /// Creates an adapter with the given tuning.
    #[must_use]
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the adapter tuning.
    #[must_use]
    pub fn config(&self) -> AdapterConfig {
        self.config
    }

    /// Translates a drag `changed` callback, opening the pan on first use.
    pub fn drag_changed(&mut self, value: DragValue) -> GestureEvents {
        let mut out = GestureEvents::new();
        if !value.translation.is_finite() {
            return out;
        }
        if !self.pan_active {
            self.pan_active = true;
            self.release.reset();
            out.push(GestureEvent::PanBegan {
                location: value.start_location,
            });
        }
        self.release.record(value.time_ms);
        out.push(GestureEvent::PanChanged {
            translation: value.translation,
        });
        out
    }

    /// Translates a drag `ended` callback.
    pub fn drag_ended(&mut self, value: DragValue) -> GestureEvents {
        let mut out = GestureEvents::new();
        if !self.pan_active {
            return out;
        }
        self.pan_active = false;
        let predicted = if value.predicted_end_translation.is_finite() {
            value.predicted_end_translation
        } else {
            value.translation
        };
        let predicted = self.release.resolve(
            value.translation,
            predicted,
            value.time_ms,
            self.config.steady_hold_ms,
        );
        out.push(GestureEvent::PanEnded {
            translation: value.translation,
            predicted,
        });
        out
    }

    /// Translates a magnify `changed` callback, opening the pinch on first use.
    ///
    /// The anchor is derived once from `frame`; later frames are ignored for
    /// the rest of the gesture.
    pub fn magnify_changed(&mut self, value: MagnifyValue, frame: ContentFrame) -> GestureEvents {
        let mut out = GestureEvents::new();
        if !value.magnification.is_finite() {
            return out;
        }
        let anchor = match self.pinch_anchor {
            Some(anchor) => anchor,
            None => {
                let anchor = frame.anchor_for(value.start_location);
                self.pinch_anchor = Some(anchor);
                out.push(GestureEvent::PinchBegan { anchor });
                anchor
            }
        };
        out.push(GestureEvent::PinchChanged {
            magnification: value.magnification.max(0.0),
            anchor,
        });
        out
    }

    /// Translates a magnify `ended` callback.
    pub fn magnify_ended(&mut self) -> GestureEvents {
        let mut out = GestureEvents::new();
        if self.pinch_anchor.take().is_some() {
            out.push(GestureEvent::PinchEnded);
        }
        out
    }

    /// Cancels whatever gestures are open, e.g. when the view loses its window.
    pub fn cancel(&mut self) -> GestureEvents {
        let mut out = GestureEvents::new();
        if self.pan_active {
            self.pan_active = false;
            self.release.reset();
            out.push(GestureEvent::PanCancelled);
        }
        if self.pinch_anchor.take().is_some() {
            out.push(GestureEvent::PinchCancelled);
        }
        out
    }
}
