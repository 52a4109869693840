// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for low-level multi-touch recognizers.
//!
//! These backends report a recognizer state plus raw values on every
//! callback: translation and velocity for pans, cumulative scale and the
//! pinch center for pinches. They never report a predicted end translation
//! or a unit anchor, so [`TouchAdapter`] reconstructs both.

use kurbo::{Point, Size, Vec2};

use crate::{
    AdapterConfig, GestureEvent, GestureEvents, RecognizerState, ReleaseTracker, UnitPoint,
    predicted_translation,
};

/// One callback from a pan recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSample {
    /// Recognizer state for this callback.
    pub state: RecognizerState,
    /// Cumulative translation since the pan began.
    pub translation: Vec2,
    /// Current velocity in points per second.
    pub velocity: Vec2,
    /// Current touch location in viewport coordinates.
    pub location: Point,
    /// Host timestamp of the callback in milliseconds.
    pub time_ms: u64,
}

/// One callback from a pinch recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Recognizer state for this callback.
    pub state: RecognizerState,
    /// Cumulative scale since the pinch began.
    pub scale: f64,
    /// Pinch center in the coordinates of the view the recognizer is attached to.
    pub location: Point,
    /// Size of the view the recognizer is attached to (the displayed content).
    pub view_size: Size,
}

/// Normalizes low-level recognizer callbacks into [`GestureEvent`]s.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use vista_gesture::{GestureEvent, PanSample, RecognizerState, TouchAdapter};
///
/// let mut adapter = TouchAdapter::default();
/// let sample = |state, translation, velocity, time_ms| PanSample {
///     state,
///     translation,
///     velocity,
///     location: Point::new(100.0, 100.0),
///     time_ms,
/// };
///
/// adapter.pan(sample(RecognizerState::Began, Vec2::ZERO, Vec2::ZERO, 0));
/// adapter.pan(sample(RecognizerState::Changed, Vec2::new(0.0, 40.0), Vec2::ZERO, 16));
/// let ended = adapter.pan(sample(
///     RecognizerState::Ended,
///     Vec2::new(0.0, 40.0),
///     Vec2::new(0.0, 800.0),
///     20,
/// ));
/// assert_eq!(
///     ended[0],
///     GestureEvent::PanEnded {
///         translation: Vec2::new(0.0, 40.0),
///         predicted: Vec2::new(0.0, 240.0),
///     }
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct TouchAdapter {
    config: AdapterConfig,
    release: ReleaseTracker,
    pan_active: bool,
    pinch_anchor: Option<UnitPoint>,
}

impl TouchAdapter {
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

    /// Returns `true` between a pan's `Began` and its terminal state.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan_active
    }

    /// Returns `true` between a pinch's `Began` and its terminal state.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch_anchor.is_some()
    }

    /// Translates one pan recognizer callback.
    pub fn pan(&mut self, sample: PanSample) -> GestureEvents {
        let mut out = GestureEvents::new();
        if !sample.translation.is_finite() {
            return out;
        }
        match sample.state {
            RecognizerState::Possible => {}
            RecognizerState::Began => {
                if self.pan_active {
                    // A restarted recognizer abandons the previous pan.
                    out.push(GestureEvent::PanCancelled);
                }
                self.pan_active = true;
                self.release.reset();
                out.push(GestureEvent::PanBegan {
                    location: sample.location,
                });
            }
            RecognizerState::Changed => {
                if !self.pan_active {
                    // Some backends skip `Began` when recognition is immediate.
                    self.pan_active = true;
                    out.push(GestureEvent::PanBegan {
                        location: sample.location,
                    });
                }
                self.release.record(sample.time_ms);
                out.push(GestureEvent::PanChanged {
                    translation: sample.translation,
                });
            }
            RecognizerState::Ended => {
                if !self.pan_active {
                    return out;
                }
                self.pan_active = false;
                let velocity = if sample.velocity.is_finite() {
                    sample.velocity
                } else {
                    Vec2::ZERO
                };
                let predicted = predicted_translation(sample.translation, velocity);
                let predicted = self.release.resolve(
                    sample.translation,
                    predicted,
                    sample.time_ms,
                    self.config.steady_hold_ms,
                );
                out.push(GestureEvent::PanEnded {
                    translation: sample.translation,
                    predicted,
                });
            }
            RecognizerState::Cancelled | RecognizerState::Failed => {
                if self.pan_active {
                    self.pan_active = false;
                    self.release.reset();
                    out.push(GestureEvent::PanCancelled);
                }
            }
        }
        out
    }

    /// Translates one pinch recognizer callback.
    ///
    /// The anchor is computed once, from the pinch center when the pinch
    /// begins, and reused for every later change of the same gesture.
    pub fn pinch(&mut self, sample: PinchSample) -> GestureEvents {
        let mut out = GestureEvents::new();
        match sample.state {
            RecognizerState::Possible => {}
            RecognizerState::Began => {
                let anchor = UnitPoint::from_point_in(sample.location, sample.view_size)
                    .unwrap_or(UnitPoint::CENTER);
                self.pinch_anchor = Some(anchor);
                out.push(GestureEvent::PinchBegan { anchor });
            }
            RecognizerState::Changed => {
                if !sample.scale.is_finite() {
                    return out;
                }
                let anchor = match self.pinch_anchor {
                    Some(anchor) => anchor,
                    None => {
                        let anchor = UnitPoint::from_point_in(sample.location, sample.view_size)
                            .unwrap_or(UnitPoint::CENTER);
                        self.pinch_anchor = Some(anchor);
                        out.push(GestureEvent::PinchBegan { anchor });
                        anchor
                    }
                };
                out.push(GestureEvent::PinchChanged {
                    magnification: sample.scale.max(0.0),
                    anchor,
                });
            }
            RecognizerState::Ended => {
                if self.pinch_anchor.take().is_some() {
                    out.push(GestureEvent::PinchEnded);
                }
            }
            RecognizerState::Cancelled | RecognizerState::Failed => {
                if self.pinch_anchor.take().is_some() {
                    out.push(GestureEvent::PinchCancelled);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pan(state: RecognizerState, translation: Vec2, velocity: Vec2, time_ms: u64) -> PanSample {
        PanSample {
            state,
            translation,
            velocity,
            location: Point::new(5.0, 5.0),
            time_ms,
        }
    }

    fn pinch(state: RecognizerState, scale: f64, location: Point) -> PinchSample {
        PinchSample {
            state,
            scale,
            location,
            view_size: Size::new(400.0, 200.0),
        }
    }

    #[test]
    fn possible_state_is_silent() {
        let mut adapter = TouchAdapter::default();
        assert!(
            adapter
                .pan(pan(RecognizerState::Possible, Vec2::ZERO, Vec2::ZERO, 0))
                .is_empty()
        );
        assert!(
            adapter
                .pinch(pinch(RecognizerState::Possible, 1.0, Point::ZERO))
                .is_empty()
        );
    }

    #[test]
    fn held_release_uses_final_translation() {
        let mut adapter = TouchAdapter::default();
        adapter.pan(pan(RecognizerState::Began, Vec2::ZERO, Vec2::ZERO, 0));
        adapter.pan(pan(RecognizerState::Changed, Vec2::new(30.0, 0.0), Vec2::ZERO, 10));
        let out = adapter.pan(pan(
            RecognizerState::Ended,
            Vec2::new(30.0, 0.0),
            Vec2::new(2000.0, 0.0),
            200,
        ));
        assert_eq!(
            out[0],
            GestureEvent::PanEnded {
                translation: Vec2::new(30.0, 0.0),
                predicted: Vec2::new(30.0, 0.0),
            }
        );
        assert!(!adapter.is_panning());
    }

    #[test]
    fn changed_without_began_synthesizes_began() {
        let mut adapter = TouchAdapter::default();
        let out = adapter.pan(pan(RecognizerState::Changed, Vec2::new(1.0, 2.0), Vec2::ZERO, 3));
        assert_eq!(out.len(), 2);
        assert!(matches!(out[0], GestureEvent::PanBegan { .. }));
        assert_eq!(
            out[1],
            GestureEvent::PanChanged {
                translation: Vec2::new(1.0, 2.0)
            }
        );
    }

    #[test]
    fn cancel_after_began_is_reported_once() {
        let mut adapter = TouchAdapter::default();
        adapter.pan(pan(RecognizerState::Began, Vec2::ZERO, Vec2::ZERO, 0));
        let first = adapter.pan(pan(RecognizerState::Failed, Vec2::ZERO, Vec2::ZERO, 1));
        let second = adapter.pan(pan(RecognizerState::Cancelled, Vec2::ZERO, Vec2::ZERO, 2));
        assert_eq!(first.as_slice(), &[GestureEvent::PanCancelled]);
        assert!(second.is_empty());
    }

    #[test]
    fn repeated_began_cancels_the_open_pan() {
        let mut adapter = TouchAdapter::default();
        adapter.pan(pan(RecognizerState::Began, Vec2::ZERO, Vec2::ZERO, 0));
        let out = adapter.pan(pan(RecognizerState::Began, Vec2::ZERO, Vec2::ZERO, 5));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], GestureEvent::PanCancelled);
        assert!(matches!(out[1], GestureEvent::PanBegan { .. }));
    }

    #[test]
    fn ended_without_began_is_ignored() {
        let mut adapter = TouchAdapter::default();
        let out = adapter.pan(pan(RecognizerState::Ended, Vec2::ZERO, Vec2::ZERO, 0));
        assert!(out.is_empty());
    }

    #[test]
    fn pinch_anchor_is_fixed_at_began() {
        let mut adapter = TouchAdapter::default();
        let began = adapter.pinch(pinch(RecognizerState::Began, 1.0, Point::new(100.0, 50.0)));
        assert_eq!(
            began[0],
            GestureEvent::PinchBegan {
                anchor: UnitPoint::new(0.25, 0.25)
            }
        );
        // The center drifts, but the anchor stays where the pinch began.
        let changed = adapter.pinch(pinch(RecognizerState::Changed, 1.5, Point::new(300.0, 150.0)));
        assert_eq!(
            changed[0],
            GestureEvent::PinchChanged {
                magnification: 1.5,
                anchor: UnitPoint::new(0.25, 0.25),
            }
        );
        let ended = adapter.pinch(pinch(RecognizerState::Ended, 1.5, Point::ZERO));
        assert_eq!(ended.as_slice(), &[GestureEvent::PinchEnded]);
        assert!(!adapter.is_pinching());
    }

    #[test]
    fn pinch_on_empty_view_anchors_at_center() {
        let mut adapter = TouchAdapter::default();
        let out = adapter.pinch(PinchSample {
            state: RecognizerState::Began,
            scale: 1.0,
            location: Point::new(3.0, 3.0),
            view_size: Size::ZERO,
        });
        assert_eq!(
            out[0],
            GestureEvent::PinchBegan {
                anchor: UnitPoint::CENTER
            }
        );
    }

    #[test]
    fn negative_scale_is_floored_at_zero() {
        let mut adapter = TouchAdapter::default();
        adapter.pinch(pinch(RecognizerState::Began, 1.0, Point::ZERO));
        let out = adapter.pinch(pinch(RecognizerState::Changed, -2.0, Point::ZERO));
        assert!(matches!(
            out[0],
            GestureEvent::PinchChanged { magnification, .. } if magnification == 0.0
        ));
    }
}
