// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical gesture vocabulary shared by every backend adapter.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::UnitPoint;

/// Lifecycle state reported by a low-level gesture recognizer.
///
/// Delivery is strictly ordered `Began → Changed* → (Ended | Cancelled | Failed)`.
/// `Possible` is the idle state some backends report before recognition and
/// never produces an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RecognizerState {
    /// The recognizer has not recognized anything yet.
    #[default]
    Possible,
    /// The gesture was recognized and has started.
    Began,
    /// The gesture is in progress and its values changed.
    Changed,
    /// The gesture finished normally.
    Ended,
    /// The gesture was interrupted (for example by the system).
    Cancelled,
    /// The recognizer gave up on the touch sequence.
    Failed,
}

/// One normalized gesture event.
///
/// Pan translations are cumulative since the pan began. Pinch magnification
/// is the cumulative factor since the pinch began (`1.0` means unchanged).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A pan began at `location` (viewport coordinates).
    PanBegan {
        /// Where the finger first touched down.
        location: Point,
    },
    /// The pan moved.
    PanChanged {
        /// Total translation since the pan began.
        translation: Vec2,
    },
    /// The pan was released.
    PanEnded {
        /// Total translation at release.
        translation: Vec2,
        /// Where the pan would come to rest if it kept its momentum.
        ///
        /// Adapters replace this with `translation` when the finger held
        /// still before lifting.
        predicted: Vec2,
    },
    /// The pan was cancelled or failed after it began.
    PanCancelled,
    /// A pinch began around `anchor`.
    PinchBegan {
        /// Content-unit point under the pinch center.
        anchor: UnitPoint,
    },
    /// The pinch magnification changed.
    PinchChanged {
        /// Total magnification since the pinch began.
        magnification: f64,
        /// Content-unit point under the pinch center when the pinch began.
        anchor: UnitPoint,
    },
    /// The pinch finished.
    PinchEnded,
    /// The pinch was cancelled or failed after it began.
    PinchCancelled,
    /// A double tap was recognized at `point` (content-local coordinates).
    DoubleTap {
        /// Location of the second tap.
        point: Point,
    },
    /// A single tap was recognized and no double tap followed it.
    SingleTap,
}

impl GestureEvent {
    /// Returns `true` for the events that belong to a pan gesture.
    #[must_use]
    pub fn is_pan(&self) -> bool {
        matches!(
            self,
            Self::PanBegan { .. }
                | Self::PanChanged { .. }
                | Self::PanEnded { .. }
                | Self::PanCancelled
        )
    }

    /// Returns `true` for the events that belong to a pinch gesture.
    #[must_use]
    pub fn is_pinch(&self) -> bool {
        matches!(
            self,
            Self::PinchBegan { .. }
                | Self::PinchChanged { .. }
                | Self::PinchEnded
                | Self::PinchCancelled
        )
    }
}

/// The events produced by a single adapter call.
///
/// Most calls produce zero or one event; continuous backends produce two when
/// they synthesize the missing `Began` event.
pub type GestureEvents = SmallVec<[GestureEvent; 2]>;
