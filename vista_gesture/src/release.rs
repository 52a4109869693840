// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release handling shared by both backend adapters.

use kurbo::Vec2;

/// Divisor turning a release velocity (points per second) into the extra
/// distance a flick is expected to travel.
///
/// Continuous-gesture backends report `velocity = 4 * (predicted - current)`,
/// so backends that only report velocity reconstruct the prediction with
/// the same constant.
pub const VELOCITY_PROJECTION_DIVISOR: f64 = 4.0;

/// Reconstructs a predicted end translation from a release velocity.
///
/// ```
/// use kurbo::Vec2;
/// use vista_gesture::predicted_translation;
///
/// let predicted = predicted_translation(Vec2::new(10.0, 0.0), Vec2::new(400.0, -80.0));
/// assert_eq!(predicted, Vec2::new(110.0, -20.0));
/// ```
#[must_use]
pub fn predicted_translation(translation: Vec2, velocity: Vec2) -> Vec2 {
    velocity / VELOCITY_PROJECTION_DIVISOR + translation
}

/// Adapter tuning shared by [`TouchAdapter`](crate::TouchAdapter) and
/// [`ContinuousAdapter`](crate::ContinuousAdapter).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdapterConfig {
    /// If the finger rested for longer than this before lifting, the release
    /// uses the final translation instead of the predicted one.
    pub steady_hold_ms: u64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self { steady_hold_ms: 10 }
    }
}

impl AdapterConfig {
    /// Sets [`AdapterConfig::steady_hold_ms`].
    #[must_use]
    pub fn with_steady_hold_ms(mut self, ms: u64) -> Self {
        self.steady_hold_ms = ms;
        self
    }
}

/// Remembers when the pan last moved so a release can tell flicks from holds.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReleaseTracker {
    last_change_ms: Option<u64>,
}

impl ReleaseTracker {
    /// Records a pan change at `now_ms`.
    pub fn record(&mut self, now_ms: u64) {
        self.last_change_ms = Some(now_ms);
    }

    /// Picks the translation a release should settle towards.
    ///
    /// Returns `translation` when the pan held still for longer than
    /// `steady_hold_ms` before `now_ms`, and `predicted` otherwise.
    pub fn resolve(
        &mut self,
        translation: Vec2,
        predicted: Vec2,
        now_ms: u64,
        steady_hold_ms: u64,
    ) -> Vec2 {
        let held = self
            .last_change_ms
            .take()
            .is_some_and(|last| now_ms.saturating_sub(last) > steady_hold_ms);
        if held {
            log::trace!("pan held steady before release; dropping momentum");
            translation
        } else {
            predicted
        }
    }

    /// Forgets the last change.
    pub fn reset(&mut self) {
        self.last_change_ms = None;
    }
}
