// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ReboundCurve;

/// Lower bound for an explicit maximum zoom scale.
pub const MIN_ZOOM_SCALE: f64 = 1.0;

/// Upper bound for any maximum zoom scale, explicit or automatic.
pub const MAX_ZOOM_SCALE: f64 = 20.0;

/// Durations of the engine's scheduled transitions, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timings {
    /// Each of the two rebound phases.
    pub rebound_phase_ms: u64,
    /// Settling the offset back into the envelope after a pan or pinch.
    pub settle_ms: u64,
    /// Double-tap zoom and the pinch snap-back to minimum size.
    pub zoom_ms: u64,
    /// Moving the content out of view before a dismiss is reported.
    pub dismiss_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            rebound_phase_ms: 200,
            settle_ms: 250,
            zoom_ms: 300,
            dismiss_ms: 200,
        }
    }
}

impl Timings {
    fn sanitized(self) -> Self {
        Self {
            rebound_phase_ms: self.rebound_phase_ms.max(1),
            settle_ms: self.settle_ms.max(1),
            zoom_ms: self.zoom_ms.max(1),
            dismiss_ms: self.dismiss_ms.max(1),
        }
    }
}

/// Tuning for a [`ZoomView`](crate::ZoomView).
///
/// Fields may be set directly; the engine sanitizes the whole struct when it
/// is installed (see [`ViewerConfig::sanitized`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewerConfig {
    /// Fraction of a drag that passes through: past an envelope edge in the
    /// free regime, and always for horizontal drags in the single-axis regime.
    pub edge_damping: f64,
    /// Fraction of each incremental pinch magnification that is applied.
    pub pinch_damping: f64,
    /// Smallest transient size during a pinch, as a fraction of the minimum size.
    pub min_pinch_ratio: f64,
    /// Vertical travel, as a fraction of the content height, that dismisses.
    pub dismiss_ratio: f64,
    /// Vertical travel over which the background fades from opaque to clear.
    pub opacity_distance: f64,
    /// How far past the minimum width a double tap still zooms in rather than resetting.
    pub double_tap_reset_slack: f64,
    /// Explicit maximum zoom relative to the fitted size; `None` picks one
    /// from the viewport and the content's intrinsic height.
    pub max_zoom_scale: Option<f64>,
    /// Automatic maximum height as a multiple of the viewport height.
    pub auto_zoom_viewport_ratio: f64,
    /// Overshoot compression for released flicks.
    pub rebound_curve: ReboundCurve,
    /// The engine lives inside a pager that owns horizontal pans.
    pub paging: bool,
    /// Transition durations.
    pub timings: Timings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            edge_damping: 0.35,
            pinch_damping: 0.7,
            min_pinch_ratio: 0.5,
            dismiss_ratio: 0.4,
            opacity_distance: 100.0,
            double_tap_reset_slack: 50.0,
            max_zoom_scale: None,
            auto_zoom_viewport_ratio: 2.5,
            rebound_curve: ReboundCurve::Linear,
            paging: false,
            timings: Timings::default(),
        }
    }
}

impl ViewerConfig {
    /// Sets the edge damping.
    #[must_use]
    pub fn with_edge_damping(mut self, damping: f64) -> Self {
        self.edge_damping = damping;
        self.sanitized()
    }

    /// Sets the pinch damping.
    #[must_use]
    pub fn with_pinch_damping(mut self, damping: f64) -> Self {
        self.pinch_damping = damping;
        self.sanitized()
    }

    /// Sets an explicit maximum zoom scale, clamped to `[1, 20]`.
    #[must_use]
    pub fn with_max_zoom_scale(mut self, scale: f64) -> Self {
        self.max_zoom_scale = Some(scale);
        self.sanitized()
    }

    /// Selects the rebound overshoot curve.
    #[must_use]
    pub fn with_rebound_curve(mut self, curve: ReboundCurve) -> Self {
        self.rebound_curve = curve;
        self
    }

    /// Marks the engine as hosted by a pager.
    #[must_use]
    pub fn with_paging(mut self, paging: bool) -> Self {
        self.paging = paging;
        self
    }

    /// Replaces the transition durations.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings.sanitized();
        self
    }

    /// Returns a copy with every field forced into its usable range.
    ///
    /// Non-finite values fall back to their defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let unit = |v: f64, fallback: f64| {
            if v.is_finite() {
                v.clamp(0.0, 1.0)
            } else {
                fallback
            }
        };
        let positive = |v: f64, fallback: f64| {
            if v.is_finite() && v >= 0.0 {
                v
            } else {
                fallback
            }
        };
        let max_zoom_scale = self
            .max_zoom_scale
            .filter(|s| !s.is_nan())
            .map(|s| s.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE));
        Self {
            edge_damping: unit(self.edge_damping, defaults.edge_damping),
            pinch_damping: unit(self.pinch_damping, defaults.pinch_damping),
            min_pinch_ratio: unit(self.min_pinch_ratio, defaults.min_pinch_ratio),
            dismiss_ratio: positive(self.dismiss_ratio, defaults.dismiss_ratio),
            opacity_distance: positive(self.opacity_distance, defaults.opacity_distance),
            double_tap_reset_slack: positive(
                self.double_tap_reset_slack,
                defaults.double_tap_reset_slack,
            ),
            max_zoom_scale,
            auto_zoom_viewport_ratio: positive(
                self.auto_zoom_viewport_ratio,
                defaults.auto_zoom_viewport_ratio,
            ),
            rebound_curve: self.rebound_curve,
            paging: self.paging,
            timings: self.timings.sanitized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_zoom_scale_is_clamped() {
        assert_eq!(
            ViewerConfig::default().with_max_zoom_scale(100.0).max_zoom_scale,
            Some(20.0)
        );
        assert_eq!(
            ViewerConfig::default().with_max_zoom_scale(0.2).max_zoom_scale,
            Some(1.0)
        );
        assert_eq!(
            ViewerConfig::default().with_max_zoom_scale(f64::INFINITY).max_zoom_scale,
            Some(20.0)
        );
        assert_eq!(
            ViewerConfig::default().with_max_zoom_scale(f64::NAN).max_zoom_scale,
            None
        );
    }

    #[test]
    fn damping_is_clamped_and_nan_falls_back() {
        let c = ViewerConfig::default().with_edge_damping(3.0);
        assert_eq!(c.edge_damping, 1.0);
        let c = ViewerConfig::default().with_pinch_damping(f64::NAN);
        assert_eq!(c.pinch_damping, 0.7);
    }

    #[test]
    fn zero_durations_become_one_millisecond() {
        let c = ViewerConfig::default().with_timings(Timings {
            rebound_phase_ms: 0,
            settle_ms: 0,
            zoom_ms: 5,
            dismiss_ms: 0,
        });
        assert_eq!(c.timings.rebound_phase_ms, 1);
        assert_eq!(c.timings.settle_ms, 1);
        assert_eq!(c.timings.zoom_ms, 5);
    }
}
