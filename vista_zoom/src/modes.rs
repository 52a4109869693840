// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// How overscroll past an envelope edge is compressed into a visual overshoot
/// when a flick is released.
///
/// Both curves map any excess distance into a bounded range so that even a
/// violent flick only overshoots the edge by a short, rubber-band-like
/// distance before snapping back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReboundCurve {
    /// `clamp(excess, 10, 2500) / 10 * 0.75`, an overshoot of 0.75 to 187.5.
    #[default]
    Linear,
    /// `min(clamp(excess, 1, 3000)^(1 / 1.2) * 0.24, 300)`.
    ///
    /// Tracks [`ReboundCurve::Linear`] closely up to about 1000 units of
    /// excess and grows more slowly beyond that.
    PowerLaw,
}

impl ReboundCurve {
    /// Compresses an excess distance (non-negative) into an overshoot distance.
    #[must_use]
    pub fn compress(self, excess: f64) -> f64 {
        match self {
            Self::Linear => excess.clamp(10.0, 2500.0) / 10.0 * 0.75,
            Self::PowerLaw => {
                let clamped = excess.clamp(1.0, 3000.0);
                (clamped.powf(1.0 / 1.2) * 0.24).min(300.0)
            }
        }
    }
}

/// Which pan behavior applies at the current content size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanRegime {
    /// Content is no taller than the viewport. Each pan moves one axis only:
    /// vertical pans drive the dismiss gesture, horizontal pans are damped
    /// (or left to a pager).
    SingleAxis,
    /// Content is taller than the viewport and pans freely on both axes,
    /// with resistance past the envelope edges.
    Free,
}

#[cfg(test)]
mod tests {
    use super::ReboundCurve;

    #[test]
    fn linear_curve_is_bounded() {
        let c = ReboundCurve::Linear;
        assert!((c.compress(0.0) - 0.75).abs() < 1e-12);
        assert!((c.compress(1000.0) - 75.0).abs() < 1e-12);
        assert!((c.compress(1.0e6) - 187.5).abs() < 1e-12);
    }

    #[test]
    fn power_law_tracks_linear_in_the_middle() {
        let lin = ReboundCurve::Linear.compress(1000.0);
        let pow = ReboundCurve::PowerLaw.compress(1000.0);
        assert!((lin - pow).abs() < 2.0);
        assert!(ReboundCurve::PowerLaw.compress(1.0e9) <= 300.0);
    }
}
