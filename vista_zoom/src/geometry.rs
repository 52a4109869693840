// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure clamping, damping, and anchor helpers.

use kurbo::{Size, Vec2};
use vista_gesture::UnitPoint;

use crate::ReboundCurve;

/// The valid offset range for one content size.
///
/// Offsets are relative to the resting origin of the content at its minimum
/// size. On an axis where the content is no larger than the viewport, the
/// range collapses to the single centered value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    /// Smallest allowed horizontal offset.
    pub min_x: f64,
    /// Largest allowed horizontal offset.
    pub max_x: f64,
    /// Smallest allowed vertical offset.
    pub min_y: f64,
    /// Largest allowed vertical offset.
    pub max_y: f64,
}

impl Envelope {
    /// Derives the envelope for content of `extent` placed at `base` inside `view`.
    #[must_use]
    pub fn new(base: Vec2, extent: Size, view: Size) -> Self {
        let (min_x, max_x) = axis_bounds(base.x, extent.width, view.width);
        let (min_y, max_y) = axis_bounds(base.y, extent.height, view.height);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Clamps `offset` into the envelope.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(offset.x, self.min_x, self.max_x),
            clamp_axis(offset.y, self.min_y, self.max_y),
        )
    }

    /// Returns `true` if `offset` lies inside the envelope on both axes.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&offset.x)
            && (self.min_y..=self.max_y).contains(&offset.y)
    }

    /// Returns `true` if the envelope allows horizontal movement.
    #[must_use]
    pub fn is_open_x(&self) -> bool {
        self.max_x > self.min_x
    }

    /// Returns `true` if the envelope allows vertical movement.
    #[must_use]
    pub fn is_open_y(&self) -> bool {
        self.max_y > self.min_y
    }

    /// Attenuates a drag `translation` applied on top of a resting `offset`.
    ///
    /// Inside the envelope the translation passes through unchanged. The part
    /// that would carry the offset past an edge is scaled by `damping`, so
    /// resistance grows continuously with the overscroll.
    #[must_use]
    pub fn resist(&self, offset: Vec2, translation: Vec2, damping: f64) -> Vec2 {
        Vec2::new(
            resist_axis(offset.x, translation.x, self.min_x, self.max_x, damping),
            resist_axis(offset.y, translation.y, self.min_y, self.max_y, damping),
        )
    }

    /// The visual overshoot for a released offset, compressed with `curve`.
    ///
    /// Axes that are in range keep their value.
    #[must_use]
    pub fn overshoot(&self, released: Vec2, curve: ReboundCurve) -> Vec2 {
        Vec2::new(
            append_damping(self.min_x, self.max_x, released.x, curve),
            append_damping(self.min_y, self.max_y, released.y, curve),
        )
    }
}

/// Offset bounds on one axis.
///
/// Content larger than the view may scroll from flush-with-the-far-edge up to
/// flush-with-the-near-edge. Otherwise it is centered.
#[must_use]
pub fn axis_bounds(base: f64, extent: f64, view: f64) -> (f64, f64) {
    if extent > view {
        (view - extent - base, -base)
    } else {
        let centered = (view - extent) / 2.0 - base;
        (centered, centered)
    }
}

/// Clamps `v` into `[min, max]`, tolerating `min > max` by preferring `min`.
#[must_use]
pub(crate) fn clamp_axis(v: f64, min: f64, max: f64) -> f64 {
    v.min(max).max(min)
}

/// Edge resistance on one axis; see [`Envelope::resist`].
#[must_use]
pub fn resist_axis(offset: f64, translation: f64, min: f64, max: f64, damping: f64) -> f64 {
    let next = offset + translation;
    let excess = if next > max {
        next - max
    } else if next < min {
        next - min
    } else {
        0.0
    };
    translation - excess * (1.0 - damping)
}

/// Maps a released value onto its rebound overshoot on one axis.
#[must_use]
pub fn append_damping(min: f64, max: f64, v: f64, curve: ReboundCurve) -> f64 {
    if v > max {
        max + curve.compress(v - max)
    } else if v < min {
        min - curve.compress(min - v)
    } else {
        v
    }
}

/// Background opacity while a dismiss drag is `dy` away from rest.
#[must_use]
pub fn dismiss_opacity(dy: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }
    1.0 - (dy.abs() / distance).clamp(0.0, 1.0)
}

/// The offset change that keeps `anchor` visually fixed while resizing.
#[must_use]
pub fn anchor_shift(old: Size, new: Size, anchor: UnitPoint) -> Vec2 {
    Vec2::new(
        -(new.width - old.width) * anchor.x,
        -(new.height - old.height) * anchor.y,
    )
}

/// Returns `true` when both extents are finite and strictly positive.
#[must_use]
pub(crate) fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_content_is_top_aligned() {
        let env = Envelope::new(
            Vec2::ZERO,
            Size::new(400.0, 2000.0),
            Size::new(400.0, 800.0),
        );
        assert_eq!(env.min_y, -1200.0);
        assert_eq!(env.max_y, 0.0);
        assert_eq!((env.min_x, env.max_x), (0.0, 0.0));
        assert!(env.is_open_y());
        assert!(!env.is_open_x());
    }

    #[test]
    fn small_content_is_centered_and_locked() {
        // A 600 high image rests at y = 100 inside an 800 high viewport.
        let env = Envelope::new(
            Vec2::new(0.0, 100.0),
            Size::new(400.0, 600.0),
            Size::new(400.0, 800.0),
        );
        assert_eq!((env.min_y, env.max_y), (0.0, 0.0));
        assert_eq!(env.clamp(Vec2::new(30.0, -70.0)), Vec2::ZERO);
    }

    #[test]
    fn resistance_only_applies_past_the_edge() {
        let env = Envelope::new(
            Vec2::ZERO,
            Size::new(400.0, 2000.0),
            Size::new(400.0, 800.0),
        );
        let inside = env.resist(Vec2::ZERO, Vec2::new(0.0, -300.0), 0.35);
        assert_eq!(inside.y, -300.0);
        let outside = env.resist(Vec2::ZERO, Vec2::new(0.0, 300.0), 0.35);
        assert!((outside.y - 105.0).abs() < 1e-9);
        let crossing = env.resist(Vec2::new(0.0, -100.0), Vec2::new(0.0, 300.0), 0.35);
        assert!((crossing.y - (100.0 + 200.0 * 0.35)).abs() < 1e-9);
    }

    #[test]
    fn append_damping_compresses_excess() {
        let v = append_damping(-1200.0, 0.0, 1000.0, ReboundCurve::Linear);
        assert!((v - 75.0).abs() < 1e-9);
        let v = append_damping(-1200.0, 0.0, -1300.0, ReboundCurve::Linear);
        assert!((v - (-1200.0 - 7.5)).abs() < 1e-9);
        assert_eq!(append_damping(-1200.0, 0.0, -600.0, ReboundCurve::Linear), -600.0);
    }

    #[test]
    fn opacity_fades_over_distance() {
        assert_eq!(dismiss_opacity(0.0, 100.0), 1.0);
        assert!((dismiss_opacity(-40.0, 100.0) - 0.6).abs() < 1e-12);
        assert_eq!(dismiss_opacity(150.0, 100.0), 0.0);
    }

    #[test]
    fn zero_anchor_pins_the_origin_corner() {
        let shift = anchor_shift(
            Size::new(100.0, 50.0),
            Size::new(200.0, 100.0),
            UnitPoint::ZERO,
        );
        assert_eq!(shift, Vec2::ZERO);
        let shift = anchor_shift(
            Size::new(100.0, 50.0),
            Size::new(200.0, 100.0),
            UnitPoint::CENTER,
        );
        assert_eq!(shift, Vec2::new(-50.0, -25.0));
    }

    #[test]
    fn usable_sizes() {
        assert!(is_usable(Size::new(1.0, 1.0)));
        assert!(!is_usable(Size::new(0.0, 1.0)));
        assert!(!is_usable(Size::new(1.0, f64::INFINITY)));
        assert!(!is_usable(Size::new(f64::NAN, 1.0)));
    }
}
