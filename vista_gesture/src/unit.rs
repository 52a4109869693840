// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// A point in unit space relative to some content rectangle.
///
/// `(0, 0)` is the content's top-left corner and `(1, 1)` its bottom-right
/// corner. Pinch and double-tap anchors are expressed in this space so that
/// they stay meaningful while the content is resized.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitPoint {
    /// Horizontal position, `0.0` at the leading edge.
    pub x: f64,
    /// Vertical position, `0.0` at the top edge.
    pub y: f64,
}

impl UnitPoint {
    /// The top-left corner.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// The center of the content.
    pub const CENTER: Self = Self::new(0.5, 0.5);

    /// Creates a unit point from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Expresses `point` (in the content's local coordinates) relative to `size`.
    ///
    /// Returns `None` when `size` has a zero, negative, or non-finite extent
    /// on either axis, since no meaningful anchor exists in that case.
    #[must_use]
    pub fn from_point_in(point: Point, size: Size) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(size.width) || !valid(size.height) {
            return None;
        }
        Some(Self::new(point.x / size.width, point.y / size.height))
    }

    /// Returns this point with both components clamped into `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.x.clamp(0.0, 1.0), self.y.clamp(0.0, 1.0))
    }

    /// Returns the point as a vector, for component-wise arithmetic.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_point_in_normalizes_against_size() {
        let p = UnitPoint::from_point_in(Point::new(50.0, 300.0), Size::new(200.0, 400.0));
        assert_eq!(p, Some(UnitPoint::new(0.25, 0.75)));
    }

    #[test]
    fn from_point_in_rejects_degenerate_sizes() {
        let pt = Point::new(1.0, 1.0);
        assert_eq!(UnitPoint::from_point_in(pt, Size::new(0.0, 10.0)), None);
        assert_eq!(UnitPoint::from_point_in(pt, Size::new(10.0, -1.0)), None);
        assert_eq!(UnitPoint::from_point_in(pt, Size::new(f64::NAN, 10.0)), None);
    }

    #[test]
    fn clamped_keeps_components_in_unit_range() {
        let p = UnitPoint::new(-0.5, 1.5).clamped();
        assert_eq!(p, UnitPoint::new(0.0, 1.0));
    }
}
