// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// The displayed state of the content, ready for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Displayed content size.
    pub size: Size,
    /// Offset from the resting origin, including any live drag.
    pub offset: Vec2,
    /// Zoom scale relative to the fitted size.
    pub scale: f64,
    /// Background opacity.
    pub opacity: f64,
}

impl Transform {
    /// Where the content's top-left corner is drawn, given the layout `origin`.
    #[must_use]
    pub fn position(&self, origin: Point) -> Point {
        origin + self.offset
    }

    /// The content's displayed rectangle in viewport coordinates.
    #[must_use]
    pub fn frame(&self, origin: Point) -> Rect {
        Rect::from_origin_size(self.position(origin), self.size)
    }

    /// Maps content pixels (intrinsic size `content`) into viewport space.
    ///
    /// Returns the identity for degenerate content.
    #[must_use]
    pub fn to_affine(&self, origin: Point, content: Size) -> Affine {
        if content.width <= 0.0 || content.height <= 0.0 {
            return Affine::IDENTITY;
        }
        Affine::translate(self.position(origin).to_vec2())
            * Affine::scale_non_uniform(
                self.size.width / content.width,
                self.size.height / content.height,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affine_maps_content_corners() {
        let t = Transform {
            size: Size::new(800.0, 600.0),
            offset: Vec2::new(-100.0, -50.0),
            scale: 2.0,
            opacity: 1.0,
        };
        let a = t.to_affine(Point::new(0.0, 100.0), Size::new(1600.0, 1200.0));
        assert_eq!(a * Point::ZERO, Point::new(-100.0, 50.0));
        assert_eq!(a * Point::new(1600.0, 1200.0), Point::new(700.0, 650.0));
        assert_eq!(
            t.frame(Point::new(0.0, 100.0)),
            Rect::new(-100.0, 50.0, 700.0, 650.0)
        );
    }
}
