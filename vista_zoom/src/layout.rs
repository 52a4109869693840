// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::config::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};
use crate::geometry::is_usable;
use crate::{Envelope, PanRegime, ViewerConfig};

/// Fit-width placement of one piece of content inside a viewport.
///
/// `Layout` is derived from the viewport, the content's intrinsic size, and
/// the zoom configuration, and is rebuilt whenever any of those change. It
/// fixes:
/// - The minimum (fitted) size: the viewport width, at the content's aspect ratio.
/// - The maximum size a double tap zooms to and a pinch may reach.
/// - The resting origin: horizontally centered, vertically centered when the
///   fitted content is shorter than the viewport, top-aligned otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    viewport: Size,
    content: Size,
    min_size: Size,
    max_size: Size,
    origin: Point,
}

impl Layout {
    /// Lays `content` out in `viewport`.
    ///
    /// Returns `None` if either size has a zero, negative, or non-finite
    /// extent; there is nothing to display in that case.
    #[must_use]
    pub fn new(viewport: Size, content: Size, config: &ViewerConfig) -> Option<Self> {
        if !is_usable(viewport) || !is_usable(content) {
            return None;
        }
        let min_size = Size::new(
            viewport.width,
            viewport.width / content.width * content.height,
        );
        if !is_usable(min_size) {
            return None;
        }
        let max_size = match config.max_zoom_scale {
            Some(scale) => min_size * scale.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE),
            None => {
                let height = (viewport.height * config.auto_zoom_viewport_ratio)
                    .max(content.height)
                    .max(min_size.height)
                    .min(min_size.height * MAX_ZOOM_SCALE);
                Size::new(height / min_size.height * min_size.width, height)
            }
        };
        let origin = Point::new(
            ((viewport.width - min_size.width) / 2.0).max(0.0),
            ((viewport.height - min_size.height) / 2.0).max(0.0),
        );
        Some(Self {
            viewport,
            content,
            min_size,
            max_size,
            origin,
        })
    }

    /// The viewport this layout fits into.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The content's intrinsic size.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    /// The fitted size, at zoom scale 1.
    #[must_use]
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// The largest resting size.
    #[must_use]
    pub fn max_size(&self) -> Size {
        self.max_size
    }

    /// Top-left corner of the fitted content at rest, in viewport coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Zoom scale of the maximum size.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.scale_of(self.max_size)
    }

    /// Zoom scale of a displayed `size` relative to the fitted size.
    #[must_use]
    pub fn scale_of(&self, size: Size) -> f64 {
        size.width / self.min_size.width
    }

    /// The displayed size at `scale`, clamped into the resting range.
    #[must_use]
    pub fn size_at(&self, scale: f64) -> Size {
        let scale = if scale.is_finite() { scale } else { 1.0 };
        self.min_size * scale.max(1.0).min(self.max_scale())
    }

    /// The valid offset range while content is displayed at `size`.
    #[must_use]
    pub fn envelope(&self, size: Size) -> Envelope {
        Envelope::new(self.origin.to_vec2(), size, self.viewport)
    }

    /// Which pan behavior applies while content is displayed at `size`.
    #[must_use]
    pub fn regime(&self, size: Size) -> PanRegime {
        if size.height <= self.viewport.height {
            PanRegime::SingleAxis
        } else {
            PanRegime::Free
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ViewerConfig {
        ViewerConfig::default()
    }

    #[test]
    fn short_content_is_fitted_and_centered() {
        let layout =
            Layout::new(Size::new(400.0, 800.0), Size::new(800.0, 600.0), &config()).unwrap();
        assert_eq!(layout.min_size(), Size::new(400.0, 300.0));
        assert_eq!(layout.origin(), Point::new(0.0, 250.0));
        assert_eq!(layout.regime(layout.min_size()), PanRegime::SingleAxis);
        let env = layout.envelope(layout.min_size());
        assert_eq!((env.min_y, env.max_y), (0.0, 0.0));
    }

    #[test]
    fn tall_content_is_top_aligned() {
        let layout =
            Layout::new(Size::new(400.0, 800.0), Size::new(400.0, 2000.0), &config()).unwrap();
        assert_eq!(layout.origin(), Point::ZERO);
        assert_eq!(layout.regime(layout.min_size()), PanRegime::Free);
        let env = layout.envelope(layout.min_size());
        assert_eq!((env.min_y, env.max_y), (-1200.0, 0.0));
    }

    #[test]
    fn automatic_max_size_uses_viewport_ratio_or_content_height() {
        // 2.5 * 800 = 2000 beats the intrinsic height of 600.
        let layout =
            Layout::new(Size::new(400.0, 800.0), Size::new(800.0, 600.0), &config()).unwrap();
        assert_eq!(layout.max_size().height, 2000.0);
        assert!((layout.max_scale() - 2000.0 / 300.0).abs() < 1e-9);

        // The intrinsic height wins for very tall content, up to 20x.
        let layout =
            Layout::new(Size::new(400.0, 800.0), Size::new(400.0, 5000.0), &config()).unwrap();
        assert_eq!(layout.max_size(), Size::new(400.0, 5000.0));

        let layout =
            Layout::new(Size::new(400.0, 800.0), Size::new(4000.0, 100.0), &config()).unwrap();
        assert_eq!(layout.min_size(), Size::new(400.0, 10.0));
        assert!((layout.max_scale() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn explicit_scale_is_clamped() {
        let layout = Layout::new(
            Size::new(400.0, 800.0),
            Size::new(400.0, 400.0),
            &ViewerConfig {
                max_zoom_scale: Some(50.0),
                ..config()
            },
        )
        .unwrap();
        assert_eq!(layout.max_size(), Size::new(8000.0, 8000.0));
        assert_eq!(layout.size_at(100.0), layout.max_size());
        assert_eq!(layout.size_at(0.1), layout.min_size());
    }

    #[test]
    fn degenerate_sizes_have_no_layout() {
        let c = config();
        assert!(Layout::new(Size::ZERO, Size::new(1.0, 1.0), &c).is_none());
        assert!(Layout::new(Size::new(1.0, 1.0), Size::ZERO, &c).is_none());
        assert!(Layout::new(Size::new(1.0, -1.0), Size::new(1.0, 1.0), &c).is_none());
        assert!(Layout::new(Size::new(1.0, 1.0), Size::new(f64::NAN, 1.0), &c).is_none());
    }
}
