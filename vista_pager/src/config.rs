// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vista_zoom::ViewerConfig;

/// Tuning for a [`Pager`](crate::Pager) or [`Browser`](crate::Browser).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerConfig {
    /// Gap between neighboring pages, in viewport units.
    pub spacing: f64,
    /// Fraction of a drag that passes through past the first or last page.
    pub page_damping: f64,
    /// Duration of the snap to a page after a drag is released.
    pub page_settle_ms: u64,
    /// Pages on each side of the current one that get a live engine.
    pub realize_radius: usize,
    /// Pages on each side of the current one that the provider is asked to
    /// prefetch.
    pub prefetch_radius: usize,
    /// Configuration of every page's engine. Paging is always enabled.
    pub viewer: ViewerConfig,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            spacing: 40.0,
            page_damping: 0.35,
            page_settle_ms: 300,
            realize_radius: 1,
            prefetch_radius: 2,
            viewer: ViewerConfig::default().with_paging(true),
        }
    }
}

impl PagerConfig {
    /// Sets the gap between pages.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the overscroll damping past the first and last page.
    #[must_use]
    pub fn with_page_damping(mut self, damping: f64) -> Self {
        self.page_damping = damping;
        self
    }

    /// Sets the page snap duration.
    #[must_use]
    pub fn with_page_settle_ms(mut self, ms: u64) -> Self {
        self.page_settle_ms = ms;
        self
    }

    /// Sets how many neighbors of the current page are realized.
    #[must_use]
    pub fn with_realize_radius(mut self, radius: usize) -> Self {
        self.realize_radius = radius;
        self
    }

    /// Sets how many neighbors of the current page are prefetched.
    #[must_use]
    pub fn with_prefetch_radius(mut self, radius: usize) -> Self {
        self.prefetch_radius = radius;
        self
    }

    /// Sets the per-page engine configuration.
    #[must_use]
    pub fn with_viewer(mut self, viewer: ViewerConfig) -> Self {
        self.viewer = viewer;
        self
    }

    /// Returns a copy with every field forced into its usable range.
    ///
    /// The prefetch radius never falls below the realize radius, and the
    /// per-page engines always run with paging enabled.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let spacing = if self.spacing.is_finite() && self.spacing >= 0.0 {
            self.spacing
        } else {
            defaults.spacing
        };
        let page_damping = if self.page_damping.is_finite() {
            self.page_damping.clamp(0.0, 1.0)
        } else {
            defaults.page_damping
        };
        Self {
            spacing,
            page_damping,
            page_settle_ms: self.page_settle_ms.max(1),
            realize_radius: self.realize_radius,
            prefetch_radius: self.prefetch_radius.max(self.realize_radius),
            viewer: self.viewer.with_paging(true).sanitized(),
        }
    }
}
