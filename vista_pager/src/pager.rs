// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Size, Vec2};
use vista_gesture::{GestureArbiter, GestureEvent};
use vista_zoom::ZoomView;

use crate::router::{Pages, Router, rest_fitted};
use crate::{PageTrack, PagerConfig, PagerEvent};

impl Pages for Vec<ZoomView> {
    fn page_mut(&mut self, index: usize) -> Option<&mut ZoomView> {
        self.get_mut(index)
    }
}

/// A horizontal pager over a fixed list of images.
///
/// Every page has its own [`ZoomView`]. Pages are laid out left to right,
/// one viewport wide with [`PagerConfig::spacing`] between them, and the pager
/// snaps to whole pages. Pans are routed either to the pager or to the
/// current page, never both.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use vista_gesture::GestureEvent;
/// use vista_pager::{Pager, PagerConfig, PagerEvent};
///
/// let mut pager = Pager::new(
///     PagerConfig::default(),
///     Size::new(400.0, 800.0),
///     [Size::new(400.0, 600.0), Size::new(800.0, 600.0)],
/// );
///
/// pager.handle(GestureEvent::PanBegan { location: Point::new(300.0, 400.0) });
/// pager.handle(GestureEvent::PanChanged { translation: Vec2::new(-250.0, 0.0) });
/// assert_eq!(pager.drag_delta(), Some(250.0));
/// pager.handle(GestureEvent::PanEnded {
///     translation: Vec2::new(-250.0, 0.0),
///     predicted: Vec2::new(-250.0, 0.0),
/// });
///
/// let mut now = 0;
/// while pager.tick(now) {
///     now += 16;
/// }
/// assert_eq!(pager.take_events(), vec![PagerEvent::PageChanged(1)]);
/// assert_eq!(pager.page_number(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Pager {
    config: PagerConfig,
    viewport: Size,
    pages: Vec<ZoomView>,
    router: Router,
    events: Vec<PagerEvent>,
}

impl Pager {
    /// Creates a pager showing one page per content size, resting on the
    /// first page.
    #[must_use]
    pub fn new(
        config: PagerConfig,
        viewport: Size,
        contents: impl IntoIterator<Item = Size>,
    ) -> Self {
        let config = config.sanitized();
        let pages: Vec<_> = contents
            .into_iter()
            .map(|content| ZoomView::with_sizes(config.viewer, viewport, content))
            .collect();
        let track = PageTrack::new(
            viewport.width + config.spacing,
            pages.len(),
            config.page_damping,
            config.page_settle_ms,
        );
        Self {
            config,
            viewport,
            pages,
            router: Router::new(track),
            events: Vec::new(),
        }
    }

    /// Returns the sanitized configuration.
    #[must_use]
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if there are no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resizes every page and the page strip, staying on the current page.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.router.reset();
        for page in &mut self.pages {
            page.set_viewport(viewport);
        }
        self.router
            .track_mut()
            .set_page_width(viewport.width + self.config.spacing);
    }

    /// The engine of the page at `index`.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<&ZoomView> {
        self.pages.get(index)
    }

    /// The engine of the page at `index`, for direct manipulation.
    pub fn page_mut(&mut self, index: usize) -> Option<&mut ZoomView> {
        self.pages.get_mut(index)
    }

    /// The page strip's scroll state.
    #[must_use]
    pub fn track(&self) -> &PageTrack {
        self.router.track()
    }

    /// The pan ownership token shared by the pager and its pages.
    #[must_use]
    pub fn arbiter(&self) -> &GestureArbiter {
        self.router.arbiter()
    }

    /// The page nearest to the rendered scroll offset.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.router.track().current_index()
    }

    /// The 1-based page number for a page indicator.
    #[must_use]
    pub fn page_number(&self) -> usize {
        self.router.track().page_number()
    }

    /// The rendered scroll offset of the page strip.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.router.track().scroll_offset()
    }

    /// How far the strip moved since the current pager drag began.
    #[must_use]
    pub fn drag_delta(&self) -> Option<f64> {
        self.router.track().drag_delta()
    }

    /// Returns `false` while a page owns the pan, e.g. during a dismiss drag.
    #[must_use]
    pub fn is_paging_enabled(&self) -> bool {
        self.router.is_paging_enabled()
    }

    /// Where the page at `index` is drawn, relative to the viewport origin.
    #[must_use]
    pub fn page_origin(&self, index: usize) -> Vec2 {
        let track = self.router.track();
        Vec2::new(index as f64 * track.page_width() - track.scroll_offset(), 0.0)
    }

    /// Routes one canonical gesture event.
    pub fn handle(&mut self, event: GestureEvent) {
        self.router.handle(event, &mut self.pages);
    }

    /// Moves to the page at `index`.
    pub fn scroll_to(&mut self, index: usize, animated: bool) {
        self.router.reset();
        self.router.track_mut().scroll_to(index, animated);
        self.collect_page_change();
    }

    /// Advances the page snap and every page's transitions to `now_ms`.
    ///
    /// Returns `true` while anything is still animating.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut animating = false;
        for page in &mut self.pages {
            animating |= page.tick(now_ms);
        }
        self.collect_item_events();
        if let Some(index) = self.router.track_mut().tick(now_ms) {
            self.page_changed(index);
        }
        animating || self.router.track().is_animating()
    }

    /// Drains the events reported since the last call.
    pub fn take_events(&mut self) -> Vec<PagerEvent> {
        self.collect_item_events();
        core::mem::take(&mut self.events)
    }

    fn collect_item_events(&mut self) {
        for (index, page) in self.pages.iter_mut().enumerate() {
            self.events.extend(
                page.take_events()
                    .into_iter()
                    .map(|event| PagerEvent::Item { index, event }),
            );
        }
    }

    fn collect_page_change(&mut self) {
        if let Some(index) = self.router.track_mut().take_change() {
            self.page_changed(index);
        }
    }

    fn page_changed(&mut self, index: usize) {
        for (other, page) in self.pages.iter_mut().enumerate() {
            if other != index {
                rest_fitted(page);
            }
        }
        self.events.push(PagerEvent::PageChanged(index));
    }
}
