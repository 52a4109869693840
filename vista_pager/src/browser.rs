// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::{Size, Vec2};
use vista_gesture::{GestureArbiter, GestureEvent};
use vista_zoom::ZoomView;

use crate::router::{Pages, Router, rest_fitted};
use crate::{ContentProvider, ItemResponse, PageTrack, PageWindow, PagerConfig, PagerEvent};

#[derive(Clone, Debug)]
enum Cell {
    Pending,
    Ready(ZoomView),
    Failed,
}

impl Pages for HashMap<usize, Cell> {
    fn page_mut(&mut self, index: usize) -> Option<&mut ZoomView> {
        match self.get_mut(&index) {
            Some(Cell::Ready(view)) => Some(view),
            _ => None,
        }
    }
}

/// Load state of one page in a [`Browser`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageState {
    /// The page is outside the realized window.
    Unrealized,
    /// The provider is still loading the page.
    Pending,
    /// The page has a live engine.
    Ready,
    /// The provider could not load the page.
    Failed,
}

/// A pager over a [`ContentProvider`] of any size.
///
/// Only the pages within [`PagerConfig::realize_radius`] of the current page
/// have an engine; pages further out are dropped and requested again when
/// they come back. The pages between the realize and the prefetch radius are
/// announced to the provider with [`ContentProvider::prefetch`], and withdrawn
/// with [`ContentProvider::cancel_prefetch`] once they leave that band.
///
/// Gesture routing and paging behave exactly like [`Pager`](crate::Pager).
///
/// ```
/// use kurbo::Size;
/// use vista_pager::{Browser, ContentProvider, ItemResponse, PageState, PagerConfig};
///
/// struct Album(usize);
///
/// impl ContentProvider for Album {
///     fn len(&self) -> usize {
///         self.0
///     }
///
///     fn request(&mut self, index: usize) -> ItemResponse {
///         if index % 2 == 0 {
///             ItemResponse::Ready(Size::new(1200.0, 900.0))
///         } else {
///             ItemResponse::Pending
///         }
///     }
/// }
///
/// let mut browser = Browser::new(Album(100), PagerConfig::default(), Size::new(400.0, 800.0));
/// assert_eq!(browser.page_state(0), PageState::Ready);
/// assert_eq!(browser.page_state(1), PageState::Pending);
/// assert_eq!(browser.page_state(2), PageState::Unrealized);
///
/// // The image for page 1 finished loading.
/// assert!(browser.item_loaded(1, Size::new(800.0, 800.0)));
/// assert_eq!(browser.page_state(1), PageState::Ready);
/// ```
#[derive(Debug)]
pub struct Browser<P: ContentProvider> {
    provider: P,
    config: PagerConfig,
    viewport: Size,
    len: usize,
    cells: HashMap<usize, Cell>,
    prefetched: HashSet<usize>,
    window: PageWindow,
    router: Router,
    events: Vec<PagerEvent>,
}

impl<P: ContentProvider> Browser<P> {
    /// Creates a browser resting on the first page and realizes the pages
    /// around it.
    pub fn new(provider: P, config: PagerConfig, viewport: Size) -> Self {
        let config = config.sanitized();
        let len = provider.len();
        let track = PageTrack::new(
            viewport.width + config.spacing,
            len,
            config.page_damping,
            config.page_settle_ms,
        );
        let mut browser = Self {
            provider,
            config,
            viewport,
            len,
            cells: HashMap::new(),
            prefetched: HashSet::new(),
            window: PageWindow::default(),
            router: Router::new(track),
            events: Vec::new(),
        };
        browser.sync();
        browser
    }

    /// The content provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The content provider, mutably.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Returns the sanitized configuration.
    #[must_use]
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Number of pages, as of the last [`Browser::reload`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resizes the realized pages and the page strip, staying on the current
    /// page.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.router.reset();
        for cell in self.cells.values_mut() {
            if let Cell::Ready(view) = cell {
                view.set_viewport(viewport);
            }
        }
        self.router
            .track_mut()
            .set_page_width(viewport.width + self.config.spacing);
        self.sync();
    }

    /// The pages that currently have a cell.
    #[must_use]
    pub fn realized(&self) -> PageWindow {
        self.window
    }

    /// Returns `true` if the provider was asked to prefetch `index` and the
    /// hint has not been withdrawn.
    #[must_use]
    pub fn is_prefetched(&self, index: usize) -> bool {
        self.prefetched.contains(&index)
    }

    /// Load state of the page at `index`.
    #[must_use]
    pub fn page_state(&self, index: usize) -> PageState {
        match self.cells.get(&index) {
            None => PageState::Unrealized,
            Some(Cell::Pending) => PageState::Pending,
            Some(Cell::Ready(_)) => PageState::Ready,
            Some(Cell::Failed) => PageState::Failed,
        }
    }

    /// The engine of the page at `index`, if it is realized and loaded.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<&ZoomView> {
        match self.cells.get(&index) {
            Some(Cell::Ready(view)) => Some(view),
            _ => None,
        }
    }

    /// The engine of the page at `index`, for direct manipulation.
    pub fn page_mut(&mut self, index: usize) -> Option<&mut ZoomView> {
        self.cells.page_mut(index)
    }

    /// Completes a [`ItemResponse::Pending`] request.
    ///
    /// Returns `false` if the page is no longer waiting, e.g. because it left
    /// the realized window in the meantime.
    pub fn item_loaded(&mut self, index: usize, content: Size) -> bool {
        let Some(cell) = self.cells.get_mut(&index) else {
            log::debug!("late load of page {index} ignored");
            return false;
        };
        if !matches!(cell, Cell::Pending) {
            return false;
        }
        *cell = Cell::Ready(ZoomView::with_sizes(
            self.config.viewer,
            self.viewport,
            content,
        ));
        true
    }

    /// Fails a [`ItemResponse::Pending`] request.
    ///
    /// Returns `false` if the page is no longer waiting.
    pub fn item_failed(&mut self, index: usize) -> bool {
        let Some(cell) = self.cells.get_mut(&index) else {
            return false;
        };
        if !matches!(cell, Cell::Pending) {
            return false;
        }
        *cell = Cell::Failed;
        log::debug!("page {index} failed to load");
        self.events.push(PagerEvent::LoadFailed(index));
        true
    }

    /// Picks up a changed page count from the provider and requests every
    /// realized page again.
    pub fn reload(&mut self) {
        self.len = self.provider.len();
        self.router.reset();
        self.router.track_mut().set_page_count(self.len);
        self.cells.clear();
        self.window = PageWindow::default();
        if let Some(index) = self.router.track_mut().take_change() {
            self.events.push(PagerEvent::PageChanged(index));
        }
        self.sync();
    }

    /// The page strip's scroll state.
    #[must_use]
    pub fn track(&self) -> &PageTrack {
        self.router.track()
    }

    /// The pan ownership token shared by the browser and its pages.
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

    /// How far the strip moved since the current drag began.
    #[must_use]
    pub fn drag_delta(&self) -> Option<f64> {
        self.router.track().drag_delta()
    }

    /// Returns `false` while a page owns the pan.
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

    /// Routes one canonical gesture event, then realizes the pages around
    /// wherever the strip has moved.
    pub fn handle(&mut self, event: GestureEvent) {
        self.router.handle(event, &mut self.cells);
        self.sync();
    }

    /// Moves to the page at `index`.
    pub fn scroll_to(&mut self, index: usize, animated: bool) {
        self.router.reset();
        self.router.track_mut().scroll_to(index, animated);
        if let Some(index) = self.router.track_mut().take_change() {
            self.page_changed(index);
        }
        self.sync();
    }

    /// Advances the page snap and the realized pages' transitions.
    ///
    /// Returns `true` while anything is still animating.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut animating = false;
        for index in self.window.range() {
            if let Some(view) = self.cells.page_mut(index) {
                animating |= view.tick(now_ms);
            }
        }
        self.collect_item_events();
        if let Some(index) = self.router.track_mut().tick(now_ms) {
            self.page_changed(index);
        }
        self.sync();
        animating || self.router.track().is_animating()
    }

    /// Drains the events reported since the last call.
    pub fn take_events(&mut self) -> Vec<PagerEvent> {
        self.collect_item_events();
        core::mem::take(&mut self.events)
    }

    fn collect_item_events(&mut self) {
        for index in self.window.range() {
            if let Some(view) = self.cells.page_mut(index) {
                self.events.extend(
                    view.take_events()
                        .into_iter()
                        .map(|event| PagerEvent::Item { index, event }),
                );
            }
        }
    }

    fn page_changed(&mut self, index: usize) {
        for (other, cell) in &mut self.cells {
            if *other != index
                && let Cell::Ready(view) = cell
            {
                rest_fitted(view);
            }
        }
        self.events.push(PagerEvent::PageChanged(index));
    }

    /// Realizes the pages around the current one and updates the prefetch
    /// hints.
    fn sync(&mut self) {
        let center = self.router.track().current_index();
        let realize = PageWindow::around(center, self.config.realize_radius, self.len);
        if realize != self.window {
            self.collect_item_events();
            self.cells.retain(|index, _| realize.contains(*index));
            for index in realize.range() {
                if self.cells.contains_key(&index) {
                    continue;
                }
                let cell = match self.provider.request(index) {
                    ItemResponse::Ready(content) => Cell::Ready(ZoomView::with_sizes(
                        self.config.viewer,
                        self.viewport,
                        content,
                    )),
                    ItemResponse::Pending => Cell::Pending,
                    ItemResponse::Failed => {
                        log::debug!("page {index} failed to load");
                        self.events.push(PagerEvent::LoadFailed(index));
                        Cell::Failed
                    }
                };
                self.cells.insert(index, cell);
            }
            log::debug!("realized pages {:?}", realize.range());
            self.window = realize;
        }

        let band = PageWindow::around(center, self.config.prefetch_radius, self.len);
        let wanted: HashSet<usize> = band.range().filter(|i| !realize.contains(*i)).collect();
        let mut added: Vec<usize> = wanted.difference(&self.prefetched).copied().collect();
        let mut dropped: Vec<usize> = self
            .prefetched
            .iter()
            .copied()
            .filter(|i| !wanted.contains(i) && !realize.contains(*i))
            .collect();
        if !dropped.is_empty() {
            dropped.sort_unstable();
            log::debug!("cancel prefetch {dropped:?}");
            self.provider.cancel_prefetch(&dropped);
        }
        if !added.is_empty() {
            added.sort_unstable();
            log::debug!("prefetch {added:?}");
            self.provider.prefetch(&added);
        }
        self.prefetched = wanted;
    }
}
