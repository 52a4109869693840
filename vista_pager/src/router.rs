// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing of one gesture stream between the page track and the pages.

use kurbo::{Point, Vec2};
use vista_gesture::{DragDirection, GestureArbiter, GestureEvent, GestureOwner};
use vista_zoom::{PanPhase, ZoomView};

use crate::PageTrack;

/// Lookup of the engine showing a page, if it has one.
pub(crate) trait Pages {
    fn page_mut(&mut self, index: usize) -> Option<&mut ZoomView>;
}

/// Returns a page that scrolled out of view to its fitted size.
///
/// A page that is moving out for a dismiss is left alone.
pub(crate) fn rest_fitted(page: &mut ZoomView) {
    if page.scale() > 1.0 && page.phase() != PanPhase::Dismissing {
        page.reset();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Route {
    Pager,
    Item(usize),
    /// The pan was refused; the rest of it is dropped.
    Blocked,
}

/// Decides, once per pan, whether the pager or the current page owns it.
///
/// The decision is made on the first non-zero translation:
/// - A page that can scroll in the drag's direction keeps the pan.
/// - Otherwise horizontal pans page, and vertical pans go to the page for
///   pan-to-dismiss.
///
/// Ownership goes through a [`GestureArbiter`], so a page never starts a
/// dismiss while the pager drags and the pager never pages while a page owns
/// the pan. Cancellation always clears the arbiter.
#[derive(Clone, Debug)]
pub(crate) struct Router {
    track: PageTrack,
    arbiter: GestureArbiter,
    pending: Option<Point>,
    route: Option<Route>,
    pinch_target: Option<usize>,
}

impl Router {
    pub(crate) fn new(track: PageTrack) -> Self {
        Self {
            track,
            arbiter: GestureArbiter::new(),
            pending: None,
            route: None,
            pinch_target: None,
        }
    }

    pub(crate) fn track(&self) -> &PageTrack {
        &self.track
    }

    pub(crate) fn track_mut(&mut self) -> &mut PageTrack {
        &mut self.track
    }

    pub(crate) fn arbiter(&self) -> &GestureArbiter {
        &self.arbiter
    }

    /// Paging is off while a page owns the pan.
    pub(crate) fn is_paging_enabled(&self) -> bool {
        !matches!(self.arbiter.owner(), Some(GestureOwner::Item(_)))
    }

    /// Drops any open pan and pinch, e.g. when the pages are rebuilt.
    pub(crate) fn reset(&mut self) {
        if self.route == Some(Route::Pager) {
            self.track.cancel_drag();
        }
        self.route = None;
        self.pending = None;
        self.pinch_target = None;
        self.arbiter.reset();
    }

    pub(crate) fn handle<P: Pages + ?Sized>(&mut self, event: GestureEvent, pages: &mut P) {
        match event {
            GestureEvent::PanBegan { location } => {
                self.abandon(pages);
                self.pending = Some(location);
            }
            GestureEvent::PanChanged { translation } => self.pan_changed(translation, pages),
            GestureEvent::PanEnded {
                translation,
                predicted,
            } => {
                match self.route.take() {
                    Some(Route::Pager) => {
                        self.track.end_drag(predicted.x);
                        self.arbiter.release(GestureOwner::Pager);
                    }
                    Some(Route::Item(index)) => {
                        if let Some(page) = pages.page_mut(index) {
                            page.end_pan(translation, predicted);
                        }
                        self.arbiter.release(GestureOwner::Item(index));
                    }
                    Some(Route::Blocked) | None => {}
                }
                self.pending = None;
            }
            GestureEvent::PanCancelled => self.abandon(pages),
            GestureEvent::PinchBegan { .. } | GestureEvent::PinchChanged { .. } => {
                let index = match self.pinch_target {
                    Some(index) => index,
                    None if self.track.is_dragging() => return,
                    None => {
                        let index = self.track.current_index();
                        self.pinch_target = Some(index);
                        index
                    }
                };
                if let Some(page) = pages.page_mut(index) {
                    page.handle(event);
                }
            }
            GestureEvent::PinchEnded | GestureEvent::PinchCancelled => {
                if let Some(page) = self
                    .pinch_target
                    .take()
                    .and_then(|index| pages.page_mut(index))
                {
                    page.handle(event);
                }
            }
            GestureEvent::DoubleTap { .. } | GestureEvent::SingleTap => {
                if self.track.is_dragging() || self.track.is_animating() {
                    return;
                }
                let index = self.track.current_index();
                if let Some(page) = pages.page_mut(index) {
                    page.handle(event);
                }
            }
        }
    }

    fn pan_changed<P: Pages + ?Sized>(&mut self, translation: Vec2, pages: &mut P) {
        if !translation.is_finite() {
            return;
        }
        let route = match self.route {
            Some(route) => route,
            None => {
                let Some(route) = self.decide(translation, pages) else {
                    return;
                };
                self.route = Some(route);
                route
            }
        };
        match route {
            Route::Pager => self.track.update_drag(translation.x),
            Route::Item(index) => {
                if let Some(page) = pages.page_mut(index) {
                    page.update_pan(translation);
                }
            }
            Route::Blocked => {}
        }
    }

    fn decide<P: Pages + ?Sized>(&mut self, translation: Vec2, pages: &mut P) -> Option<Route> {
        let location = self.pending?;
        if translation == Vec2::ZERO {
            return None;
        }
        let index = self.track.current_index();
        let horizontal = DragDirection::of(translation) == DragDirection::Horizontal;
        let page_scrolls = pages.page_mut(index).map(|page| {
            if horizontal {
                page.can_pan_horizontally()
            } else {
                true
            }
        });
        let owner = match page_scrolls {
            Some(true) => GestureOwner::Item(index),
            Some(false) | None if horizontal => GestureOwner::Pager,
            _ => return Some(Route::Blocked),
        };
        if !self.arbiter.try_claim(owner) {
            return Some(Route::Blocked);
        }
        log::debug!("pan routed to {owner:?}");
        match owner {
            GestureOwner::Pager => {
                self.track.begin_drag();
                Some(Route::Pager)
            }
            GestureOwner::Item(index) => {
                if let Some(page) = pages.page_mut(index) {
                    page.begin_pan(location);
                }
                Some(Route::Item(index))
            }
        }
    }

    /// Cancels the open pan, restoring whichever side owned it.
    fn abandon<P: Pages + ?Sized>(&mut self, pages: &mut P) {
        match self.route.take() {
            Some(Route::Pager) => self.track.cancel_drag(),
            Some(Route::Item(index)) => {
                if let Some(page) = pages.page_mut(index) {
                    page.cancel_pan();
                }
            }
            Some(Route::Blocked) | None => {}
        }
        self.pending = None;
        self.arbiter.reset();
    }
}
