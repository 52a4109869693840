// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windowing, prefetching and late loading in `Browser`.

use kurbo::{Point, Size, Vec2};
use vista_gesture::GestureEvent;
use vista_pager::{
    Browser, ContentProvider, ItemResponse, PageState, PageWindow, PagerConfig, PagerEvent,
};

/// A provider that records every call it receives.
#[derive(Debug, Default)]
struct Recorder {
    len: usize,
    pending: Vec<usize>,
    failing: Vec<usize>,
    requests: Vec<usize>,
    prefetches: Vec<Vec<usize>>,
    cancels: Vec<Vec<usize>>,
}

impl Recorder {
    fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }
}

impl ContentProvider for Recorder {
    fn len(&self) -> usize {
        self.len
    }

    fn request(&mut self, index: usize) -> ItemResponse {
        self.requests.push(index);
        if self.failing.contains(&index) {
            ItemResponse::Failed
        } else if self.pending.contains(&index) {
            ItemResponse::Pending
        } else {
            ItemResponse::Ready(Size::new(400.0, 600.0))
        }
    }

    fn prefetch(&mut self, indices: &[usize]) {
        self.prefetches.push(indices.to_vec());
    }

    fn cancel_prefetch(&mut self, indices: &[usize]) {
        self.cancels.push(indices.to_vec());
    }
}

fn browser(provider: Recorder) -> Browser<Recorder> {
    Browser::new(provider, PagerConfig::default(), Size::new(400.0, 800.0))
}

fn run_to_rest(browser: &mut Browser<Recorder>) {
    let mut now = 0;
    while browser.tick(now) {
        now += 16;
    }
}

#[test]
fn initial_window_and_prefetch() {
    let b = browser(Recorder::new(10));
    assert_eq!(b.realized(), PageWindow { start: 0, end: 2 });
    assert_eq!(b.provider().requests, vec![0, 1]);
    assert_eq!(b.provider().prefetches, vec![vec![2]]);
    assert!(b.provider().cancels.is_empty());
    assert!(b.is_prefetched(2));
    assert_eq!(b.page_state(2), PageState::Unrealized);
}

#[test]
fn jumping_recycles_and_moves_prefetch_band() {
    let mut b = browser(Recorder::new(10));
    b.scroll_to(5, false);
    assert_eq!(b.take_events(), vec![PagerEvent::PageChanged(5)]);
    assert_eq!(b.realized().range(), 4..7);
    assert_eq!(b.page_state(0), PageState::Unrealized);
    assert_eq!(b.page_state(5), PageState::Ready);

    let provider = b.provider();
    assert_eq!(provider.requests, vec![0, 1, 4, 5, 6]);
    assert_eq!(provider.cancels, vec![vec![2]]);
    assert_eq!(provider.prefetches, vec![vec![2], vec![3, 7]]);
}

#[test]
fn prefetched_page_entering_the_window_is_not_cancelled() {
    let mut b = browser(Recorder::new(10));
    b.scroll_to(1, false);
    // Page 2 moved from the prefetch band into the window.
    assert_eq!(b.realized().range(), 0..3);
    assert!(b.provider().cancels.is_empty());
    assert_eq!(b.provider().prefetches, vec![vec![2], vec![3]]);
    assert!(!b.is_prefetched(2));
}

#[test]
fn pages_come_into_reach_while_dragging() {
    let mut b = browser(Recorder::new(10));
    b.handle(GestureEvent::PanBegan {
        location: Point::new(200.0, 400.0),
    });
    b.handle(GestureEvent::PanChanged {
        translation: Vec2::new(-250.0, 0.0),
    });
    assert_eq!(b.current_index(), 1);
    assert_eq!(b.realized().range(), 0..3);
    assert_eq!(b.page_state(2), PageState::Ready);
    assert_eq!(b.page_number(), 2);
}

#[test]
fn late_load_completes_pending_page() {
    let mut provider = Recorder::new(10);
    provider.pending = vec![1, 6];
    let mut b = browser(provider);
    assert_eq!(b.page_state(1), PageState::Pending);
    assert!(b.page(1).is_none());
    assert!(b.item_loaded(1, Size::new(800.0, 600.0)));
    assert_eq!(b.page_state(1), PageState::Ready);
    assert_eq!(b.page(1).unwrap().content_size(), Size::new(800.0, 600.0));

    // A second completion for the same page is ignored.
    assert!(!b.item_loaded(1, Size::new(10.0, 10.0)));

    // Page 6 left the window before its image arrived.
    b.scroll_to(5, false);
    b.scroll_to(0, false);
    assert_eq!(b.page_state(6), PageState::Unrealized);
    assert!(!b.item_loaded(6, Size::new(400.0, 600.0)));
}

#[test]
fn failures_are_reported_once() {
    let mut provider = Recorder::new(4);
    provider.failing = vec![1];
    provider.pending = vec![0];
    let mut b = browser(provider);
    assert_eq!(b.page_state(1), PageState::Failed);
    assert!(b.item_failed(0));
    assert!(!b.item_failed(0));
    assert_eq!(
        b.take_events(),
        vec![PagerEvent::LoadFailed(1), PagerEvent::LoadFailed(0)]
    );
}

#[test]
fn vertical_pan_on_unloaded_page_is_dropped_but_paging_works() {
    let mut provider = Recorder::new(4);
    provider.pending = vec![0];
    let mut b = browser(provider);

    b.handle(GestureEvent::PanBegan {
        location: Point::new(200.0, 400.0),
    });
    b.handle(GestureEvent::PanChanged {
        translation: Vec2::new(0.0, 200.0),
    });
    assert!(!b.arbiter().is_claimed());
    b.handle(GestureEvent::PanEnded {
        translation: Vec2::new(0.0, 200.0),
        predicted: Vec2::new(0.0, 200.0),
    });

    b.handle(GestureEvent::PanBegan {
        location: Point::new(200.0, 400.0),
    });
    b.handle(GestureEvent::PanChanged {
        translation: Vec2::new(-300.0, 0.0),
    });
    assert!(b.arbiter().is_pager_dragging());
    b.handle(GestureEvent::PanEnded {
        translation: Vec2::new(-300.0, 0.0),
        predicted: Vec2::new(-300.0, 0.0),
    });
    run_to_rest(&mut b);
    assert_eq!(b.current_index(), 1);
    assert!(b.take_events().contains(&PagerEvent::PageChanged(1)));
}

#[test]
fn reload_picks_up_a_shorter_collection() {
    let mut b = browser(Recorder::new(10));
    b.scroll_to(5, false);
    b.take_events();

    b.provider_mut().len = 3;
    b.reload();
    assert_eq!(b.len(), 3);
    assert_eq!(b.current_index(), 2);
    assert_eq!(b.realized().range(), 1..3);
    assert_eq!(b.take_events(), vec![PagerEvent::PageChanged(2)]);

    b.provider_mut().len = 0;
    b.reload();
    assert!(b.is_empty());
    assert!(b.realized().is_empty());
}
