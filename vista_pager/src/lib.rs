// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_pager --heading-base-level=0

//! Vista Pager: horizontal paging over independent zoom engines.
//!
//! This crate composes one [`vista_zoom::ZoomView`] per image into a
//! horizontally paged strip. Pages are one viewport wide with a fixed gap
//! between them, and drags snap to whole pages.
//!
//! The core concepts are:
//!
//! - [`PageTrack`]: the strip's scroll offset, with rubber-band damping past
//!   either end and snapping to at most one page per release.
//! - [`Pager`]: a fixed list of pages, each with a live engine.
//! - [`Browser`]: a pager over a [`ContentProvider`] of any length that only
//!   keeps engines for the pages near the current one, and sends prefetch
//!   hints for the pages just beyond them.
//! - [`PagerEvent`]: page changes, load failures, and the intents reported by
//!   the pages' engines.
//!
//! Both pager types take the canonical gesture stream from `vista_gesture`
//! and decide once per pan whether the strip or the current page owns it.
//! Ownership goes through a [`vista_gesture::GestureArbiter`]: a page cannot
//! start a dismiss while the strip is dragging, and the strip does not page
//! while a page owns the pan. A cancelled pan always clears the arbiter, so
//! paging is re-enabled on every path.
//!
//! This crate deliberately does **not** load images, keep views, or render.
//! Host frameworks are responsible for:
//!
//! - Drawing each page at [`Pager::page_origin`] with the page engine's
//!   [`transform`](vista_zoom::ZoomView::transform).
//! - Calling `tick` with a monotonic millisecond clock while it returns
//!   `true`, and draining `take_events`.
//! - For a [`Browser`], answering [`ContentProvider::request`] and reporting
//!   late results with [`Browser::item_loaded`] or [`Browser::item_failed`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vista_gesture::GestureEvent;
//! use vista_pager::{Pager, PagerConfig, PagerEvent};
//! use vista_zoom::ViewerEvent;
//!
//! let mut pager = Pager::new(
//!     PagerConfig::default(),
//!     Size::new(400.0, 800.0),
//!     [Size::new(400.0, 600.0); 3],
//! );
//!
//! // A vertical drag on the current page is a dismiss; paging is off meanwhile.
//! pager.handle(GestureEvent::PanBegan { location: Point::new(200.0, 400.0) });
//! pager.handle(GestureEvent::PanChanged { translation: Vec2::new(0.0, 300.0) });
//! assert!(!pager.is_paging_enabled());
//! pager.handle(GestureEvent::PanEnded {
//!     translation: Vec2::new(0.0, 300.0),
//!     predicted: Vec2::new(0.0, 300.0),
//! });
//! assert!(pager.is_paging_enabled());
//!
//! let mut now = 0;
//! while pager.tick(now) {
//!     now += 16;
//! }
//! assert_eq!(
//!     pager.take_events(),
//!     vec![PagerEvent::Item { index: 0, event: ViewerEvent::DismissRequested }]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod browser;
mod config;
mod event;
mod pager;
mod provider;
mod router;
mod track;
mod window;

pub use browser::{Browser, PageState};
pub use config::PagerConfig;
pub use event::PagerEvent;
pub use pager::Pager;
pub use provider::{ContentProvider, ItemResponse};
pub use track::PageTrack;
pub use window::PageWindow;
