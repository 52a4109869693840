// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vista_zoom::ViewerEvent;

/// Something the host should react to, drained with `take_events`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerEvent {
    /// The pager came to rest on a different page.
    PageChanged(usize),
    /// The content provider could not load this page.
    LoadFailed(usize),
    /// An intent reported by one page's engine.
    Item {
        /// The page that reported it.
        index: usize,
        /// What it reported.
        event: ViewerEvent,
    },
}
