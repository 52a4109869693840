// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// The answer to a content request for one page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemResponse {
    /// The content is available and has this intrinsic size.
    Ready(Size),
    /// Loading has started; the host reports the result later through
    /// [`Browser::item_loaded`](crate::Browser::item_loaded) or
    /// [`Browser::item_failed`](crate::Browser::item_failed).
    Pending,
    /// The content cannot be shown.
    Failed,
}

/// The data source behind a [`Browser`](crate::Browser).
///
/// The browser only asks for what it is about to show. Loading, decoding and
/// caching are the provider's business.
pub trait ContentProvider {
    /// Number of pages.
    fn len(&self) -> usize;

    /// Returns `true` if there are no pages.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Requests the content of the page at `index` for display.
    fn request(&mut self, index: usize) -> ItemResponse;

    /// Hints that the pages at `indices` will probably be requested soon.
    fn prefetch(&mut self, indices: &[usize]) {
        let _ = indices;
    }

    /// Withdraws an earlier [`prefetch`](Self::prefetch) hint.
    fn cancel_prefetch(&mut self, indices: &[usize]) {
        let _ = indices;
    }
}
