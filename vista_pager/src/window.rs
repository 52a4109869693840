// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A contiguous run of page indices `[start, end)`.
///
/// Hosts diff successive windows to decide which pages to realize or
/// recycle, the same way a virtual list diffs its visible strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageWindow {
    /// First index in the window.
    pub start: usize,
    /// One past the last index in the window.
    pub end: usize,
}

impl PageWindow {
    /// The pages within `radius` of `center`, limited to `0..len`.
    #[must_use]
    pub fn around(center: usize, radius: usize, len: usize) -> Self {
        if len == 0 {
            return Self::default();
        }
        let center = center.min(len - 1);
        Self {
            start: center.saturating_sub(radius),
            end: center.saturating_add(radius).saturating_add(1).min(len),
        }
    }

    /// Number of pages in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the window holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `index` lies in the window.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    /// The window as an index range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
