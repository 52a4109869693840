// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The horizontal scroll position of a strip of equally wide pages.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use vista_zoom::{Easing, Transition};

/// Paged horizontal scrolling over `page_count` pages.
///
/// The scroll offset of page `i` is `i * page_width`, where the page width
/// includes the spacing to the next page. Drags move the offset directly with
/// rubber-band damping past either end; a release snaps to at most one page
/// away from where the drag started, taking the flick's predicted travel
/// into account.
///
/// ```
/// use vista_pager::PageTrack;
///
/// let mut track = PageTrack::new(440.0, 5, 0.35, 300);
/// track.begin_drag();
/// track.update_drag(-100.0);
/// assert_eq!(track.drag_delta(), Some(100.0));
///
/// // A fast flick still only advances one page.
/// assert_eq!(track.end_drag(-2000.0), 1);
/// track.tick(0);
/// assert_eq!(track.tick(300), Some(1));
/// assert_eq!(track.scroll_offset(), 440.0);
/// ```
#[derive(Clone, Debug)]
pub struct PageTrack {
    page_width: f64,
    page_count: usize,
    damping: f64,
    settle_ms: u64,
    scroll: f64,
    drag_start: Option<f64>,
    animation: Option<Transition<f64>>,
    target: usize,
    settled: usize,
    changed: Option<usize>,
}

impl PageTrack {
    /// Creates a track resting on the first page.
    #[must_use]
    pub fn new(page_width: f64, page_count: usize, damping: f64, settle_ms: u64) -> Self {
        Self {
            page_width: usable_width(page_width),
            page_count,
            damping,
            settle_ms: settle_ms.max(1),
            scroll: 0.0,
            drag_start: None,
            animation: None,
            target: 0,
            settled: 0,
            changed: None,
        }
    }

    /// Width of one page including the spacing after it.
    #[must_use]
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Changes the page width, keeping the target page in place.
    ///
    /// Drags and snaps in flight are dropped.
    pub fn set_page_width(&mut self, page_width: f64) {
        self.page_width = usable_width(page_width);
        self.drag_start = None;
        self.animation = None;
        self.scroll = self.offset_of(self.target);
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Changes the number of pages, moving onto the last page if the current
    /// one no longer exists.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        let last = self.last_index();
        if self.target > last || self.settled > last {
            self.drag_start = None;
            self.animation = None;
            self.target = self.target.min(last);
            self.scroll = self.offset_of(self.target);
            if self.settled != self.target {
                self.settled = self.target;
                self.changed = Some(self.target);
            }
        }
    }

    /// The largest resting scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.offset_of(self.last_index())
    }

    /// The scroll offset to render right now.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.animation.as_ref().map_or(self.scroll, Transition::value)
    }

    /// The page nearest to the rendered scroll offset.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index_at(self.scroll_offset())
    }

    /// The 1-based page number shown in a page indicator.
    ///
    /// This is `ceil(scroll_offset / page_width) + 1`, so the number advances
    /// as soon as the next page starts to come into view. It is clamped to
    /// `1..=page_count`.
    #[must_use]
    pub fn page_number(&self) -> usize {
        self.clamp_position((self.scroll_offset() / self.page_width).ceil()) + 1
    }

    /// The page the last completed snap rested on.
    #[must_use]
    pub fn settled_index(&self) -> usize {
        self.settled
    }

    /// The page the track is resting on or moving to.
    #[must_use]
    pub fn target_index(&self) -> usize {
        self.target
    }

    /// Returns `true` while a drag is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Returns `true` while a snap is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// How far the scroll offset moved since the drag began.
    #[must_use]
    pub fn drag_delta(&self) -> Option<f64> {
        self.drag_start.map(|start| self.scroll - start)
    }

    /// Opens a drag at the rendered offset, stopping any running snap.
    pub fn begin_drag(&mut self) {
        self.interrupt();
        self.drag_start = Some(self.scroll);
    }

    /// Applies the cumulative horizontal finger translation.
    ///
    /// Moving the finger left (negative) scrolls towards later pages.
    pub fn update_drag(&mut self, translation_x: f64) {
        let Some(start) = self.drag_start else {
            return;
        };
        if !translation_x.is_finite() {
            return;
        }
        self.scroll = self.rubber_band(start - translation_x);
        log::trace!("page drag {translation_x:.1} -> scroll {:.1}", self.scroll);
    }

    /// Closes the drag and snaps to a page; returns that page.
    ///
    /// `predicted_x` is the flick's predicted end translation. The snap
    /// target is at most one page away from the page the drag started on.
    pub fn end_drag(&mut self, predicted_x: f64) -> usize {
        let Some(start) = self.drag_start.take() else {
            return self.target;
        };
        let origin = self.index_at(start);
        let travel = if predicted_x.is_finite() {
            predicted_x
        } else {
            start - self.scroll
        };
        let projected = self.clamp_position(((start - travel) / self.page_width).round());
        let target = projected.clamp(origin.saturating_sub(1), origin + 1);
        log::debug!("page drag released: page {origin} -> {target}");
        self.snap_to(target);
        target
    }

    /// Abandons the drag and snaps back to the page it started on.
    pub fn cancel_drag(&mut self) {
        let Some(start) = self.drag_start.take() else {
            return;
        };
        let origin = self.index_at(start);
        self.snap_to(origin);
    }

    /// Moves to `index`, animated or at once. Ends any open drag.
    pub fn scroll_to(&mut self, index: usize, animated: bool) {
        self.drag_start = None;
        self.interrupt();
        let index = index.min(self.last_index());
        if animated {
            self.snap_to(index);
        } else {
            self.target = index;
            self.scroll = self.offset_of(index);
            self.finish();
        }
    }

    /// Advances the running snap to `now_ms`.
    ///
    /// Returns the new page when the track came to rest on a page other than
    /// the previously settled one.
    pub fn tick(&mut self, now_ms: u64) -> Option<usize> {
        if let Some(animation) = self.animation.as_mut() {
            animation.advance(now_ms);
            if animation.is_finished() {
                self.animation = None;
                self.finish();
            }
        }
        self.changed.take()
    }

    /// Takes a page change that happened outside [`PageTrack::tick`], e.g.
    /// an unanimated [`PageTrack::scroll_to`].
    pub(crate) fn take_change(&mut self) -> Option<usize> {
        self.changed.take()
    }

    fn snap_to(&mut self, index: usize) {
        let from = self.scroll_offset();
        let to = self.offset_of(index);
        self.target = index;
        self.scroll = to;
        if from == to {
            self.animation = None;
            self.finish();
        } else {
            self.animation = Some(Transition::new(from).then(to, self.settle_ms, Easing::EaseOut));
        }
    }

    fn finish(&mut self) {
        if self.settled != self.target {
            log::debug!("page changed: {} -> {}", self.settled, self.target);
            self.settled = self.target;
            self.changed = Some(self.target);
        }
    }

    fn interrupt(&mut self) {
        if let Some(animation) = self.animation.take() {
            self.scroll = animation.value();
        }
    }

    fn rubber_band(&self, raw: f64) -> f64 {
        let max = self.max_scroll();
        if raw < 0.0 {
            raw * self.damping
        } else if raw > max {
            max + (raw - max) * self.damping
        } else {
            raw
        }
    }

    fn last_index(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.page_width
    }

    fn index_at(&self, offset: f64) -> usize {
        self.clamp_position((offset / self.page_width).round())
    }

    /// Converts a fractional page position to an index in `0..page_count`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the position is clamped to 0..=last_index before the cast"
    )]
    fn clamp_position(&self, position: f64) -> usize {
        if !position.is_finite() || position <= 0.0 {
            return 0;
        }
        let last = self.last_index();
        if position >= last as f64 {
            last
        } else {
            position as usize
        }
    }
}

fn usable_width(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        1.0
    }
}
