// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based transitions driven by host timestamps.
//!
//! A [`Transition`] is a chain of eased segments. It does not start when it
//! is built: the first [`Transition::advance`] call pins the start time, so
//! segment durations are measured from the first frame that samples them.
//! Superseding a transition is done by replacing it; there is no separate
//! cancellation.

use kurbo::{Size, Vec2};
use smallvec::SmallVec;

/// Progress curve for one segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Fast start, gentle stop.
    #[default]
    EaseOut,
    /// Gentle start and stop.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

/// Values a [`Transition`] can interpolate.
pub trait Interpolate: Copy {
    /// The value at progress `t` between `self` (0) and `to` (1).
    #[must_use]
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Vec2 {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(
            Interpolate::lerp(self.x, to.x, t),
            Interpolate::lerp(self.y, to.y, t),
        )
    }
}

impl Interpolate for Size {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(
            Interpolate::lerp(self.width, to.width, t),
            Interpolate::lerp(self.height, to.height, t),
        )
    }
}

/// Everything the engine animates at once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Displayed content size.
    pub size: Size,
    /// Content offset from its resting origin.
    pub offset: Vec2,
    /// Background opacity.
    pub opacity: f64,
}

impl Interpolate for Pose {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            size: Interpolate::lerp(self.size, to.size, t),
            offset: Interpolate::lerp(self.offset, to.offset, t),
            opacity: Interpolate::lerp(self.opacity, to.opacity, t),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Segment<T> {
    to: T,
    duration_ms: u64,
    easing: Easing,
}

/// A chain of eased segments from a starting value.
#[derive(Clone, Debug)]
pub struct Transition<T: Interpolate> {
    from: T,
    segments: SmallVec<[Segment<T>; 2]>,
    index: usize,
    segment_start_ms: Option<u64>,
    current: T,
}

impl<T: Interpolate> Transition<T> {
    /// Starts a chain at `from`.
    #[must_use]
    pub fn new(from: T) -> Self {
        Self {
            from,
            segments: SmallVec::new(),
            index: 0,
            segment_start_ms: None,
            current: from,
        }
    }

    /// Appends a segment to `to` lasting `duration_ms` (at least 1 ms).
    #[must_use]
    pub fn then(mut self, to: T, duration_ms: u64, easing: Easing) -> Self {
        self.segments.push(Segment {
            to,
            duration_ms: duration_ms.max(1),
            easing,
        });
        self
    }

    /// The value the chain ends on.
    #[must_use]
    pub fn target(&self) -> T {
        self.segments.last().map_or(self.from, |s| s.to)
    }

    /// The most recently sampled value.
    #[must_use]
    pub fn value(&self) -> T {
        self.current
    }

    /// Index of the segment currently running.
    #[must_use]
    pub fn segment(&self) -> usize {
        self.index
    }

    /// Returns `true` once every segment has run to completion.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.segments.len()
    }

    /// Samples the chain at `now_ms` and returns the value.
    ///
    /// Timestamps earlier than the previous sample are treated as no time
    /// having passed.
    pub fn advance(&mut self, now_ms: u64) -> T {
        let mut start = *self.segment_start_ms.get_or_insert(now_ms);
        while let Some(segment) = self.segments.get(self.index).copied() {
            let elapsed = now_ms.saturating_sub(start);
            if elapsed < segment.duration_ms {
                let t = elapsed as f64 / segment.duration_ms as f64;
                self.current = self.from.lerp(segment.to, segment.easing.apply(t));
                return self.current;
            }
            start = start.saturating_add(segment.duration_ms);
            self.segment_start_ms = Some(start);
            self.from = segment.to;
            self.current = segment.to;
            self.index += 1;
        }
        self.current
    }
}
