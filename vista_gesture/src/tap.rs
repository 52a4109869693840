// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single/double tap disambiguation.
//!
//! The single-tap recognizer is configured to require failure of the
//! double-tap recognizer: a lone tap is only reported once the double-tap
//! window has elapsed on the host clock. The host drives that clock by
//! calling [`TapRecognizer::poll`] (for example from a timer armed at
//! [`TapRecognizer::next_deadline`]), independently of rendering frames.
//!
//! ```
//! use kurbo::Point;
//! use vista_gesture::{GestureEvent, TapRecognizer};
//!
//! let mut taps = TapRecognizer::default();
//!
//! taps.touch_down(0);
//! assert!(taps.touch_up(Point::new(5.0, 5.0), 80).is_empty());
//! // Nothing fires until the double-tap window is over.
//! assert_eq!(taps.poll(200), None);
//! assert_eq!(taps.poll(331), Some(GestureEvent::SingleTap));
//!
//! taps.touch_down(1_000);
//! taps.touch_up(Point::new(5.0, 5.0), 1_060);
//! taps.touch_down(1_150);
//! let events = taps.touch_up(Point::new(6.0, 5.0), 1_200);
//! assert_eq!(events[0], GestureEvent::DoubleTap { point: Point::new(6.0, 5.0) });
//! assert_eq!(taps.poll(2_000), None);
//! ```

use kurbo::Point;

use crate::{GestureEvent, GestureEvents};

/// How the single-tap recognizer relates to the double-tap recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SingleTapPolicy {
    /// Single taps wait for the double-tap recognizer to fail.
    #[default]
    RequireDoubleTapFailure,
    /// Single taps fire immediately; a double tap reports both.
    Immediate,
}

/// Timing for [`TapRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TapConfig {
    /// Maximum gap between the first tap's release and the second tap's release.
    pub double_tap_window_ms: u64,
    /// Touches held longer than this are not taps at all.
    pub max_tap_duration_ms: u64,
    /// Relationship between single and double taps.
    pub single_tap: SingleTapPolicy,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            double_tap_window_ms: 250,
            max_tap_duration_ms: 250,
            single_tap: SingleTapPolicy::default(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct PendingTap {
    up_ms: u64,
}

/// Recognizes single and double taps from touch down/up pairs.
#[derive(Clone, Debug, Default)]
pub struct TapRecognizer {
    config: TapConfig,
    down_ms: Option<u64>,
    pending: Option<PendingTap>,
}

impl TapRecognizer {
    /// Creates a recognizer with the given timing.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            down_ms: None,
            pending: None,
        }
    }

    /// Returns the recognizer timing.
    #[must_use]
    pub fn config(&self) -> TapConfig {
        self.config
    }

    /// A finger touched down at `now_ms`.
    pub fn touch_down(&mut self, now_ms: u64) {
        self.down_ms = Some(now_ms);
    }

    /// The finger lifted at `point` (content-local coordinates) at `now_ms`.
    ///
    /// May report a single tap whose window expired before this touch, a
    /// double tap, or (with [`SingleTapPolicy::Immediate`]) a single tap.
    pub fn touch_up(&mut self, point: Point, now_ms: u64) -> GestureEvents {
        let mut out = GestureEvents::new();
        if let Some(event) = self.poll(now_ms) {
            out.push(event);
        }
        let Some(down_ms) = self.down_ms.take() else {
            return out;
        };
        if now_ms.saturating_sub(down_ms) > self.config.max_tap_duration_ms {
            log::trace!("touch held too long to count as a tap");
            return out;
        }
        if self.pending.take().is_some() {
            out.push(GestureEvent::DoubleTap { point });
            return out;
        }
        if self.config.single_tap == SingleTapPolicy::Immediate {
            out.push(GestureEvent::SingleTap);
        }
        self.pending = Some(PendingTap { up_ms: now_ms });
        out
    }

    /// The touch sequence was cancelled; nothing pending will fire.
    pub fn touch_cancelled(&mut self) {
        self.down_ms = None;
        self.pending = None;
    }

    /// Fires a deferred single tap once the double-tap window has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<GestureEvent> {
        let pending = self.pending?;
        if now_ms.saturating_sub(pending.up_ms) <= self.config.double_tap_window_ms {
            return None;
        }
        self.pending = None;
        match self.config.single_tap {
            SingleTapPolicy::RequireDoubleTapFailure => Some(GestureEvent::SingleTap),
            SingleTapPolicy::Immediate => None,
        }
    }

    /// When the host should next call [`TapRecognizer::poll`], if anything is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending
            .map(|p| p.up_ms.saturating_add(self.config.double_tap_window_ms + 1))
    }
}
