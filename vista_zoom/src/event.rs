// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Intents the engine reports to its host, drained with
/// [`ZoomView::take_events`](crate::ZoomView::take_events).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    /// A vertical drag went far enough and the content has moved out of view.
    /// Reported once per qualifying gesture, after the outward transition.
    DismissRequested,
    /// A pinch was released at or below the fitted size and snapped back.
    Haptic(HapticStyle),
    /// A lone tap (no double tap followed) landed on the content.
    Tapped,
    /// A settle or rebound transition ran to completion.
    Settled,
}

/// Strength of a haptic cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HapticStyle {
    /// A medium impact.
    #[default]
    Medium,
}
