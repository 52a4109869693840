// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-phase rebound for flicks released outside the envelope.
//!
//! A released offset past an edge first travels linearly to a compressed
//! overshoot (see [`ReboundCurve`]), then eases back onto the clamped edge.
//! The two phases are plain eased segments with fixed durations rather than a
//! simulated spring.

use kurbo::Vec2;

use crate::animation::{Easing, Pose, Transition};
use crate::{Envelope, ReboundCurve, Timings};

/// A planned rebound: where the flick would land, how far it visibly
/// overshoots, and where it comes to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rebound {
    released: Vec2,
    overshoot: Vec2,
    target: Vec2,
}

impl Rebound {
    /// Plans a rebound for an offset released at `released`.
    ///
    /// Returns `None` when `released` is already inside `envelope`; no
    /// correction is needed then.
    #[must_use]
    pub fn plan(envelope: &Envelope, released: Vec2, curve: ReboundCurve) -> Option<Self> {
        if envelope.contains(released) {
            return None;
        }
        let plan = Self {
            released,
            overshoot: envelope.overshoot(released, curve),
            target: envelope.clamp(released),
        };
        log::debug!(
            "rebound: released {:?}, overshoot {:?}, rest {:?}",
            plan.released,
            plan.overshoot,
            plan.target
        );
        Some(plan)
    }

    /// The offset the flick was heading for.
    #[must_use]
    pub fn released(&self) -> Vec2 {
        self.released
    }

    /// The offset at the end of the first phase.
    #[must_use]
    pub fn overshoot(&self) -> Vec2 {
        self.overshoot
    }

    /// The clamped resting offset.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Builds the two-phase transition starting from the displayed `from` pose.
    ///
    /// The content size is kept and the opacity returns to fully opaque.
    #[must_use]
    pub fn transition(&self, from: Pose, timings: &Timings) -> Transition<Pose> {
        let overshoot = Pose {
            size: from.size,
            offset: self.overshoot,
            opacity: 1.0,
        };
        let rest = Pose {
            offset: self.target,
            ..overshoot
        };
        Transition::new(from)
            .then(overshoot, timings.rebound_phase_ms, Easing::Linear)
            .then(rest, timings.rebound_phase_ms, Easing::EaseOut)
    }
}
