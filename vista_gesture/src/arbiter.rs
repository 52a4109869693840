// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exclusive pan ownership between a pager and the items it pages through.
//!
//! A pager and the per-item viewport both want to react to pans: the pager
//! pages horizontally, the item pans zoomed content or drives a vertical
//! dismiss. Both sides reference one [`GestureArbiter`] and must claim it
//! before acting on a pan, so at most one of them moves at a time.
//!
//! ```
//! use vista_gesture::{GestureArbiter, GestureOwner};
//!
//! let mut arbiter = GestureArbiter::default();
//! assert!(arbiter.try_claim(GestureOwner::Pager));
//!
//! // While the pager is dragging, item 3 cannot start a dismiss pan.
//! assert!(!arbiter.try_claim(GestureOwner::Item(3)));
//!
//! arbiter.release(GestureOwner::Pager);
//! assert!(arbiter.try_claim(GestureOwner::Item(3)));
//! ```

/// Who currently owns the pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureOwner {
    /// The pager is scrolling between pages.
    Pager,
    /// The item at this index is handling the pan.
    Item(usize),
}

/// The shared "is currently dragging" token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureArbiter {
    owner: Option<GestureOwner>,
}

impl GestureArbiter {
    /// Creates an unclaimed arbiter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the pan for `owner`.
    ///
    /// Succeeds when the arbiter is free or already owned by `owner`.
    pub fn try_claim(&mut self, owner: GestureOwner) -> bool {
        match self.owner {
            None => {
                self.owner = Some(owner);
                true
            }
            Some(current) if current == owner => true,
            Some(current) => {
                log::debug!("pan claim by {owner:?} refused; owned by {current:?}");
                false
            }
        }
    }

    /// Releases the claim if `owner` holds it.
    pub fn release(&mut self, owner: GestureOwner) {
        if self.owner == Some(owner) {
            self.owner = None;
        }
    }

    /// Releases any claim unconditionally (cancellation paths).
    pub fn reset(&mut self) {
        self.owner = None;
    }

    /// The current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<GestureOwner> {
        self.owner
    }

    /// Returns `true` while someone owns the pan.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }

    /// Returns `true` while `owner` holds the pan.
    #[must_use]
    pub fn is_claimed_by(&self, owner: GestureOwner) -> bool {
        self.owner == Some(owner)
    }

    /// Returns `true` while the pager is dragging.
    #[must_use]
    pub fn is_pager_dragging(&self) -> bool {
        self.is_claimed_by(GestureOwner::Pager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_is_reentrant_for_the_owner() {
        let mut arbiter = GestureArbiter::new();
        assert!(arbiter.try_claim(GestureOwner::Item(1)));
        assert!(arbiter.try_claim(GestureOwner::Item(1)));
        assert!(!arbiter.try_claim(GestureOwner::Item(2)));
        assert!(!arbiter.try_claim(GestureOwner::Pager));
        assert!(!arbiter.is_pager_dragging());
    }

    #[test]
    fn release_by_non_owner_is_ignored() {
        let mut arbiter = GestureArbiter::new();
        arbiter.try_claim(GestureOwner::Pager);
        arbiter.release(GestureOwner::Item(0));
        assert!(arbiter.is_pager_dragging());
        arbiter.reset();
        assert!(!arbiter.is_claimed());
        assert_eq!(arbiter.owner(), None);
    }
}
