//! Page-index controller for the onboarding carousel.
//!
//! # Invariants
//! - `index` always stays within `[0, card_count - 1]`.
//! - Moves past either edge are absorbed silently; boundary taps are part of
//!   the interaction model, not errors.

use crate::model::onboarding::{onboarding_deck, OnboardingCard};

/// Clamped page index over the fixed onboarding deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    card_count: usize,
}

impl Pager {
    /// Creates a pager positioned on the first card.
    pub fn new() -> Self {
        Self {
            index: 0,
            card_count: onboarding_deck().len(),
        }
    }

    /// Advances one card; no-op on the last card.
    pub fn next(&mut self) {
        if self.index + 1 < self.card_count {
            self.index += 1;
        }
    }

    /// Steps back one card; no-op on the first card.
    pub fn back(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Borrows the card under the current index.
    pub fn card(&self) -> &'static OnboardingCard {
        &onboarding_deck()[self.index]
    }

    /// True on the first card; the Back button is hidden here.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// True on the last card; Next is replaced by the terminal action here.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.card_count
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
