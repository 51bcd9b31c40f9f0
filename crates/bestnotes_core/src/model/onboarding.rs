//! Onboarding card deck.
//!
//! # Responsibility
//! - Define the card shape shown by the onboarding carousel.
//! - Build the fixed four-card deck exactly once per process.
//!
//! # Invariants
//! - The deck is immutable after construction; callers only borrow it.
//! - Card ids are stable for the process lifetime and unique within the deck.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an onboarding card.
pub type CardId = Uuid;

/// One page of the onboarding carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingCard {
    /// Generated at deck build; used by list-rendering UI shells.
    pub id: CardId,
    pub title: String,
    pub subtitle: String,
    pub emoji: String,
}

impl OnboardingCard {
    fn new(title: &str, subtitle: &str, emoji: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

static ONBOARDING_DECK: Lazy<Vec<OnboardingCard>> = Lazy::new(|| {
    vec![
        OnboardingCard::new(
            "Welcome to The Best Notes App",
            "A simple, friendly space to capture ideas.",
            "✨",
        ),
        OnboardingCard::new("Stay Organized", "Tag and color-code your notes.", "🗂️"),
        OnboardingCard::new("Sync Everywhere", "Your ideas on all devices.", "☁️"),
        OnboardingCard::new("Build a Streak", "Write a little every day.", "🔥"),
    ]
});

/// Borrows the fixed onboarding deck in display order.
pub fn onboarding_deck() -> &'static [OnboardingCard] {
    ONBOARDING_DECK.as_slice()
}
