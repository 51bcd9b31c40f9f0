//! Screen enumeration for stack navigation.
//!
//! # Invariants
//! - Wire and log labels are stable snake_case strings.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One navigable full-page UI state.
///
/// The modal composer is a sub-state of [`Screen::Home`], not a screen of
/// its own, so it does not appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Entry screen with the two outgoing flow choices.
    Title,
    /// Paged onboarding carousel.
    Onboarding,
    /// Credential form gating access to Home.
    Login,
    /// Deepest screen in the flow; hosts the composer modal.
    Home,
}

impl Screen {
    /// Stable label used in log events and response envelopes.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Onboarding => "onboarding",
            Self::Login => "login",
            Self::Home => "home",
        }
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
