//! Canonical user-facing strings shared with the UI shell.
//!
//! # Responsibility
//! - Keep the rendered copy in one place so core and shell cannot drift.
//!
//! # Invariants
//! - Strings are exact, including punctuation and emoji.

/// Application title shown on the title screen.
pub const APP_TITLE: &str = "The Best Notes App";

/// Tagline under the application title.
pub const APP_TAGLINE: &str = "Capture ideas. Grow streaks. ✨";

/// Navigation bar title for the onboarding carousel.
pub const ONBOARDING_NAV_TITLE: &str = "Onboarding";

/// Navigation bar title for the login form.
pub const LOGIN_NAV_TITLE: &str = "Log In";

/// Static message surfaced when a login submission is rejected.
pub const LOGIN_INVALID_MESSAGE: &str =
    "Please enter a valid email and a password with 6+ characters.";

/// Body copy on the home screen.
pub const HOME_WELCOME_MESSAGE: &str =
    "You’re logged in. Swipe right from the left edge to go back, or start a note.";

/// Navigation bar title for the note composer modal.
pub const COMPOSER_NAV_TITLE: &str = "New Note";
