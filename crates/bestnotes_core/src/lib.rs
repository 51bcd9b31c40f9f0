//! Core screen-flow logic for the Best Notes App.
//! This crate is the single source of truth for flow invariants.

pub mod flow;
pub mod logging;
pub mod model;

pub use flow::composer::Composer;
pub use flow::login::{LoginAttempt, LoginForm};
pub use flow::navigation::{NavigationStack, ScreenFrame};
pub use flow::pager::Pager;
pub use flow::session::{
    AppFlow, ComposerView, FlowAction, FlowError, FlowResult, FlowSnapshot, LoginView, PagerView,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::copy::{
    APP_TAGLINE, APP_TITLE, COMPOSER_NAV_TITLE, HOME_WELCOME_MESSAGE, LOGIN_INVALID_MESSAGE,
    LOGIN_NAV_TITLE, ONBOARDING_NAV_TITLE,
};
pub use model::credentials::{validate_credentials, Credentials, PASSWORD_MIN_CHARS};
pub use model::onboarding::{onboarding_deck, CardId, OnboardingCard};
pub use model::screen::Screen;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
