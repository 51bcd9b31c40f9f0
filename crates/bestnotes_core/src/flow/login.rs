//! Login form state and submission gate.
//!
//! # Responsibility
//! - Hold the typed credential pair and the error-display flag.
//! - Decide, on each submission attempt, whether the flow may advance.
//!
//! # Invariants
//! - Validity is recomputed on every read, never cached.
//! - Rejected submissions set the error flag and change nothing else; the
//!   user may retry indefinitely.
//! - Field contents never reach log output.

use crate::model::credentials::Credentials;
use log::info;

/// Outcome of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAttempt {
    /// Credentials passed the gate; the flow may transition to Home.
    Permitted,
    /// Credentials failed the gate; the error message is now visible.
    Rejected,
}

/// Per-appearance state of the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    credentials: Credentials,
    show_error: bool,
}

impl LoginForm {
    /// Creates an empty form with the error message hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the email field with the latest typed contents.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    /// Replaces the password field with the latest typed contents.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    pub fn email(&self) -> &str {
        &self.credentials.email
    }

    pub fn password(&self) -> &str {
        &self.credentials.password
    }

    /// Derived validity of the current field contents.
    pub fn is_valid(&self) -> bool {
        self.credentials.is_valid()
    }

    /// Whether the static error message is currently visible.
    pub fn shows_error(&self) -> bool {
        self.show_error
    }

    /// Attempts a submission against the current field contents.
    ///
    /// # Contract
    /// - Valid pair: clears the error flag, returns [`LoginAttempt::Permitted`].
    /// - Invalid pair: sets the error flag, returns [`LoginAttempt::Rejected`]
    ///   and performs no other change.
    pub fn submit(&mut self) -> LoginAttempt {
        if self.is_valid() {
            self.show_error = false;
            LoginAttempt::Permitted
        } else {
            self.show_error = true;
            LoginAttempt::Rejected
        }
    }

    /// "Forgot password?" has no handler; it stays a visible no-op that
    /// only leaves a diagnostic trace.
    pub fn forgot_password(&self) {
        info!("event=forgot_password module=flow status=noop");
    }
}
