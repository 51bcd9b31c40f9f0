//! Credential pair and the login validation rule.
//!
//! # Responsibility
//! - Hold the email/password pair typed into the login form.
//! - Provide the single validity rule gating the Login → Home transition.
//!
//! # Invariants
//! - Credentials are never persisted, transmitted or written to logs.
//! - `validate_credentials` is total: any pair of strings yields a bool.

use serde::{Deserialize, Serialize};

/// Minimum accepted password length, counted in characters.
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Email/password pair held by the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Applies [`validate_credentials`] to the held pair.
    pub fn is_valid(&self) -> bool {
        validate_credentials(&self.email, &self.password)
    }
}

/// Returns whether a credential pair may pass the login gate.
///
/// # Contract
/// - `email` must contain the `@` character.
/// - `password` must be at least [`PASSWORD_MIN_CHARS`] characters long,
///   counted in Unicode scalar values rather than bytes, so multi-byte
///   input is measured the way the user typed it.
/// - Never panics; empty inputs simply fail the rule.
pub fn validate_credentials(email: &str, password: &str) -> bool {
    email.contains('@') && password.chars().count() >= PASSWORD_MIN_CHARS
}
