//! Domain model for the screen flow.
//!
//! # Responsibility
//! - Define the canonical data structures used by flow logic.
//! - Hold the fixed onboarding deck and canonical user-facing strings.
//!
//! # Invariants
//! - Every entity is transient and in-memory; nothing here persists state.
//! - The onboarding deck is built once per process and never mutated.

pub mod copy;
pub mod credentials;
pub mod onboarding;
pub mod screen;
