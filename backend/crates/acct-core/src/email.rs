//! Case folding for the one-account-per-email rule.
//!
//! Folding is ASCII-only and locale-independent, matching SQLite's built-in
//! `lower()`. Every uniqueness check (expression index, shadow column and the
//! in-memory store) must agree on this rule, so non-ASCII letters pass
//! through unchanged.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Fold an email address to the form its uniqueness is checked against.
pub fn fold_email(email: &str) -> String {
    email.to_ascii_lowercase()
}

/// Reject emails the store refuses to persist.
///
/// The schema itself allows an empty string, which would claim a single
/// "empty" uniqueness slot. The write path closes that gap here.
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    if email.is_empty() {
        return Err(CoreError::Validation {
            message: String::from("email must not be empty"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
