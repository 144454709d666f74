//! Persisted layout of the `users` table and its uniqueness index.

pub mod engine_capabilities;
pub mod schema_state;
pub mod timestamp;
pub mod uniqueness_strategy;

pub const USERS_TABLE: &str = "users";
pub const EMAIL_UNIQUE_INDEX: &str = "user_email_unique_index";
/// Folded copy of `email`, present only under the shadow-column strategy
pub const EMAIL_SHADOW_COLUMN: &str = "email_normalized";

/// SQL expression for "now" in the persisted timestamp format.
pub const NOW_SQL: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

/// Columns returned by every read, in [`acct_core::UserRecord`] order
pub(crate) const USER_COLUMNS: &str = "id, email, password_hash, name, created_at, updated_at";
