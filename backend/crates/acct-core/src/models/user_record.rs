//! User record - one row of the `users` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted account.
///
/// `id` is generated by the store on insert and never changes. `email` is
/// kept exactly as supplied; uniqueness is checked against its folded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    /// Output of an external hashing algorithm, stored verbatim
    pub password_hash: String,
    pub name: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
