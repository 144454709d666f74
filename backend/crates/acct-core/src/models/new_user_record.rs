use crate::{Result as CoreErrorResult, validate_email};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Insert payload for a [`crate::UserRecord`].
///
/// Timestamps are optional; when absent the store applies the column default
/// (current time at insertion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserRecord {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl NewUserRecord {
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            name: name.into(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Carry an original creation time (e.g. when importing accounts)
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Write-path validation shared by every store implementation.
    ///
    /// Only the email is checked; the hash and timestamps are opaque to the
    /// store.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        validate_email(&self.email)
    }
}
