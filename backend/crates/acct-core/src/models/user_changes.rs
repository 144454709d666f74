use crate::{Result as CoreErrorResult, validate_email};

use serde::{Deserialize, Serialize};

/// Partial update of a [`crate::UserRecord`].
///
/// Fields left as `None` keep their stored value. The store refreshes
/// `updated_at` on every update, including one with no field changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub name: Option<String>,
}

impl UserChanges {
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = Some(password_hash.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        match self.email {
            Some(ref email) => validate_email(email),
            None => Ok(()),
        }
    }
}
