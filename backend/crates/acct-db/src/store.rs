use crate::Result as DbErrorResult;

use acct_core::{NewUserRecord, UserChanges, UserRecord};

use async_trait::async_trait;

/// Write and lookup surface shared by every user record store.
///
/// Implementations enforce the folded-email uniqueness atomically with the
/// write and refresh `updated_at` on every update.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a record, returning it with its generated `id`.
    ///
    /// Fails with `ConstraintViolation` if the folded email is taken.
    async fn insert(&self, new: &NewUserRecord) -> DbErrorResult<UserRecord>;

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<UserRecord>>;

    /// Case-insensitive lookup
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>>;

    /// Apply `changes` and set `updated_at` to now.
    async fn update(&self, id: i64, changes: &UserChanges) -> DbErrorResult<UserRecord>;
}
