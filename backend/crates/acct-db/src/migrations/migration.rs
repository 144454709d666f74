use crate::Result as DbErrorResult;

use async_trait::async_trait;
use sqlx::SqliteConnection;

/// One reversible schema change.
///
/// `version` is a sortable token (timestamp-derived, `YYYYMMDDHHMMSS`);
/// migrations apply in ascending order and roll back in descending order.
/// Recording which versions have run belongs to the runner.
#[async_trait]
pub trait Migration: Send + Sync {
    fn version(&self) -> i64;

    fn description(&self) -> &str;

    async fn apply(&self, conn: &mut SqliteConnection) -> DbErrorResult<()>;

    /// Exact inverse of [`Migration::apply`]
    async fn rollback(&self, conn: &mut SqliteConnection) -> DbErrorResult<()>;
}
