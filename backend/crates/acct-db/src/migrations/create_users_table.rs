use crate::migrations::migration::Migration;
use crate::schema::schema_state::object_exists;
use crate::schema::{EMAIL_UNIQUE_INDEX, USERS_TABLE};
use crate::{DbError, EngineCapabilities, Result as DbErrorResult, select_strategy};

use acct_core::EmailIndexPreference;

use async_trait::async_trait;
use log::info;
use sqlx::SqliteConnection;

pub const CREATE_USERS_VERSION: i64 = 20170826120000;

/// Creates the `users` table and its case-insensitive email index.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateUsersTable {
    preference: EmailIndexPreference,
}

impl CreateUsersTable {
    pub fn new(preference: EmailIndexPreference) -> Self {
        Self { preference }
    }

    pub fn preference(&self) -> EmailIndexPreference {
        self.preference
    }

    async fn ensure_absent(conn: &mut SqliteConnection) -> DbErrorResult<()> {
        if object_exists(conn, "table", USERS_TABLE).await? {
            return Err(DbError::schema_conflict(USERS_TABLE, "table already exists"));
        }

        if object_exists(conn, "index", EMAIL_UNIQUE_INDEX).await? {
            return Err(DbError::schema_conflict(EMAIL_UNIQUE_INDEX, "index already exists"));
        }

        Ok(())
    }
}

#[async_trait]
impl Migration for CreateUsersTable {
    fn version(&self) -> i64 {
        CREATE_USERS_VERSION
    }

    fn description(&self) -> &str {
        "create_users"
    }

    async fn apply(&self, conn: &mut SqliteConnection) -> DbErrorResult<()> {
        let capabilities = EngineCapabilities::detect(conn).await?;
        let kind = select_strategy(self.preference, &capabilities)?;
        let strategy = kind.strategy();

        Self::ensure_absent(conn).await?;

        // Table first: the index references its columns
        sqlx::query(&strategy.create_table_sql())
            .execute(&mut *conn)
            .await?;
        sqlx::query(&strategy.create_index_sql())
            .execute(&mut *conn)
            .await?;

        info!(
            "Created {} with {} ({}) on SQLite {}",
            USERS_TABLE, EMAIL_UNIQUE_INDEX, kind, capabilities.version
        );
        Ok(())
    }

    async fn rollback(&self, conn: &mut SqliteConnection) -> DbErrorResult<()> {
        if !object_exists(conn, "table", USERS_TABLE).await? {
            return Err(DbError::schema_conflict(USERS_TABLE, "table does not exist"));
        }

        // DROP TABLE also clears the table's sqlite_sequence row
        sqlx::query(&format!("DROP INDEX IF EXISTS {EMAIL_UNIQUE_INDEX}"))
            .execute(&mut *conn)
            .await?;
        sqlx::query(&format!("DROP TABLE {USERS_TABLE}"))
            .execute(&mut *conn)
            .await?;

        info!("Dropped {} and {}", EMAIL_UNIQUE_INDEX, USERS_TABLE);
        Ok(())
    }
}
