use crate::{DbError, Result as DbErrorResult};

use acct_core::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the SQLite pool the store and migrations run against.
#[derive(Debug, Clone)]
pub struct PoolBuilder {
    /// `None` means a private in-memory database
    path: Option<PathBuf>,
    max_connections: u32,
    busy_timeout: Duration,
}

impl PoolBuilder {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// In-memory database. Every connection would get its own database, so
    /// the pool is pinned to one long-lived connection.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            max_connections: 1,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn max_connections(mut self, max_connections: u32) -> Self {
        if self.path.is_some() {
            self.max_connections = max_connections.max(1);
        }
        self
    }

    pub fn busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn connect(&self) -> DbErrorResult<SqlitePool> {
        match self.path {
            Some(ref path) => self.connect_file(path).await,
            None => self.connect_memory().await,
        }
    }

    async fn connect_file(&self, path: &Path) -> DbErrorResult<SqlitePool> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(self.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;

        info!(
            "Database pool ready: {} (max {} connections)",
            path.display(),
            self.max_connections
        );
        Ok(pool)
    }

    async fn connect_memory(&self) -> DbErrorResult<SqlitePool> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .busy_timeout(self.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        info!("In-memory database pool ready");
        Ok(pool)
    }
}
