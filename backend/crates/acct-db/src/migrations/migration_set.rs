use crate::migrations::migration::Migration;
use crate::{CreateUsersTable, DbError, Result as DbErrorResult};

use acct_core::{EmailIndexPreference, ErrorLocation};

use std::panic::Location;

use log::info;
use sqlx::SqlitePool;

/// Migrations in total version order.
pub struct Migrations {
    migrations: Vec<Box<dyn Migration>>,
}

impl Migrations {
    /// Order `migrations` by version, rejecting duplicate versions.
    #[track_caller]
    pub fn new(mut migrations: Vec<Box<dyn Migration>>) -> DbErrorResult<Self> {
        migrations.sort_by_key(|m| m.version());

        if let Some(pair) = migrations
            .windows(2)
            .find(|pair| pair[0].version() == pair[1].version())
        {
            return Err(DbError::Migration {
                message: format!(
                    "duplicate version {} ({} and {})",
                    pair[0].version(),
                    pair[0].description(),
                    pair[1].description()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { migrations })
    }

    /// The schema this crate ships.
    pub fn standard(preference: EmailIndexPreference) -> Self {
        Self {
            migrations: vec![Box::new(CreateUsersTable::new(preference))],
        }
    }

    pub fn versions(&self) -> Vec<i64> {
        self.migrations.iter().map(|m| m.version()).collect()
    }

    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    /// Apply every migration in ascending order, each in its own transaction.
    pub async fn apply_all(&self, pool: &SqlitePool) -> DbErrorResult<usize> {
        for migration in &self.migrations {
            let mut tx = pool.begin().await?;
            migration.apply(&mut *tx).await?;
            tx.commit().await?;

            info!(
                "Applied migration {} {}",
                migration.version(),
                migration.description()
            );
        }

        Ok(self.migrations.len())
    }

    /// Roll back every migration in descending order, each in its own
    /// transaction.
    pub async fn rollback_all(&self, pool: &SqlitePool) -> DbErrorResult<usize> {
        for migration in self.migrations.iter().rev() {
            let mut tx = pool.begin().await?;
            migration.rollback(&mut *tx).await?;
            tx.commit().await?;

            info!(
                "Rolled back migration {} {}",
                migration.version(),
                migration.description()
            );
        }

        Ok(self.migrations.len())
    }
}
