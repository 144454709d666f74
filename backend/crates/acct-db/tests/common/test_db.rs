#![allow(dead_code)]

use acct_core::EmailIndexPreference;
use acct_db::{Migrations, PoolBuilder, StrategyKind, UserRepository};

use std::path::Path;

use sqlx::SqlitePool;

/// Both uniqueness layouts, for tests that must hold under either
pub const ALL_PREFERENCES: [EmailIndexPreference; 2] = [
    EmailIndexPreference::ExpressionIndex,
    EmailIndexPreference::ShadowColumn,
];

/// Creates an in-memory SQLite pool with no schema
pub async fn create_empty_pool() -> SqlitePool {
    PoolBuilder::in_memory()
        .connect()
        .await
        .expect("Failed to create test pool")
}

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool(preference: EmailIndexPreference) -> SqlitePool {
    let pool = create_empty_pool().await;

    Migrations::standard(preference)
        .apply_all(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a migrated on-disk pool with several connections
pub async fn create_file_pool(dir: &Path, preference: EmailIndexPreference) -> SqlitePool {
    let pool = PoolBuilder::file(dir.join("accounts.db"))
        .max_connections(8)
        .connect()
        .await
        .expect("Failed to create file pool");

    Migrations::standard(preference)
        .apply_all(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Migrated in-memory repository for the given preference
pub async fn create_test_repository(preference: EmailIndexPreference) -> UserRepository {
    let pool = create_test_pool(preference).await;
    UserRepository::connect(pool)
        .await
        .expect("Failed to open repository")
}

pub fn expected_kind(preference: EmailIndexPreference) -> StrategyKind {
    match preference {
        EmailIndexPreference::ShadowColumn => StrategyKind::ShadowColumn,
        _ => StrategyKind::ExpressionIndex,
    }
}

/// Names of every object in `sqlite_master` attached to `table`
pub async fn schema_objects(pool: &SqlitePool, table: &str) -> Vec<String> {
    sqlx::query_scalar("SELECT name FROM sqlite_master WHERE tbl_name = ?1 ORDER BY name")
        .bind(table)
        .fetch_all(pool)
        .await
        .expect("Failed to read sqlite_master")
}
