use crate::{Commands, Result as MigrateErrorResult};

use acct_core::EmailIndexPreference;
use acct_db::{DbError, EngineCapabilities, Migrations, SchemaState, SqliteVersion, schema_state};

use log::info;
use sqlx::SqlitePool;

/// What a command did to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied(usize),
    RolledBack(usize),
    Redone(usize),
    Status {
        state: SchemaState,
        engine: SqliteVersion,
    },
}

/// Run `command` against `pool`, building the users schema with
/// `preference` where a command creates it.
pub async fn execute(
    command: Commands,
    pool: &SqlitePool,
    preference: EmailIndexPreference,
) -> MigrateErrorResult<Outcome> {
    let migrations = Migrations::standard(preference);

    let outcome = match command {
        Commands::Up => Outcome::Applied(migrations.apply_all(pool).await?),
        Commands::Down => Outcome::RolledBack(migrations.rollback_all(pool).await?),
        Commands::Redo => {
            migrations.rollback_all(pool).await?;
            Outcome::Redone(migrations.apply_all(pool).await?)
        }
        Commands::Status => {
            let mut conn = pool.acquire().await.map_err(DbError::from)?;
            let engine = EngineCapabilities::detect(&mut conn).await?.version;
            let state = schema_state(&mut conn).await?;

            match state {
                SchemaState::Absent => info!("SQLite {}: users schema absent", engine),
                SchemaState::Present(kind) => {
                    info!("SQLite {}: users schema present ({})", engine, kind)
                }
            }

            Outcome::Status { state, engine }
        }
    };

    Ok(outcome)
}
