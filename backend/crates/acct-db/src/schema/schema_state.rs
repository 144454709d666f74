use super::{EMAIL_SHADOW_COLUMN, USERS_TABLE};
use crate::{Result as DbErrorResult, StrategyKind};

use sqlx::{Row, SqliteConnection};

/// What the connected database currently holds for the `users` schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaState {
    Absent,
    Present(StrategyKind),
}

/// Inspect `conn` for the `users` table and work out which uniqueness
/// layout it was created with.
pub async fn schema_state(conn: &mut SqliteConnection) -> DbErrorResult<SchemaState> {
    if !object_exists(conn, "table", USERS_TABLE).await? {
        return Ok(SchemaState::Absent);
    }

    let columns = sqlx::query(&format!("PRAGMA table_info({USERS_TABLE})"))
        .fetch_all(&mut *conn)
        .await?;

    let mut has_shadow = false;
    for row in &columns {
        if row.try_get::<String, _>("name")? == EMAIL_SHADOW_COLUMN {
            has_shadow = true;
        }
    }

    Ok(SchemaState::Present(if has_shadow {
        StrategyKind::ShadowColumn
    } else {
        StrategyKind::ExpressionIndex
    }))
}

/// Check `sqlite_master` for an object of the given type.
pub(crate) async fn object_exists(
    conn: &mut SqliteConnection,
    object_type: &str,
    name: &str,
) -> DbErrorResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name = ?2")
            .bind(object_type)
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;

    Ok(count > 0)
}
