use crate::schema::timestamp::{current_timestamp, format_timestamp};
use crate::schema::{NOW_SQL, USER_COLUMNS, USERS_TABLE};
use crate::{
    DbError, Result as DbErrorResult, SchemaState, StrategyKind, UserStore, schema_state,
};

use acct_core::{ErrorLocation, NewUserRecord, UserChanges, UserRecord, fold_email};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// SQL for one uniqueness layout, built once per repository.
struct Statements {
    insert: String,
    update: String,
    find_by_id: String,
    find_by_email: String,
}

impl Statements {
    fn for_kind(kind: StrategyKind) -> Self {
        let shadow = kind.strategy().shadow_column();

        let (insert_columns, insert_values) = match shadow {
            Some(column) => (format!(", {column}"), ", ?6"),
            None => (String::new(), ""),
        };
        let update_shadow = shadow
            .map(|column| format!(", {column} = COALESCE(?6, {column})"))
            .unwrap_or_default();
        let email_match = shadow.unwrap_or("lower(email)");

        Self {
            insert: format!(
                "INSERT INTO {USERS_TABLE} (email, password_hash, name, created_at, updated_at{insert_columns})
                 VALUES (?1, ?2, ?3, COALESCE(?4, {NOW_SQL}), COALESCE(?5, {NOW_SQL}){insert_values})
                 RETURNING {USER_COLUMNS}"
            ),
            update: format!(
                "UPDATE {USERS_TABLE}
                 SET email = COALESCE(?1, email),
                     password_hash = COALESCE(?2, password_hash),
                     name = COALESCE(?3, name),
                     updated_at = ?4{update_shadow}
                 WHERE id = ?5
                 RETURNING {USER_COLUMNS}"
            ),
            find_by_id: format!("SELECT {USER_COLUMNS} FROM {USERS_TABLE} WHERE id = ?1"),
            find_by_email: format!(
                "SELECT {USER_COLUMNS} FROM {USERS_TABLE} WHERE {email_match} = ?1"
            ),
        }
    }
}

/// [`UserStore`] backed by the SQLite `users` table.
pub struct UserRepository {
    pool: SqlitePool,
    kind: StrategyKind,
    statements: Statements,
}

impl UserRepository {
    /// Repository for a schema created with the given strategy.
    pub fn new(pool: SqlitePool, kind: StrategyKind) -> Self {
        Self {
            pool,
            kind,
            statements: Statements::for_kind(kind),
        }
    }

    /// Open a repository on an already-migrated database, detecting which
    /// uniqueness layout it uses.
    pub async fn connect(pool: SqlitePool) -> DbErrorResult<Self> {
        let mut conn = pool.acquire().await?;

        match schema_state(&mut conn).await? {
            SchemaState::Present(kind) => {
                drop(conn);
                Ok(Self::new(pool, kind))
            }
            SchemaState::Absent => Err(DbError::schema_conflict(
                USERS_TABLE,
                "table does not exist; apply migrations first",
            )),
        }
    }

    pub fn strategy(&self) -> StrategyKind {
        self.kind
    }

    fn shadow_value(&self, email: Option<&str>) -> Option<String> {
        match self.kind {
            StrategyKind::ShadowColumn => email.map(fold_email),
            StrategyKind::ExpressionIndex => None,
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, new: &NewUserRecord) -> DbErrorResult<UserRecord> {
        new.validate()?;

        let mut query = sqlx::query_as::<_, UserRow>(&self.statements.insert)
            .bind(&new.email)
            .bind(&new.password_hash)
            .bind(&new.name)
            .bind(new.created_at.map(format_timestamp))
            .bind(new.updated_at.map(format_timestamp));

        if let Some(folded) = self.shadow_value(Some(new.email.as_str())) {
            query = query.bind(folded);
        }

        let row = query.fetch_one(&self.pool).await?;

        debug!("Inserted user {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(&self.statements.find_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(UserRecord::from))
    }

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(&self.statements.find_by_email)
            .bind(fold_email(email))
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(UserRecord::from))
    }

    async fn update(&self, id: i64, changes: &UserChanges) -> DbErrorResult<UserRecord> {
        changes.validate()?;

        let mut query = sqlx::query_as::<_, UserRow>(&self.statements.update)
            .bind(changes.email.as_deref())
            .bind(changes.password_hash.as_deref())
            .bind(changes.name.as_deref())
            .bind(format_timestamp(current_timestamp()))
            .bind(id);

        if self.kind == StrategyKind::ShadowColumn {
            query = query.bind(self.shadow_value(changes.email.as_deref()));
        }

        let row = query
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Updated user {}", row.id);
        Ok(row.into())
    }
}
