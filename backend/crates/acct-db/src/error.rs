use acct_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Schema conflict on {object}: {message} {location}")]
    SchemaConflict {
        object: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Constraint violation: {message} {location}")]
    ConstraintViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "SQLite {engine_version} cannot express a unique expression index {location}"
    )]
    ConstraintViolationUnsupported {
        engine_version: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Validation {
        #[from]
        source: CoreError,
    },

    #[error("User not found: {id} {location}")]
    NotFound { id: i64, location: ErrorLocation },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn schema_conflict(object: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaConflict {
            object: object.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }

    pub fn is_schema_conflict(&self) -> bool {
        matches!(self, Self::SchemaConflict { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        // Uniqueness is enforced by the engine; surface it as its own kind
        if let sqlx::Error::Database(ref db_err) = source
            && db_err.is_unique_violation()
        {
            return Self::ConstraintViolation {
                message: db_err.message().to_string(),
                location,
            };
        }

        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
