//! Case-insensitive email uniqueness, expressed two ways.
//!
//! [`ExpressionIndex`] puts a unique index on `lower(email)` directly.
//! [`ShadowColumn`] stores the folded email in its own column and puts a
//! plain unique index on that; the store writes the column on every insert
//! and every email change. Either way the engine performs the check inside
//! the write, so two racing registrations cannot both succeed.

use super::{EMAIL_SHADOW_COLUMN, EMAIL_UNIQUE_INDEX, NOW_SQL, USERS_TABLE};
use crate::{DbError, EngineCapabilities, Result as DbErrorResult};

use acct_core::{EmailIndexPreference, ErrorLocation};

use std::panic::Location;

use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    ExpressionIndex,
    ShadowColumn,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExpressionIndex => "expression_index",
            Self::ShadowColumn => "shadow_column",
        }
    }

    pub fn strategy(&self) -> &'static dyn UniquenessStrategy {
        match self {
            Self::ExpressionIndex => &ExpressionIndex,
            Self::ShadowColumn => &ShadowColumn,
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub trait UniquenessStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn is_supported(&self, capabilities: &EngineCapabilities) -> bool;

    /// Extra column holding the folded email, if this strategy needs one
    fn shadow_column(&self) -> Option<&'static str>;

    /// Expression the uniqueness index is built over
    fn indexed_expression(&self) -> &'static str;

    fn create_table_sql(&self) -> String {
        let shadow = self
            .shadow_column()
            .map(|column| format!("\n    {column} TEXT NOT NULL,"))
            .unwrap_or_default();

        format!(
            "CREATE TABLE {USERS_TABLE} (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    email TEXT NOT NULL,{shadow}
    password_hash TEXT NOT NULL,
    name TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT ({NOW_SQL}),
    updated_at TIMESTAMP NOT NULL DEFAULT ({NOW_SQL})
)"
        )
    }

    /// Issued as its own statement after the table exists
    fn create_index_sql(&self) -> String {
        format!(
            "CREATE UNIQUE INDEX {EMAIL_UNIQUE_INDEX} ON {USERS_TABLE} ({})",
            self.indexed_expression()
        )
    }
}

pub struct ExpressionIndex;

impl UniquenessStrategy for ExpressionIndex {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ExpressionIndex
    }

    fn is_supported(&self, capabilities: &EngineCapabilities) -> bool {
        capabilities.supports_expression_index()
    }

    fn shadow_column(&self) -> Option<&'static str> {
        None
    }

    fn indexed_expression(&self) -> &'static str {
        "lower(email)"
    }
}

pub struct ShadowColumn;

impl UniquenessStrategy for ShadowColumn {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ShadowColumn
    }

    fn is_supported(&self, _capabilities: &EngineCapabilities) -> bool {
        true
    }

    fn shadow_column(&self) -> Option<&'static str> {
        Some(EMAIL_SHADOW_COLUMN)
    }

    fn indexed_expression(&self) -> &'static str {
        EMAIL_SHADOW_COLUMN
    }
}

/// Resolve a configured preference against what the engine can do.
#[track_caller]
pub fn select_strategy(
    preference: EmailIndexPreference,
    capabilities: &EngineCapabilities,
) -> DbErrorResult<StrategyKind> {
    let expression_supported = ExpressionIndex.is_supported(capabilities);

    match preference {
        EmailIndexPreference::ShadowColumn => Ok(StrategyKind::ShadowColumn),
        EmailIndexPreference::ExpressionIndex if expression_supported => {
            Ok(StrategyKind::ExpressionIndex)
        }
        EmailIndexPreference::ExpressionIndex => Err(DbError::ConstraintViolationUnsupported {
            engine_version: capabilities.version.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        EmailIndexPreference::Auto if expression_supported => Ok(StrategyKind::ExpressionIndex),
        EmailIndexPreference::Auto => {
            warn!(
                "SQLite {} lacks expression indexes, falling back to {} shadow column",
                capabilities.version, EMAIL_SHADOW_COLUMN
            );
            Ok(StrategyKind::ShadowColumn)
        }
    }
}
