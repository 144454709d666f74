use crate::{DbError, Result as DbErrorResult};

use acct_core::ErrorLocation;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use sqlx::SqliteConnection;

/// First SQLite release that accepts expressions in `CREATE INDEX`
const EXPRESSION_INDEX_MIN: SqliteVersion = SqliteVersion::new(3, 9, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqliteVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SqliteVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for SqliteVersion {
    type Err = DbError;

    #[track_caller]
    fn from_str(s: &str) -> DbErrorResult<Self> {
        let numbers: Option<Vec<u32>> = s.trim().split('.').map(|p| p.parse().ok()).collect();

        match numbers.as_deref() {
            Some([major, minor]) => Ok(Self::new(*major, *minor, 0)),
            Some([major, minor, patch, ..]) => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(DbError::Initialization {
                message: format!("Unrecognized SQLite version string: {s:?}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for SqliteVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// What the connected storage engine can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineCapabilities {
    pub version: SqliteVersion,
}

impl EngineCapabilities {
    pub fn new(version: SqliteVersion) -> Self {
        Self { version }
    }

    /// Query the engine behind `conn`.
    pub async fn detect(conn: &mut SqliteConnection) -> DbErrorResult<Self> {
        let version: String = sqlx::query_scalar("SELECT sqlite_version()")
            .fetch_one(&mut *conn)
            .await?;

        Ok(Self::new(version.parse()?))
    }

    pub fn supports_expression_index(&self) -> bool {
        self.version >= EXPRESSION_INDEX_MIN
    }
}
