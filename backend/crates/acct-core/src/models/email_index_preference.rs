use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How the case-insensitive email uniqueness index should be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmailIndexPreference {
    /// Expression index when the engine supports it, shadow column otherwise
    #[default]
    Auto,
    /// Unique index on `lower(email)`; fails if the engine cannot express it
    ExpressionIndex,
    /// Normalized shadow column with a plain unique index
    ShadowColumn,
}

impl EmailIndexPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::ExpressionIndex => "expression_index",
            Self::ShadowColumn => "shadow_column",
        }
    }
}

impl FromStr for EmailIndexPreference {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "auto" => Ok(Self::Auto),
            "expression_index" => Ok(Self::ExpressionIndex),
            "shadow_column" => Ok(Self::ShadowColumn),
            _ => Err(CoreError::InvalidEmailIndexPreference {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for EmailIndexPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
