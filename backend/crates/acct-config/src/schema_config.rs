use acct_core::EmailIndexPreference;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// How the case-insensitive email index is built
    pub email_index: EmailIndexPreference,
}
