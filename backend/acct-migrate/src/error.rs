use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("Config error: {0}")]
    Config(#[from] acct_config::ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] acct_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to create {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MigrateError>;
