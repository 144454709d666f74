pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{MigrateError, Result};
pub use runner::{Outcome, execute};
