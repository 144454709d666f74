//! acct-migrate - schema runner for the account store
//!
//! ```bash
//! # Create the users table and its email index
//! acct-migrate up
//!
//! # Inspect a database kept somewhere else
//! acct-migrate --config-dir /srv/accounts status
//! ```

use acct_config::Config;
use acct_db::PoolBuilder;
use acct_migrate::{Cli, MigrateError, Result as MigrateErrorResult, execute, logger};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may not be up yet
            if log::max_level() == log::LevelFilter::Off {
                eprintln!("{e}");
            } else {
                error!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> MigrateErrorResult<()> {
    let config = match cli.config_dir {
        Some(ref dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    config.validate()?;

    let log_file = config.log_file_path();
    if let Some(log_dir) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| MigrateError::Io {
            path: log_dir.display().to_string(),
            source: e,
        })?;
    }

    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting acct-migrate v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = PoolBuilder::file(config.database_path())
        .max_connections(config.database.max_connections)
        .busy_timeout(config.database.busy_timeout())
        .connect()
        .await?;

    let outcome = execute(cli.command, &pool, config.schema.email_index).await?;
    info!("{:?} finished: {:?}", cli.command, outcome);

    pool.close().await;
    Ok(())
}
