use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "acct-migrate")]
#[command(about = "Apply or roll back the account store schema")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (defaults to ACCT_CONFIG_DIR, then ./.acct)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}
