use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Apply every migration
    Up,

    /// Roll back every migration
    Down,

    /// Roll back, then apply again
    Redo,

    /// Show the current schema layout and engine version
    Status,
}
