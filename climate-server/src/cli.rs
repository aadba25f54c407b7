use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI struct.
///
/// Every flag is optional; anything not given falls back to the config file,
/// then to the built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "climate-server", version, about = "Climate observation API server")]
pub struct Cli {
    /// Path to the SQLite database file.
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Address to bind, e.g. "127.0.0.1:5000".
    #[arg(long)]
    pub bind: Option<String>,

    /// Explicit config file path; defaults to the platform config directory.
    #[arg(long)]
    pub config: Option<PathBuf>,
}
