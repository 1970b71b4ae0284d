use clap::Args;
use std::path::PathBuf;

/// Command-line options shared by every binary that reads the settings.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Path to a TOML configuration file (defaults to ./config.toml when present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
