use clap::Parser;
use std::path::PathBuf;

/// Browse GitHub profiles and followers from the terminal.
#[derive(Debug, Parser)]
#[command(name = "octoview", version, about)]
pub struct Cli {
    /// Open this user's profile directly instead of the search view.
    pub username: Option<String>,

    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
