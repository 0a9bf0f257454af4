use clap::Parser;

use octoview::cli::Cli;
use octoview::config::Config;
use octoview::logging::init_tracing;
use octoview::ui::runtime;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    runtime::run(config, cli.username)
}
