mod args;
mod handlers;

use crate::args::{Cli, Commands};
use bagops_logger::{LevelFilter, Logger};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let mut logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(level);
    if let Some(dir) = cli.log_dir {
        logger = logger.path(dir);
    }
    if cli.log_json {
        logger = logger.json();
    }
    let _logger = logger.init()?;

    match cli.command {
        Commands::Render { out, config, year } => {
            handlers::render(out, config.as_deref(), year)?;
        },
        Commands::Check { config } => handlers::check(config.as_deref())?,
    }

    Ok(())
}
