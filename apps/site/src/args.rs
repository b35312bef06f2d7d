//! Command-line interface of the `bagops` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bagops")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Render and check the BagOps landing page")]
pub(crate) struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Also write logs to `bagops-site.log` in this directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) log_dir: Option<PathBuf>,

    /// Write the log file as JSON lines.
    #[arg(long, global = true, requires = "log_dir")]
    pub(crate) log_json: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Render the landing page to a static HTML file
    Render {
        /// Output file (defaults to `output.path` from the config, `dist/index.html`)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Config file (defaults to `site.toml` in the working directory, if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Copyright year in the footer (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Render in memory and verify content tables, anchors and ids
    Check {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
