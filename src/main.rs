//! Segregator CLI - watches a directory and routes new files
//!
//! Usage: segregator [--config PATH] [--root DIR] [--home DIR] [--dev DIR] [--test DIR]
//!                   [--once] [--json] [-v...]

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::watch::cmd_watch(&cli)
}
