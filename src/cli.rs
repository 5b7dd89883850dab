use std::path::PathBuf;

use clap::Parser;
use segregator::Config;

/// Segregator - moves new jar and xml files into dev or test directories
#[derive(Parser, Debug)]
#[command(name = "segregator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./segregator.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base directory for HOME, DEV and TEST defaults
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Watched directory
    #[arg(long)]
    pub home: Option<PathBuf>,

    /// Destination for even-hour jars and xml files
    #[arg(long)]
    pub dev: Option<PathBuf>,

    /// Destination for odd-hour jars
    #[arg(long)]
    pub test: Option<PathBuf>,

    /// Sweep the watched directory once and exit
    #[arg(long)]
    pub once: bool,

    /// Print events as NDJSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Directory flags as the highest-priority config layer.
    pub fn overrides(&self) -> Config {
        Config {
            root: self.root.clone(),
            home: self.home.clone(),
            dev: self.dev.clone(),
            test: self.test.clone(),
        }
    }
}
