//! Command-line arguments

use clap::Parser;

use super::DEFAULT_CONFIG_PATH;

/// tinylink - a small URL shortener service
#[derive(Parser, Debug)]
#[command(name = "tinylink")]
#[command(version)]
#[command(about = "A small URL shortener service", long_about = None)]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Write a sample configuration to the config path and exit
    #[arg(long)]
    pub generate_config: bool,
}
