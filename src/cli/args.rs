//! CLI argument definitions using clap
//!
//! Commands:
//! - databridge serve --config <path>
//! - databridge types

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// databridge - Data IO protocol connector
#[derive(Parser, Debug)]
#[command(name = "databridge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the connector HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./databridge.json")]
        config: PathBuf,
    },

    /// Print the exposed type catalog and exit
    Types,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
