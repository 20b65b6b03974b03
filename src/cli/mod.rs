//! CLI module for databridge
//!
//! Provides the command-line interface:
//! - serve: boot the connector HTTP server
//! - types: print the exposed type catalog

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, types};
pub use errors::{CliError, CliResult};
