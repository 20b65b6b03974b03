//! CLI command implementations

use std::path::Path;

use crate::catalog::catalog;
use crate::observability::{Logger, Severity};
use crate::server::{HttpServer, ServerConfig};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(&config),
        Command::Types => types(),
    }
}

/// Boot the HTTP server. A missing config file is not an error: the
/// defaults give a runnable development setup.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        ServerConfig::load(config_path)?
    } else {
        Logger::log(
            Severity::Warn,
            "config_defaulted",
            &[("path", &config_path.display().to_string())],
        );
        ServerConfig::default()
    };

    let server = HttpServer::with_config(config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Print the exposed type names as JSON
pub fn types() -> CliResult<()> {
    let names = catalog().type_names();
    println!(
        "{}",
        serde_json::to_string_pretty(&names).unwrap_or_else(|_| "[]".to_string())
    );
    Ok(())
}
