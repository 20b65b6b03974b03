//! # CLI Errors

use thiserror::Error;

use crate::server::ConfigError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI command errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Server or runtime I/O failure
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
