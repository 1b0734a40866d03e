//! Error types for the CLI

use core_types::ScriptError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// A builtin call failed
    #[error("{0}")]
    Script(#[from] ScriptError),

    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid log filter
    #[error("Invalid log filter: {0}")]
    LogFilter(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
