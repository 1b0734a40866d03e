//! Log setup for the CLI. Logs go to stderr so stdout stays clean output.

use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// Install the global subscriber with the given filter directive.
pub fn init(filter: &str) -> CliResult<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| CliError::LogFilter(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| CliError::LogFilter(e.to_string()))
}
