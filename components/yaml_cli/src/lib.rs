//! YAML CLI Library
//!
//! Provides the Runtime struct and supporting modules for the `corten-yaml`
//! command, which runs documents through the runtime's `yaml` module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod runtime;

pub use cli::{Cli, Command};
pub use error::{CliError, CliResult};
pub use runtime::Runtime;
