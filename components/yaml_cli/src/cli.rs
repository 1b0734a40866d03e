//! Command-line arguments

use builtins::yaml::ModuleOptions;
use clap::{Parser, Subcommand};

/// Run YAML documents through the runtime's yaml module
#[derive(Debug, Parser)]
#[command(name = "corten-yaml", version)]
pub struct Cli {
    /// Log filter, e.g. `debug` or `builtins=trace`
    #[arg(long, env = "CORTEN_YAML_LOG", default_value = "warn")]
    pub log: String,

    /// Leave the deprecated marshal/unmarshal aliases out of the yaml module
    #[arg(long)]
    pub no_legacy_aliases: bool,

    /// What to do with the input
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Options for the yaml module
    pub fn module_options(&self) -> ModuleOptions {
        ModuleOptions {
            legacy_aliases: !self.no_legacy_aliases,
        }
    }
}

/// Subcommands. Each takes a file path, or `-` for stdin.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Decode a document and print the runtime value
    Decode {
        /// Input file
        path: String,
    },
    /// Decode a document and print it re-encoded in canonical form
    Fmt {
        /// Input file
        path: String,
    },
    /// Decode a document and print it as JSON
    Json {
        /// Input file
        path: String,
    },
}

impl Command {
    /// The input path
    pub fn path(&self) -> &str {
        match self {
            Command::Decode { path } | Command::Fmt { path } | Command::Json { path } => path,
        }
    }
}
