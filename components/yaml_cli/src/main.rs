//! Corten YAML CLI
//!
//! Entry point for the YAML tool. Parses CLI arguments and delegates to the
//! Runtime for execution.

use clap::Parser as ClapParser;
use yaml_cli::{logging, Cli, CliError, Runtime};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let runtime = Runtime::new(cli.module_options());
    match runtime.execute(&cli.command) {
        Ok(output) => print!("{}", output),
        Err(CliError::Io(e)) => {
            eprintln!("Error: Could not read '{}': {}", cli.command.path(), e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
