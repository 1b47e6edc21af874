//! Espacio CLI
//!
//! Command line front end for design space files.
//!
//! # Usage
//!
//! ```bash
//! # Draw 8 reproducible configurations
//! espacio sample space.yaml -n 8 --seed 42
//!
//! # Validate a space file
//! espacio validate space.yaml
//!
//! # Show optimization-space bounds and flags
//! espacio bounds space.yaml --format json
//!
//! # Map raw configurations into optimization space
//! espacio transform space.yaml points.json
//! ```

use clap::Parser;
use espacio::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
