//! CLI command implementations

mod bounds;
mod sample;
mod transform;
mod validate;

#[cfg(test)]
mod tests;

use crate::cli::args::{Cli, Command};
use crate::cli::LogLevel;
use crate::space::DesignSpace;
use std::path::Path;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);
    let mut stdout = std::io::stdout();

    match cli.command {
        Command::Sample(args) => sample::run_sample(args, log_level, &mut stdout),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Bounds(args) => bounds::run_bounds(args, log_level, &mut stdout),
        Command::Transform(args) => transform::run_transform(args, log_level, &mut stdout),
    }
}

fn load_space(path: &Path) -> Result<DesignSpace, String> {
    DesignSpace::load(path).map_err(|e| format!("[{}] {e}", e.code()))
}
