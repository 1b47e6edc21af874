//! Validate command implementation

use crate::cli::args::ValidateArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::space::DesignSpace;

use super::load_space;

/// One-line summary of a parsed space
pub fn format_summary(space: &DesignSpace) -> String {
    format!(
        "  Parameters: {} ({} numeric, {} enumerated)",
        space.len(),
        space.numeric_names().len(),
        space.enum_names().len()
    )
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let space = load_space(&args.space)?;
    if space.is_empty() {
        return Err(format!("{}: design space has no parameters", args.space.display()));
    }

    log(level, LogLevel::Normal, &format!("✓ {} is valid", args.space.display()));
    log(level, LogLevel::Normal, &format_summary(&space));
    for param in space.iter() {
        log(level, LogLevel::Verbose, &format!("    {} ({})", param.name(), param.kind()));
    }
    Ok(())
}
