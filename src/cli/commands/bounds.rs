//! Bounds command implementation

use std::io::Write;

use crate::cli::args::BoundsArgs;
use crate::cli::logging::emit;
use crate::cli::output::format_bounds;
use crate::cli::LogLevel;

use super::load_space;

pub fn run_bounds(args: BoundsArgs, level: LogLevel, out: &mut dyn Write) -> Result<(), String> {
    let space = load_space(&args.space)?;
    let rendered = format_bounds(&space, args.format)?;
    emit(level, out, &rendered)
}
