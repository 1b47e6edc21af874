//! Transform command implementation

use std::io::Write;

use crate::cli::args::TransformArgs;
use crate::cli::logging::{emit, log};
use crate::cli::output::format_batch;
use crate::cli::LogLevel;
use crate::space::load_configurations;

use super::load_space;

/// Transform the configurations file and render the batch without printing
pub fn transform_report(args: &TransformArgs) -> Result<String, String> {
    let space = load_space(&args.space)?;
    let configs = load_configurations(&args.configs).map_err(|e| format!("[{}] {e}", e.code()))?;
    for (i, config) in configs.iter().enumerate() {
        space.validate(config).map_err(|e| format!("Configuration {i}: {e}"))?;
    }
    let batch = space.transform(&configs).map_err(|e| format!("Transform failed: {e}"))?;
    format_batch(&space, &batch, args.format)
}

pub fn run_transform(
    args: TransformArgs,
    level: LogLevel,
    out: &mut dyn Write,
) -> Result<(), String> {
    let rendered = transform_report(&args)?;
    log(level, LogLevel::Verbose, &format!("Transformed {}", args.configs.display()));
    emit(level, out, &rendered)
}
