//! Sample command implementation

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::args::SampleArgs;
use crate::cli::logging::{emit, log};
use crate::cli::output::format_configurations;
use crate::cli::LogLevel;
use crate::space::Configuration;

use super::load_space;

/// Draw configurations and render them without printing
pub fn sample_report(args: &SampleArgs) -> Result<(Vec<Configuration>, String), String> {
    let space = load_space(&args.space)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let configs = space.sample(args.num, &mut rng).map_err(|e| format!("Sampling failed: {e}"))?;
    let rendered = format_configurations(&space, &configs, args.format)?;
    Ok((configs, rendered))
}

pub fn run_sample(args: SampleArgs, level: LogLevel, out: &mut dyn Write) -> Result<(), String> {
    let (configs, rendered) = sample_report(&args)?;
    log(
        level,
        LogLevel::Verbose,
        &format!("Sampled {} configuration(s) from {}", configs.len(), args.space.display()),
    );
    emit(level, out, &rendered)
}
