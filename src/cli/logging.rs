//! Logging utilities for CLI output

use std::io::Write;

use tracing_subscriber::EnvFilter;

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Default tracing directive when `RUST_LOG` is unset
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "error",
            LogLevel::Normal => "warn",
            LogLevel::Verbose => "espacio=debug",
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

/// Write a command result to `out` unless the level is quiet
pub fn emit(level: LogLevel, out: &mut dyn Write, rendered: &str) -> Result<(), String> {
    if level == LogLevel::Quiet {
        return Ok(());
    }
    writeln!(out, "{rendered}").map_err(|e| format!("Failed to write output: {e}"))
}

/// Install the stderr tracing subscriber; `RUST_LOG` overrides `level`
pub fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));
    // A subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Normal);
        assert_eq!(LogLevel::from_flags(true, false), LogLevel::Verbose);
        // Quiet wins over verbose
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Quiet);
    }

    #[test]
    fn test_emit_respects_quiet() {
        let mut out = Vec::new();
        emit(LogLevel::Quiet, &mut out, "hidden").unwrap();
        assert!(out.is_empty());

        emit(LogLevel::Normal, &mut out, "shown").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "shown\n");
    }

    #[test]
    fn test_directives_parse() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert!(level.directive().parse::<tracing_subscriber::filter::Directive>().is_ok());
        }
    }
}
