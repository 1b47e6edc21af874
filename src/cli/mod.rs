//! CLI module for espacio
//!
//! Argument parsing, output formatting and command handlers for the
//! `espacio` binary.

mod args;
mod commands;
mod logging;
mod output;

pub use args::{
    parse_args, BoundsArgs, Cli, Command, OutputFormat, SampleArgs, TransformArgs, ValidateArgs,
};
pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};
