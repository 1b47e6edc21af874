//! CLI argument types

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Espacio: typed hyperparameter design spaces
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "espacio")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Sample, inspect and transform Bayesian-optimization design spaces")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Draw random configurations from a design space
    Sample(SampleArgs),

    /// Validate a design space file
    Validate(ValidateArgs),

    /// Show optimization-space bounds and flags of every parameter
    Bounds(BoundsArgs),

    /// Map raw configurations into optimization space
    Transform(TransformArgs),
}

/// Arguments for the sample command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SampleArgs {
    /// Path to YAML/JSON design space file
    #[arg(value_name = "SPACE")]
    pub space: PathBuf,

    /// Number of configurations to draw
    #[arg(short = 'n', long, default_value_t = 1)]
    pub num: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML/JSON design space file
    #[arg(value_name = "SPACE")]
    pub space: PathBuf,
}

/// Arguments for the bounds command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct BoundsArgs {
    /// Path to YAML/JSON design space file
    #[arg(value_name = "SPACE")]
    pub space: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the transform command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TransformArgs {
    /// Path to YAML/JSON design space file
    #[arg(value_name = "SPACE")]
    pub space: PathBuf,

    /// Path to YAML/JSON list of configurations
    #[arg(value_name = "CONFIGS")]
    pub configs: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json, yaml")),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_defaults() {
        let cli = parse_args(["espacio", "sample", "space.yaml"]).unwrap();
        match cli.command {
            Command::Sample(args) => {
                assert_eq!(args.space, PathBuf::from("space.yaml"));
                assert_eq!(args.num, 1);
                assert_eq!(args.seed, None);
                assert_eq!(args.format, OutputFormat::Text);
            }
            _ => panic!("Expected Sample command"),
        }
    }

    #[test]
    fn test_parse_sample_options() {
        let cli = parse_args([
            "espacio", "sample", "space.yaml", "-n", "8", "--seed", "42", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Command::Sample(args) => {
                assert_eq!(args.num, 8);
                assert_eq!(args.seed, Some(42));
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("Expected Sample command"),
        }
    }

    #[test]
    fn test_parse_transform() {
        let cli = parse_args(["espacio", "transform", "space.yaml", "points.json", "-f", "yaml"])
            .unwrap();
        match cli.command {
            Command::Transform(args) => {
                assert_eq!(args.configs, PathBuf::from("points.json"));
                assert_eq!(args.format, OutputFormat::Yaml);
            }
            _ => panic!("Expected Transform command"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = parse_args(["espacio", "validate", "space.yaml", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);

        let cli = parse_args(["espacio", "-q", "bounds", "space.yaml"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(["espacio"]).is_err());
        assert!(parse_args(["espacio", "sample"]).is_err());
        assert!(parse_args(["espacio", "sample", "space.yaml", "-n", "many"]).is_err());
        assert!(parse_args(["espacio", "bounds", "space.yaml", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("table".parse::<OutputFormat>().is_err());
    }
}
