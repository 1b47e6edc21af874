//! CLI command tests

use super::*;
use crate::cli::args::{BoundsArgs, OutputFormat, SampleArgs, TransformArgs, ValidateArgs};
use crate::space::Configuration;
use std::path::PathBuf;
use tempfile::TempDir;

const SPACE_YAML: &str = r#"
- name: batch_size
  type: int_exponent
  lb: 32
  ub: 1024
  base: 2
- name: lr
  type: pow
  lb: 1.0e-4
  ub: 1.0e-1
- name: activation
  type: cat
  categories: [relu, gelu]
"#;

fn write_space(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("space.yaml");
    std::fs::write(&path, SPACE_YAML).unwrap();
    path
}

fn cli(command: Command) -> Cli {
    Cli {
        command,
        verbose: false,
        quiet: true,
    }
}

#[test]
fn test_run_validate() {
    let dir = TempDir::new().unwrap();
    let space = write_space(&dir);
    assert!(run_command(cli(Command::Validate(ValidateArgs { space }))).is_ok());
}

#[test]
fn test_run_validate_missing_file() {
    let err = run_command(cli(Command::Validate(ValidateArgs {
        space: PathBuf::from("/nonexistent/space.yaml"),
    })))
    .unwrap_err();
    assert!(err.contains("E050"));
}

#[test]
fn test_run_validate_rejects_bad_parameter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "- {name: batch_size, type: int_exponent, lb: 32, ub: 1024, base: 1}\n")
        .unwrap();
    let err = run_command(cli(Command::Validate(ValidateArgs { space: path }))).unwrap_err();
    assert!(err.contains("batch_size"));
    assert!(err.contains("E002"));
}

#[test]
fn test_run_validate_rejects_empty_space() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();
    assert!(run_command(cli(Command::Validate(ValidateArgs { space: path }))).is_err());
}

#[test]
fn test_sample_report_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let args = SampleArgs {
        space: write_space(&dir),
        num: 5,
        seed: Some(42),
        format: OutputFormat::Json,
    };
    let (first, rendered) = sample::sample_report(&args).unwrap();
    let (second, _) = sample::sample_report(&args).unwrap();
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);

    let parsed: Vec<Configuration> = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed.len(), 5);
    for config in &parsed {
        let batch_size = config["batch_size"].as_int().unwrap();
        assert!([32, 64, 128, 256, 512, 1024].contains(&batch_size));
    }
}

#[test]
fn test_sample_zero_fails() {
    let dir = TempDir::new().unwrap();
    let args = SampleArgs {
        space: write_space(&dir),
        num: 0,
        seed: Some(1),
        format: OutputFormat::Text,
    };
    let err = run_command(cli(Command::Sample(args))).unwrap_err();
    assert!(err.contains("Invalid argument"));
}

#[test]
fn test_run_bounds() {
    let dir = TempDir::new().unwrap();
    let args = BoundsArgs {
        space: write_space(&dir),
        format: OutputFormat::Yaml,
    };
    assert!(run_command(cli(Command::Bounds(args))).is_ok());
}

#[test]
fn test_transform_report() {
    let dir = TempDir::new().unwrap();
    let configs = dir.path().join("points.json");
    std::fs::write(
        &configs,
        r#"[{"batch_size": 64, "lr": 0.01, "activation": "gelu"},
            {"batch_size": 1024, "lr": 0.001, "activation": "relu"}]"#,
    )
    .unwrap();
    let args = TransformArgs {
        space: write_space(&dir),
        configs,
        format: OutputFormat::Json,
    };
    let rendered = transform::transform_report(&args).unwrap();
    let report: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(report["numeric_names"], serde_json::json!(["batch_size", "lr"]));
    assert_eq!(report["enumerated"], serde_json::json!([[1], [0]]));
    let first = report["numeric"][0][0].as_f64().unwrap();
    assert!((first - 6.0).abs() < 1e-12);
}

#[test]
fn test_transform_rejects_out_of_domain_configuration() {
    let dir = TempDir::new().unwrap();
    let configs = dir.path().join("points.yaml");
    std::fs::write(&configs, "- {batch_size: 100, lr: 0.01, activation: gelu}\n").unwrap();
    let args = TransformArgs {
        space: write_space(&dir),
        configs,
        format: OutputFormat::Text,
    };
    let err = transform::transform_report(&args).unwrap_err();
    assert!(err.starts_with("Configuration 0"));
}

fn points(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("points.json");
    std::fs::write(&path, r#"[{"batch_size": 64, "lr": 0.01, "activation": "gelu"}]"#).unwrap();
    path
}

#[test]
fn test_quiet_suppresses_command_output() {
    let dir = TempDir::new().unwrap();
    let sample_args = SampleArgs {
        space: write_space(&dir),
        num: 3,
        seed: Some(7),
        format: OutputFormat::Json,
    };
    let bounds_args = BoundsArgs {
        space: write_space(&dir),
        format: OutputFormat::Text,
    };
    let transform_args = TransformArgs {
        space: write_space(&dir),
        configs: points(&dir),
        format: OutputFormat::Text,
    };

    let mut out = Vec::new();
    sample::run_sample(sample_args.clone(), LogLevel::Quiet, &mut out).unwrap();
    bounds::run_bounds(bounds_args.clone(), LogLevel::Quiet, &mut out).unwrap();
    transform::run_transform(transform_args.clone(), LogLevel::Quiet, &mut out).unwrap();
    assert!(out.is_empty(), "quiet mode wrote {:?}", String::from_utf8_lossy(&out));

    let mut out = Vec::new();
    sample::run_sample(sample_args, LogLevel::Normal, &mut out).unwrap();
    let sampled: Vec<Configuration> = serde_json::from_slice(&out).unwrap();
    assert_eq!(sampled.len(), 3);

    let mut out = Vec::new();
    bounds::run_bounds(bounds_args, LogLevel::Normal, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("int_exponent"));

    let mut out = Vec::new();
    transform::run_transform(transform_args, LogLevel::Normal, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("6.000000"));
}
