//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

// Mock CLI structure for testing (mirrors main.rs and predict.rs)
#[derive(Parser)]
#[command(name = "forecast-cli")]
#[command(author, version, about = "Weather forecast viewer CLI", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Page,
    Json,
}

#[derive(clap::Args)]
struct PredictArgs {
    #[arg(short, long)]
    city: Option<String>,
    #[arg(short, long)]
    model: Option<String>,
    #[arg(short = 't', long)]
    forecast_type: Option<String>,
    #[arg(short, long)]
    day_of_week: Option<String>,
    #[arg(short, long)]
    url: Option<String>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(clap::Subcommand)]
enum Commands {
    Predict(PredictArgs),
    Health {
        #[arg(short, long)]
        url: Option<String>,
    },
    Options,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_predict_command() {
    let cli = parse_args(&[
        "forecast-cli",
        "predict",
        "--city",
        "ahmedabad",
        "--model",
        "Ensemble",
        "--forecast-type",
        "1week",
        "--day-of-week",
        "3",
    ])
    .unwrap();
    if let Commands::Predict(args) = cli.command {
        assert_eq!(args.city.as_deref(), Some("ahmedabad"));
        assert_eq!(args.model.as_deref(), Some("Ensemble"));
        assert_eq!(args.forecast_type.as_deref(), Some("1week"));
        assert_eq!(args.day_of_week.as_deref(), Some("3"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.url.is_none());
    } else {
        panic!("Expected Predict command");
    }
}

#[test]
fn cli_parses_predict_short_flags() {
    let cli = parse_args(&[
        "forecast-cli",
        "predict",
        "-c",
        "delhi",
        "-m",
        "XGBoost",
        "-t",
        "48h",
        "-u",
        "http://forecast:8000",
        "-f",
        "json",
    ])
    .unwrap();
    if let Commands::Predict(args) = cli.command {
        assert_eq!(args.city.as_deref(), Some("delhi"));
        assert_eq!(args.forecast_type.as_deref(), Some("48h"));
        assert_eq!(args.url.as_deref(), Some("http://forecast:8000"));
        assert_eq!(args.format, OutputFormat::Json);
    } else {
        panic!("Expected Predict command");
    }
}

#[test]
fn cli_predict_fields_are_optional() {
    let cli = parse_args(&["forecast-cli", "predict"]).unwrap();
    if let Commands::Predict(args) = cli.command {
        assert!(args.city.is_none());
        assert!(args.model.is_none());
        assert!(args.forecast_type.is_none());
        assert!(args.day_of_week.is_none());
    } else {
        panic!("Expected Predict command");
    }
}

#[test]
fn cli_predict_accepts_every_format() {
    for (value, expected) in [
        ("text", OutputFormat::Text),
        ("html", OutputFormat::Html),
        ("page", OutputFormat::Page),
        ("json", OutputFormat::Json),
    ] {
        let cli = parse_args(&["forecast-cli", "predict", "--format", value]).unwrap();
        if let Commands::Predict(args) = cli.command {
            assert_eq!(args.format, expected);
        } else {
            panic!("Expected Predict command");
        }
    }
}

#[test]
fn cli_predict_rejects_unknown_format() {
    let result = parse_args(&["forecast-cli", "predict", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn cli_predict_passes_unknown_forecast_type_through() {
    let cli = parse_args(&["forecast-cli", "predict", "-t", "3days"]).unwrap();
    if let Commands::Predict(args) = cli.command {
        assert_eq!(args.forecast_type.as_deref(), Some("3days"));
    } else {
        panic!("Expected Predict command");
    }
}

#[test]
fn cli_parses_health_command() {
    let cli = parse_args(&["forecast-cli", "health"]).unwrap();
    if let Commands::Health { url } = cli.command {
        assert!(url.is_none());
    } else {
        panic!("Expected Health command");
    }
}

#[test]
fn cli_parses_health_with_custom_url() {
    let cli = parse_args(&["forecast-cli", "health", "--url", "http://custom:8080"]).unwrap();
    if let Commands::Health { url } = cli.command {
        assert_eq!(url.as_deref(), Some("http://custom:8080"));
    } else {
        panic!("Expected Health command");
    }
}

#[test]
fn cli_parses_options_command() {
    let cli = parse_args(&["forecast-cli", "options"]).unwrap();
    assert!(matches!(cli.command, Commands::Options));
}

#[test]
fn cli_parses_global_config_after_subcommand() {
    let cli = parse_args(&["forecast-cli", "options", "--config", "forecast.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("forecast.toml")));
}

#[test]
fn cli_parses_verbose_flag() {
    let cli = parse_args(&["forecast-cli", "-v", "options"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_parses_multiple_verbose_flags() {
    let cli = parse_args(&["forecast-cli", "-vvv", "options"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_verbosity_zero_by_default() {
    let cli = parse_args(&["forecast-cli", "options"]).unwrap();
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_requires_subcommand() {
    let result = parse_args(&["forecast-cli"]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    let result = parse_args(&["forecast-cli", "chat"]);
    assert!(result.is_err());
}
