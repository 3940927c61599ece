//! Forecast CLI
//!
//! Command-line front end for the weather forecasting API.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod predict;

use std::path::PathBuf;

use anyhow::Context;
use application::ports::ForecastPort;
use clap::{Parser, Subcommand};
use domain::{DayOfWeek, ForecastType, catalog};
use infrastructure::{AppConfig, ForecastAdapter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::predict::PredictArgs;

/// Forecast CLI
#[derive(Parser)]
#[command(name = "forecast-cli")]
#[command(author, version, about = "Weather forecast viewer CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml when present)
    #[arg(long, global = true, env = "FORECAST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a forecast and print the results
    ///
    /// Example: forecast-cli predict --city ahmedabad --model Ensemble -t 1week -d monday
    Predict(PredictArgs),

    /// Check that the forecasting API answers on its root endpoint
    Health {
        /// Forecasting API base URL (overrides configuration)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// List the cities, models, forecast types and weekdays the API knows
    Options,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => AppConfig::load().context("Failed to load configuration"),
    }
}

/// Lines printed by the `options` command
fn options_listing() -> Vec<String> {
    let mut lines = vec![format!("Cities: {}", catalog::KNOWN_CITIES.join(", "))];
    lines.push(format!("Models: {}", catalog::KNOWN_MODELS.join(", ")));
    lines.push(format!(
        "Forecast types: {}",
        ForecastType::known()
            .iter()
            .map(ForecastType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    ));
    lines.push("Days of week (1week only):".to_string());
    for day in DayOfWeek::all() {
        lines.push(format!("  {day} = {}", day.label().unwrap_or_default()));
    }
    lines
}

/// Ask the API for its welcome message; returns whether it answered and the line to print
async fn health_check(port: &dyn ForecastPort) -> (bool, String) {
    match port.welcome().await {
        Ok(message) => (true, format!("✅ Healthy: {message}")),
        Err(e) => (false, format!("❌ Unhealthy: {e}")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Predict(args) => {
            let config = load_config(cli.config.as_ref())?;
            let outcome = predict::run(&args, config).await?;

            if !outcome.output.is_empty() {
                print!("{}", outcome.output);
            }
            if let Some(message) = outcome.error {
                eprintln!("{message}");
                std::process::exit(1);
            }
        },

        Commands::Health { url } => {
            let mut config = load_config(cli.config.as_ref())?;
            if let Some(url) = url {
                config.api.base_url = url;
            }

            let adapter = ForecastAdapter::with_config(config.api)?;
            let (healthy, line) = health_check(&adapter).await;
            println!("{line}");
            if !healthy {
                std::process::exit(1);
            }
        },

        Commands::Options => {
            for line in options_listing() {
                println!("{line}");
            }
        },
    }

    Ok(())
}
