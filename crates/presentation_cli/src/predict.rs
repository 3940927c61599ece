//! The `predict` command
//!
//! Fills the forecast form from command-line arguments and configured
//! defaults, submits it and renders the outcome.

use std::sync::Arc;

use anyhow::{Context, bail};
use application::{FormController, ports::ForecastPort};
use clap::{Args, ValueEnum};
use domain::{DayOfWeek, ForecastQuery, ForecastType, UiState};
use infrastructure::{AppConfig, ForecastAdapter, TemplateEngine};
use tracing::{info, warn};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Text,
    /// HTML fragment of the results area
    Html,
    /// Standalone HTML page
    Page,
    /// The records as a JSON array
    Json,
}

/// Arguments of the `predict` command
#[derive(Debug, Clone, Args)]
pub struct PredictArgs {
    /// City to forecast for (e.g. ahmedabad)
    #[arg(short, long)]
    pub city: Option<String>,

    /// Model producing the forecast (e.g. Ensemble)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Forecast type: 48h, 1week or any value the server accepts
    #[arg(short = 't', long)]
    pub forecast_type: Option<String>,

    /// Weekday for a 1week forecast: index 0 (Monday) to 6, or a name
    #[arg(short, long)]
    pub day_of_week: Option<String>,

    /// Forecasting API base URL (overrides configuration)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// What a submission produced
#[derive(Debug)]
pub struct PredictOutcome {
    /// Rendered results, empty when there is nothing to print
    pub output: String,
    /// Error message to show the user, if the request failed
    pub error: Option<String>,
}

/// Run the command against the configured forecasting API
pub async fn run(args: &PredictArgs, mut config: AppConfig) -> anyhow::Result<PredictOutcome> {
    if let Some(url) = &args.url {
        config.api.base_url.clone_from(url);
    }

    let adapter = ForecastAdapter::with_config(config.api.clone())
        .context("Failed to create forecast client")?;
    let engine = TemplateEngine::with_config(config.templates.clone())
        .context("Failed to load templates")?;

    execute(args, &config, Arc::new(adapter), &engine).await
}

/// Fill the form, submit it through `port` and render the result
pub async fn execute(
    args: &PredictArgs,
    config: &AppConfig,
    port: Arc<dyn ForecastPort>,
    engine: &TemplateEngine,
) -> anyhow::Result<PredictOutcome> {
    let controller = FormController::new(port);
    fill_form(&controller, args, config)?;

    let query = controller.build_query();
    info!(query = %query.to_query_string(), "Submitting forecast form");

    let state = controller.submit().await;
    let output = render(args.format, engine, &query, &state)?;

    Ok(PredictOutcome {
        output,
        error: state.error_message,
    })
}

/// Apply arguments, falling back to configured defaults, in form order
fn fill_form(
    controller: &FormController,
    args: &PredictArgs,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let defaults = &config.defaults;

    let Some(city) = args.city.as_ref().or(defaults.city.as_ref()) else {
        bail!("No city given: pass --city or set defaults.city");
    };
    let Some(model) = args.model.as_ref().or(defaults.model_name.as_ref()) else {
        bail!("No model given: pass --model or set defaults.model_name");
    };
    let forecast_type = args
        .forecast_type
        .as_deref()
        .or(defaults.forecast_type.as_deref())
        .unwrap_or(ForecastType::FORTY_EIGHT_HOURS);

    controller.set_city(city.as_str());
    controller.set_model_name(model.as_str());
    controller.on_forecast_type_change(forecast_type);

    if let Some(day) = args.day_of_week.as_deref().and_then(DayOfWeek::parse_lenient) {
        if controller.form().day_of_week_visible {
            controller.set_day_of_week(day.as_str());
        } else {
            warn!(
                day_of_week = %day,
                forecast_type,
                "Day of week only applies to 1week forecasts, ignoring it"
            );
        }
    }

    Ok(())
}

/// Render the state after a submission in the requested format
fn render(
    format: OutputFormat,
    engine: &TemplateEngine,
    query: &ForecastQuery,
    state: &UiState,
) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Text => engine.render_results_text(&state.display)?,
        OutputFormat::Html => engine.render_results_html(&state.display)?,
        OutputFormat::Page => engine.render_page(query, state)?,
        OutputFormat::Json => match &state.results {
            Some(records) => serde_json::to_string_pretty(records)?,
            None => String::new(),
        },
    };
    Ok(output)
}
