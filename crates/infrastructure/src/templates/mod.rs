//! Template engine module for rendering forecast results
//!
//! Uses Tera templating engine to produce:
//! - An HTML fragment for the results area (table or notice)
//! - A standalone HTML page with the query summary, error and results
//! - An aligned plain-text table for terminals
//!
//! # Template Locations
//!
//! Templates can be loaded from:
//! - Embedded templates (compile-time)
//! - File system (runtime, configurable). A file named like an embedded
//!   template replaces it.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_results_html(&state.display)?;
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use domain::{DayOfWeek, ForecastQuery, ResultsView, TableView, UiState};
use serde::{Deserialize, Serialize};
use tera::{Context, Tera, Value};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the results fragment template
pub const RESULTS_HTML: &str = "forecast/results.html";
/// Name of the full page template
pub const PAGE_HTML: &str = "forecast/page.html";
/// Name of the plain-text results template
pub const RESULTS_TEXT: &str = "forecast/results.txt";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Path to custom templates directory (optional)
    #[serde(default)]
    pub templates_dir: Option<String>,

    /// Whether to use embedded templates when the custom ones fail to load
    #[serde(default = "default_true")]
    pub use_embedded_fallback: bool,

    /// Whether to auto-escape HTML by default
    #[serde(default = "default_true")]
    pub auto_escape: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            use_embedded_fallback: true,
            auto_escape: true,
        }
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const RESULTS_HTML: &str = r#"{% if view.kind == "table" -%}
<table>
<thead><tr>{% for column in view.content.columns %}<th>{{ column }}</th>{% endfor %}</tr></thead>
<tbody>
{% for row in view.content.rows %}<tr>{% for cell in row %}<td>{{ cell }}</td>{% endfor %}</tr>
{% endfor %}</tbody>
</table>
{% elif view.kind == "notice" -%}
<p class="notice">{{ view.content }}</p>
{% endif -%}
"#;

    pub const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Weather Forecast</title>
    <style>
        body { font-family: Arial, sans-serif; }
        table { border-collapse: collapse; }
        th, td { border: 1px solid #ccc; padding: 4px 8px; }
        .error { color: #b00; }
    </style>
</head>
<body>
    <h1>Weather Forecast</h1>
    <dl id="query">
        <dt>City</dt><dd>{{ query.city }}</dd>
        <dt>Model</dt><dd>{{ query.model_name }}</dd>
        <dt>Forecast type</dt><dd>{{ query.forecast_type }}</dd>
{% if day_of_week %}        <dt>Day of week</dt><dd>{{ day_of_week | weekday_name }}</dd>
{% endif %}    </dl>
{% if loading %}    <div id="loading">Loading...</div>
{% endif %}{% if error_message %}    <div id="error" class="error">{{ error_message }}</div>
{% endif %}    <div id="results">
{% include "forecast/results.html" %}    </div>
</body>
</html>
"#;

    pub const RESULTS_TEXT: &str = r"{% if table -%}
{{ table.header }}
{{ table.rule }}
{% for row in table.rows -%}
{{ row }}
{% endfor -%}
{% elif notice -%}
{{ notice }}
{% endif -%}
";
}

/// A table laid out in fixed-width columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TextTable {
    header: String,
    rule: String,
    rows: Vec<String>,
}

impl TextTable {
    fn from_view(table: &TableView) -> Self {
        let widths: Vec<usize> = table
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                table
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(column.chars().count()))
                    .max()
                    .unwrap_or_default()
            })
            .collect();

        let line = |cells: &[String]| {
            widths
                .iter()
                .enumerate()
                .map(|(i, &width)| {
                    let cell = cells.get(i).map_or("", String::as_str);
                    format!("{cell:<width$}")
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        Self {
            header: line(table.columns.as_slice()),
            rule: widths
                .iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join("  "),
            rows: table.rows.iter().map(|row| line(row.as_slice())).collect(),
        }
    }
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
    config: TemplateConfig,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_config(TemplateConfig::default())
    }

    /// Create a new template engine with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile and embedded
    /// fallback is disabled.
    pub fn with_config(config: TemplateConfig) -> Result<Self, TemplateError> {
        let mut tera = Self::embedded()?;

        // Custom templates take precedence over embedded ones of the same name
        if let Some(ref dir) = config.templates_dir {
            if Path::new(dir).exists() {
                let pattern = format!("{dir}/**/*");
                match Tera::new(&pattern) {
                    Ok(mut custom) => {
                        custom
                            .extend(&tera)
                            .map_err(|e| TemplateError::Compile(e.to_string()))?;
                        for name in custom.get_template_names() {
                            debug!(template = %name, "Template available");
                        }
                        info!(dir = %dir, "Loaded custom templates");
                        tera = custom;
                    },
                    Err(e) => {
                        if !config.use_embedded_fallback {
                            return Err(TemplateError::Compile(e.to_string()));
                        }
                        debug!(error = %e, "Custom templates failed to load, using embedded");
                    },
                }
            } else {
                debug!(dir = %dir, "Templates directory does not exist, using embedded");
            }
        }

        // Set auto-escape based on config
        tera.autoescape_on(if config.auto_escape {
            vec![".html", ".htm", ".xml"]
        } else {
            vec![]
        });

        // Register custom filters
        tera.register_filter("weekday_name", weekday_name_filter);

        Ok(Self {
            tera: Arc::new(tera),
            config,
        })
    }

    fn embedded() -> Result<Tera, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (RESULTS_HTML, embedded::RESULTS_HTML),
            (PAGE_HTML, embedded::PAGE_HTML),
            (RESULTS_TEXT, embedded::RESULTS_TEXT),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;
        Ok(tera)
    }

    /// Render a template with the given context
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or fails to render.
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, context)
            .map_err(TemplateError::from)
    }

    /// Render the results area as an HTML fragment
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_results_html(&self, view: &ResultsView) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("view", view);
        self.render(RESULTS_HTML, &ctx)
    }

    /// Render a complete page for a query and the state after submitting it
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_page(
        &self,
        query: &ForecastQuery,
        state: &UiState,
    ) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("query", query);
        ctx.insert("day_of_week", &query.day_of_week());
        ctx.insert("loading", &state.loading);
        ctx.insert("error_message", &state.error_message);
        ctx.insert("view", &state.display);
        self.render(PAGE_HTML, &ctx)
    }

    /// Render the results area as plain text
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_results_text(&self, view: &ResultsView) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        match view {
            ResultsView::Table(table) => {
                ctx.insert("table", &TextTable::from_view(table));
                ctx.insert("notice", &Option::<String>::None);
            },
            ResultsView::Notice(message) => {
                ctx.insert("table", &Option::<TextTable>::None);
                ctx.insert("notice", message);
            },
            ResultsView::Empty => {
                ctx.insert("table", &Option::<TextTable>::None);
                ctx.insert("notice", &Option::<String>::None);
            },
        }
        self.render(RESULTS_TEXT, &ctx)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// List all available template names
    #[must_use]
    pub fn list_templates(&self) -> Vec<&str> {
        self.tera.get_template_names().collect()
    }
}

/// Custom filter: Show a weekday index as its English name
///
/// Values that are not a weekday index pass through unchanged.
fn weekday_name_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("weekday_name requires a string"))?;
    let name = DayOfWeek::new(s)
        .and_then(|day| day.label())
        .map_or_else(|| s.to_string(), str::to_string);
    Ok(Value::String(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ForecastRecord;

    fn table_view() -> ResultsView {
        ResultsView::Table(TableView {
            columns: vec!["Timestamp".to_string(), "Temp".to_string()],
            rows: vec![
                vec!["t1".to_string(), "5".to_string()],
                vec!["t2".to_string(), "17.25".to_string()],
            ],
        })
    }

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new();
        assert!(engine.is_ok());
    }

    #[test]
    fn test_results_html_table() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_results_html(&table_view()).unwrap();

        assert!(html.contains("<thead><tr><th>Timestamp</th><th>Temp</th></tr></thead>"));
        assert!(html.contains("<tr><td>t1</td><td>5</td></tr>"));
        assert!(html.contains("<tr><td>t2</td><td>17.25</td></tr>"));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn test_results_html_notice_has_no_table() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine
            .render_results_html(&ResultsView::Notice("No forecast data received.".into()))
            .unwrap();

        assert!(html.contains("<p class=\"notice\">No forecast data received.</p>"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_results_html_empty() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_results_html(&ResultsView::Empty).unwrap();
        assert!(html.trim().is_empty());
    }

    #[test]
    fn test_results_html_escapes_values() {
        let engine = TemplateEngine::new().unwrap();
        let view = ResultsView::Table(TableView {
            columns: vec!["<b>".to_string()],
            rows: vec![vec!["<script>".to_string()]],
        });
        let html = engine.render_results_html(&view).unwrap();

        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_page_with_results() {
        let engine = TemplateEngine::new().unwrap();
        let query = ForecastQuery::from_form_values("ahmedabad", "Ensemble", "1week", "2");
        let state = UiState {
            display: table_view(),
            results: Some(vec![ForecastRecord::new().with_field("Timestamp", "t1")]),
            ..UiState::default()
        };

        let page = engine.render_page(&query, &state).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<dd>ahmedabad</dd>"));
        assert!(page.contains("<dd>1week</dd>"));
        assert!(page.contains("<dd>Wednesday</dd>"));
        assert!(page.contains("<th>Timestamp</th>"));
        assert!(!page.contains("id=\"error\""));
        assert!(!page.contains("id=\"loading\""));
    }

    #[test]
    fn test_page_with_error() {
        let engine = TemplateEngine::new().unwrap();
        let query = ForecastQuery::from_form_values("nowhere", "Ensemble", "48h", "");
        let state = UiState {
            error_message: Some("Error 404: city not found".to_string()),
            ..UiState::default()
        };

        let page = engine.render_page(&query, &state).unwrap();

        assert!(page.contains("Error 404: city not found"));
        assert!(!page.contains("Day of week"));
        assert!(!page.contains("<table>"));
    }

    #[test]
    fn test_results_text_table_is_aligned() {
        let engine = TemplateEngine::new().unwrap();
        let text = engine.render_results_text(&table_view()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines, vec![
            "Timestamp  Temp",
            "---------  -----",
            "t1         5",
            "t2         17.25",
        ]);
    }

    #[test]
    fn test_results_text_notice() {
        let engine = TemplateEngine::new().unwrap();
        let text = engine
            .render_results_text(&ResultsView::Notice("No forecast data received.".into()))
            .unwrap();
        assert_eq!(text.trim(), "No forecast data received.");
    }

    #[test]
    fn test_results_text_does_not_escape() {
        let engine = TemplateEngine::new().unwrap();
        let view = ResultsView::Table(TableView {
            columns: vec!["Temperature (°C)".to_string()],
            rows: vec![vec!["<1 & >0".to_string()]],
        });
        let text = engine.render_results_text(&view).unwrap();
        assert!(text.contains("<1 & >0"));
    }

    #[test]
    fn test_text_table_pads_by_characters() {
        let table = TextTable::from_view(&TableView {
            columns: vec!["°C".to_string(), "x".to_string()],
            rows: vec![vec!["1".to_string(), "2".to_string()]],
        });
        assert_eq!(table.header, "°C  x");
        assert_eq!(table.rows, vec!["1   2"]);
    }

    #[test]
    fn test_custom_template_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let forecast_dir = dir.path().join("forecast");
        std::fs::create_dir_all(&forecast_dir).unwrap();
        std::fs::write(
            forecast_dir.join("results.txt"),
            "{% if notice %}NOTICE: {{ notice }}{% endif %}",
        )
        .unwrap();

        let engine = TemplateEngine::with_config(TemplateConfig {
            templates_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..TemplateConfig::default()
        })
        .unwrap();

        let text = engine
            .render_results_text(&ResultsView::Notice("nothing".into()))
            .unwrap();
        assert_eq!(text, "NOTICE: nothing");
        assert!(engine.template_exists(RESULTS_HTML));
    }

    #[test]
    fn test_missing_templates_dir_uses_embedded() {
        let engine = TemplateEngine::with_config(TemplateConfig {
            templates_dir: Some("/nonexistent/forecast-templates".to_string()),
            ..TemplateConfig::default()
        })
        .unwrap();
        assert!(engine.template_exists(PAGE_HTML));
    }

    #[test]
    fn test_template_listing() {
        let engine = TemplateEngine::new().unwrap();
        let templates = engine.list_templates();

        assert!(templates.contains(&RESULTS_HTML));
        assert!(templates.contains(&PAGE_HTML));
        assert!(templates.contains(&RESULTS_TEXT));
        assert!(!engine.template_exists("nonexistent/template.txt"));
    }

    #[test]
    fn test_weekday_name_filter() {
        let result =
            weekday_name_filter(&Value::String("6".to_string()), &HashMap::new()).unwrap();
        assert_eq!(result.as_str().unwrap(), "Sunday");

        let result =
            weekday_name_filter(&Value::String("someday".to_string()), &HashMap::new()).unwrap();
        assert_eq!(result.as_str().unwrap(), "someday");
    }
}
