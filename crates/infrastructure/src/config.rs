//! Application configuration

use std::path::Path;

use integration_forecast::{DEFAULT_BASE_URL, PredictConfig};
use serde::{Deserialize, Serialize};

use crate::templates::TemplateConfig;

/// Prefix of environment variables read by [`AppConfig::load`]
pub const ENV_PREFIX: &str = "FORECAST";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Forecasting API connection
    #[serde(default)]
    pub api: PredictConfig,

    /// Template engine configuration
    #[serde(default)]
    pub templates: TemplateConfig,

    /// Values pre-filled into the form when the user gives none
    #[serde(default)]
    pub defaults: FormDefaults,
}

/// Form values used when none are given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefaults {
    /// Default city
    #[serde(default)]
    pub city: Option<String>,

    /// Default model name
    #[serde(default)]
    pub model_name: Option<String>,

    /// Default forecast type
    #[serde(default)]
    pub forecast_type: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Reads `config.{toml,json,yaml,...}` from the working directory when
    /// present, then applies `FORECAST__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or does not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false), None)
    }

    /// Load configuration from a specific file, then the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path.as_ref()).required(true), None)
    }

    fn build(
        file: config::File<config::FileSourceFile, config::FileFormat>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., FORECAST__API__BASE_URL)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("config.toml")).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        dir
    }

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert!(config.api.timeout_secs.is_none());
        assert!(config.templates.auto_escape);
        assert_eq!(config.defaults, FormDefaults::default());
    }

    #[test]
    fn load_from_file() {
        let dir = write_config(
            r#"
[api]
base_url = "http://forecast.internal:9000"
timeout_secs = 30

[defaults]
city = "mumbai"
model_name = "Ensemble"
forecast_type = "1week"
"#,
        );

        let config = AppConfig::load_from(dir.path().join("config.toml")).unwrap();

        assert_eq!(config.api.base_url, "http://forecast.internal:9000");
        assert_eq!(config.api.timeout_secs, Some(30));
        assert_eq!(config.defaults.city.as_deref(), Some("mumbai"));
        assert_eq!(config.defaults.model_name.as_deref(), Some("Ensemble"));
        assert_eq!(config.defaults.forecast_type.as_deref(), Some("1week"));
    }

    #[test]
    fn load_from_partial_file_keeps_defaults() {
        let dir = write_config("[defaults]\ncity = \"delhi\"\n");

        let config = AppConfig::load_from(dir.path().join("config.toml")).unwrap();

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.api.timeout_secs.is_none());
        assert!(config.templates.use_embedded_fallback);
        assert_eq!(config.defaults.city.as_deref(), Some("delhi"));
        assert!(config.defaults.model_name.is_none());
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn environment_overrides_file() {
        let dir = write_config("[api]\nbase_url = \"http://from-file:8000\"\n");
        let mut env = config::Map::new();
        env.insert(
            "FORECAST__API__BASE_URL".to_string(),
            "http://from-env:8000".to_string(),
        );
        env.insert("FORECAST__API__TIMEOUT_SECS".to_string(), "12".to_string());

        let config = AppConfig::build(
            config::File::from(dir.path().join("config.toml")),
            Some(env),
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://from-env:8000");
        assert_eq!(config.api.timeout_secs, Some(12));
    }

    #[test]
    fn unrelated_environment_is_ignored() {
        let mut env = config::Map::new();
        env.insert("OTHER__API__BASE_URL".to_string(), "http://x".to_string());

        let config = AppConfig::build(
            config::File::with_name("does-not-exist").required(false),
            Some(env),
        )
        .unwrap();

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn app_config_serialization() {
        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        assert!(json.contains("api"));
        assert!(json.contains("templates"));
        assert!(json.contains("defaults"));
    }
}
