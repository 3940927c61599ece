//! Forecasting API client
//!
//! HTTP client for the `/predict` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use domain::{ForecastQuery, ForecastRecord};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ErrorBody, WelcomeResponse, parse_records};

/// Forecasting API client errors
#[derive(Debug, Error)]
pub enum PredictError {
    /// Connection to the forecasting API could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The API answered with a non-success status
    #[error("Error {status}: {detail}")]
    Http {
        /// HTTP status code
        status: u16,
        /// `detail` from the error body, or the status text
        detail: String,
    },

    /// Failed to parse a success response
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Forecasting API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictConfig {
    /// API base URL (default: <http://127.0.0.1:8000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: none, a request may wait forever)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Address the forecasting API listens on by default
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Forecasting API client trait
#[async_trait]
pub trait PredictClient: Send + Sync {
    /// Request predictions for a query
    async fn predict(&self, query: &ForecastQuery) -> Result<Vec<ForecastRecord>, PredictError>;

    /// Fetch the API's welcome message from its root endpoint
    async fn welcome(&self) -> Result<String, PredictError>;
}

/// HTTP implementation of [`PredictClient`]
#[derive(Debug)]
pub struct HttpPredictClient {
    client: Client,
    config: PredictConfig,
}

impl HttpPredictClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: PredictConfig) -> Result<Self, PredictError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| PredictError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, PredictError> {
        Self::new(PredictConfig::default())
    }

    /// The configuration in use
    pub const fn config(&self) -> &PredictConfig {
        &self.config
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Build the full request URL for a query
    pub fn predict_url(&self, query: &ForecastQuery) -> String {
        format!("{}/predict?{}", self.base_url(), query.to_query_string())
    }

    fn map_send_error(e: &reqwest::Error) -> PredictError {
        if e.is_connect() {
            PredictError::ConnectionFailed(e.to_string())
        } else {
            PredictError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl PredictClient for HttpPredictClient {
    #[instrument(skip(self, query), fields(city = %query.city(), model = %query.model_name()))]
    async fn predict(&self, query: &ForecastQuery) -> Result<Vec<ForecastRecord>, PredictError> {
        let url = self.predict_url(query);
        debug!(url = %url, "Fetching predictions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictError::Http {
                status: status.as_u16(),
                detail: ErrorBody::detail_for(status, &body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PredictError::RequestFailed(e.to_string()))?;

        let records = parse_records(&body).map_err(PredictError::ParseError)?;
        debug!(records = records.len(), "Received predictions");
        Ok(records)
    }

    async fn welcome(&self) -> Result<String, PredictError> {
        let url = format!("{}/", self.base_url());
        debug!(url = %url, "Fetching welcome message");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictError::Http {
                status: status.as_u16(),
                detail: ErrorBody::detail_for(status, &body),
            });
        }

        let welcome: WelcomeResponse = response
            .json()
            .await
            .map_err(|e| PredictError::ParseError(e.to_string()))?;

        Ok(welcome.message)
    }
}
