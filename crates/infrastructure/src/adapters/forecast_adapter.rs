//! Forecast adapter - Implements ForecastPort using integration_forecast

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::{ForecastQuery, ForecastRecord};
use integration_forecast::{HttpPredictClient, PredictClient, PredictConfig, PredictError};
use tracing::{debug, instrument};

/// Adapter for the forecasting API
#[derive(Debug)]
pub struct ForecastAdapter {
    client: HttpPredictClient,
}

impl ForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(PredictConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: PredictConfig) -> Result<Self, ApplicationError> {
        let client = HttpPredictClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map client error to application error
    fn map_error(err: PredictError) -> ApplicationError {
        match err {
            e @ (PredictError::ConnectionFailed(_) | PredictError::RequestFailed(_)) => {
                ApplicationError::Network(e.to_string())
            },
            PredictError::Http { status, detail } => ApplicationError::Http { status, detail },
            PredictError::ParseError(e) => ApplicationError::Parse(e),
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self, query), fields(forecast_type = %query.forecast_type()))]
    async fn fetch(&self, query: &ForecastQuery) -> Result<Vec<ForecastRecord>, ApplicationError> {
        let result = self.client.predict(query).await.map_err(Self::map_error);

        match &result {
            Ok(records) => {
                debug!(records = records.len(), "Retrieved forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast");
            },
        }

        result
    }

    #[instrument(skip(self))]
    async fn welcome(&self) -> Result<String, ApplicationError> {
        self.client.welcome().await.map_err(Self::map_error)
    }
}
