//! Forecast data port
//!
//! Defines how the application obtains predictions from the forecasting API.

use async_trait::async_trait;
use domain::{ForecastQuery, ForecastRecord};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching forecast records
///
/// One call performs exactly one request. Implementations do not retry,
/// and an empty vector means the server had no data for the query.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the records for a query
    async fn fetch(&self, query: &ForecastQuery) -> Result<Vec<ForecastRecord>, ApplicationError>;

    /// Fetch the API's welcome message, which doubles as a health check
    async fn welcome(&self) -> Result<String, ApplicationError>;
}
