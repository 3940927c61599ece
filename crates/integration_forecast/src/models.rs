//! Forecasting API response models

use domain::ForecastRecord;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned with non-success responses, e.g. `{"detail": "..."}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable explanation from the server
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Detail text for a failed response
    ///
    /// Uses the body's `detail` when it is a non-empty string. A detail of
    /// another JSON type (validation errors come back as a list) is shown as
    /// compact JSON. An empty detail (`""`, `null`, `false`, `0`), a missing
    /// one or a body that is not JSON falls back to the status text.
    pub(crate) fn detail_for(status: StatusCode, body: &str) -> String {
        let detail = serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|parsed| parsed.detail);

        match detail {
            Some(Value::String(s)) if !s.is_empty() => s,
            Some(other) if !is_blank(&other) => other.to_string(),
            _ => status_text(status),
        }
    }
}

#[allow(clippy::float_cmp)]
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Response of the API's root endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    /// Greeting message
    pub message: String,
}

/// Reason phrase for a status, as a browser would show it
pub(crate) fn status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown Status").to_string()
}

/// Parse a success body into records
///
/// A JSON array yields one record per element and every element must be an
/// object. Any other JSON value (`null`, an object) carries no records.
pub(crate) fn parse_records(body: &str) -> Result<Vec<ForecastRecord>, String> {
    let value: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(ForecastRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string()),
        _ => Ok(Vec::new()),
    }
}
