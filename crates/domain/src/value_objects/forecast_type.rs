//! Forecast type value object
//!
//! Selects the prediction horizon requested from the forecasting API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Forecast horizon
///
/// The API knows `48h` and `1week`. Any other value is carried through to
/// the request verbatim and left for the server to judge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ForecastType {
    /// Hourly forecast for the next 48 hours
    #[default]
    FortyEightHours,
    /// Hourly forecast for the next week, optionally narrowed to one weekday
    OneWeek,
    /// Any value the client does not know about
    Other(String),
}

impl ForecastType {
    /// Wire value for the 48 hour forecast
    pub const FORTY_EIGHT_HOURS: &'static str = "48h";
    /// Wire value for the one week forecast
    pub const ONE_WEEK: &'static str = "1week";

    /// Get the value sent as the `forecast_type` query parameter
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::FortyEightHours => Self::FORTY_EIGHT_HOURS,
            Self::OneWeek => Self::ONE_WEEK,
            Self::Other(value) => value,
        }
    }

    /// Check if this is the one week forecast, the only type that accepts a weekday
    ///
    /// Decided on the wire value, so `Other("1week")` counts too.
    #[must_use]
    pub fn is_one_week(&self) -> bool {
        self.as_str() == Self::ONE_WEEK
    }

    /// All forecast types the API is known to accept
    #[must_use]
    pub const fn known() -> [Self; 2] {
        [Self::FortyEightHours, Self::OneWeek]
    }
}

impl From<&str> for ForecastType {
    fn from(value: &str) -> Self {
        match value {
            Self::FORTY_EIGHT_HOURS => Self::FortyEightHours,
            Self::ONE_WEEK => Self::OneWeek,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ForecastType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl std::str::FromStr for ForecastType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ForecastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ForecastType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ForecastType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value))
    }
}
