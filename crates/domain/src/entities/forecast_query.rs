//! Forecast query entity
//!
//! The parameters of one `/predict` request.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::value_objects::{DayOfWeek, ForecastType};

/// A request for predictions
///
/// `day_of_week` is only ever present together with a one week forecast;
/// the constructor drops it otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastQuery {
    city: String,
    model_name: String,
    forecast_type: ForecastType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day_of_week: Option<DayOfWeek>,
}

impl ForecastQuery {
    /// Build a query, discarding the weekday unless the forecast type is `1week`
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        model_name: impl Into<String>,
        forecast_type: ForecastType,
        day_of_week: Option<DayOfWeek>,
    ) -> Self {
        let day_of_week = day_of_week.filter(|_| forecast_type.is_one_week());
        Self {
            city: city.into(),
            model_name: model_name.into(),
            forecast_type,
            day_of_week,
        }
    }

    /// Build a query from raw form values, where an empty day means "none chosen"
    #[must_use]
    pub fn from_form_values(
        city: &str,
        model_name: &str,
        forecast_type: &str,
        day_of_week: &str,
    ) -> Self {
        Self::new(
            city,
            model_name,
            ForecastType::from(forecast_type),
            DayOfWeek::new(day_of_week),
        )
    }

    /// City to forecast for
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Model producing the predictions
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Requested horizon
    #[must_use]
    pub const fn forecast_type(&self) -> &ForecastType {
        &self.forecast_type
    }

    /// Weekday filter, present only for one week forecasts
    #[must_use]
    pub const fn day_of_week(&self) -> Option<&DayOfWeek> {
        self.day_of_week.as_ref()
    }

    /// Query parameters in request order
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("city", self.city.as_str()),
            ("model_name", self.model_name.as_str()),
            ("forecast_type", self.forecast_type.as_str()),
        ];
        if let Some(day) = &self.day_of_week {
            pairs.push(("day_of_week", day.as_str()));
        }
        pairs
    }

    /// Form-urlencoded query string, without the leading `?`
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}
