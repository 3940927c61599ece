//! Forecast form state

use serde::{Deserialize, Serialize};

use crate::entities::ForecastQuery;
use crate::value_objects::ForecastType;

/// Current values of the forecast form
///
/// `day_of_week` holds the raw selection, empty when nothing is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormState {
    /// Selected city
    pub city: String,
    /// Selected model
    pub model_name: String,
    /// Selected forecast type
    pub forecast_type: ForecastType,
    /// Selected weekday, empty for none
    pub day_of_week: String,
    /// Whether the weekday selector is shown
    pub day_of_week_visible: bool,
}

impl FormState {
    /// Apply a forecast type change
    ///
    /// Selecting `1week` reveals the weekday selector. Any other value hides
    /// it and clears the selected weekday.
    pub fn change_forecast_type(&mut self, value: &str) {
        self.forecast_type = ForecastType::from(value);
        if self.forecast_type.is_one_week() {
            self.day_of_week_visible = true;
        } else {
            self.day_of_week_visible = false;
            self.day_of_week.clear();
        }
    }

    /// Build the query described by the current values
    #[must_use]
    pub fn to_query(&self) -> ForecastQuery {
        ForecastQuery::from_form_values(
            &self.city,
            &self.model_name,
            self.forecast_type.as_str(),
            &self.day_of_week,
        )
    }
}
