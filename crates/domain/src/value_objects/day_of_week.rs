//! Day of week value object

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The weekday chosen to narrow a one week forecast
///
/// Holds the value exactly as it is sent in the `day_of_week` query
/// parameter. The forecasting API counts days from Monday (`0`) to
/// Sunday (`6`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayOfWeek(String);

impl DayOfWeek {
    /// Wrap a raw value, returning `None` for an empty selection
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Build from a chrono weekday using the API's Monday-first numbering
    #[must_use]
    pub fn from_weekday(weekday: Weekday) -> Self {
        Self(weekday.num_days_from_monday().to_string())
    }

    /// Interpret user input
    ///
    /// Accepts an index or an English weekday name (full or three-letter,
    /// any case). Names are normalized to their index; anything else is kept
    /// as typed. Returns `None` for blank input.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<Weekday>() {
            Ok(weekday) => Some(Self::from_weekday(weekday)),
            Err(_) => Some(Self(trimmed.to_string())),
        }
    }

    /// The weekday this value names, when it is a valid index
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        self.0
            .parse::<u8>()
            .ok()
            .and_then(|index| Weekday::try_from(index).ok())
    }

    /// English name of the weekday, when the value is a valid index
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        self.weekday().map(|weekday| match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        })
    }

    /// Get the raw value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All seven weekdays, Monday first
    #[must_use]
    pub fn all() -> Vec<Self> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .map(Self::from_weekday)
        .collect()
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DayOfWeek {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
