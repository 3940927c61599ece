//! Forecast record entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::errors::DomainError;

/// One predicted time point as returned by the forecasting API
///
/// An open mapping from field name to value. Field order is the order in
/// which the fields appeared in the response object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastRecord {
    fields: Map<String, Value>,
}

impl ForecastRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping insertion order
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Field names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Raw value of a field
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Text shown for a field
    ///
    /// Strings are shown as-is and booleans as `true`/`false`. Numbers use
    /// their shortest text, so an integral float such as `248.0` shows as
    /// `248`. A missing field or `null` shows as empty text; nested values
    /// are shown as compact JSON. No rounding or date formatting is applied.
    #[must_use]
    pub fn display_value(&self, name: &str) -> String {
        match self.fields.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => number_text(n),
            Some(other) => other.to_string(),
        }
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Integral floats below 1e21 print without a fraction; `-0.0` prints as `0`
#[allow(clippy::float_cmp)]
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        },
        _ => n.to_string(),
    }
}

impl From<Map<String, Value>> for ForecastRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for ForecastRecord {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DomainError::invalid_record(&other)),
        }
    }
}
