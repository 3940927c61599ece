//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A forecast record was not a JSON object
    #[error("Invalid forecast record: expected a JSON object, got {0}")]
    InvalidRecord(String),
}

impl DomainError {
    /// Create an invalid record error describing the offending JSON kind
    pub fn invalid_record(value: &serde_json::Value) -> Self {
        let kind = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        Self::InvalidRecord(kind.to_string())
    }
}
