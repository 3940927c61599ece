//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Error {status}: {detail}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Server-supplied detail, or the status text
        detail: String,
    },

    /// A success response whose body could not be read as forecast records
    #[error("{0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Create an HTTP error
    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        Self::Http {
            status,
            detail: detail.into(),
        }
    }

    /// Text shown to the user in the error area
    ///
    /// HTTP errors are shown as `Error <status>: <detail>`; everything else
    /// is prefixed with a generic failure message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { .. } => self.to_string(),
            other => format!("Failed to fetch forecast: {other}"),
        }
    }
}
