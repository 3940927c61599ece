//! State of the results area, loading indicator and error message

use serde::{Deserialize, Serialize};

use crate::entities::ForecastRecord;

/// Table ready for display: header cells and one row of text cells per record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableView {
    /// Header cells, in order
    pub columns: Vec<String>,
    /// Body rows, each with one cell per column
    pub rows: Vec<Vec<String>>,
}

/// What the results area currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum ResultsView {
    /// Nothing
    #[default]
    Empty,
    /// An informational message instead of a table
    Notice(String),
    /// A table of forecast records
    Table(TableView),
}

impl ResultsView {
    /// Whether a table is shown
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }
}

/// Transient UI state for one page session
///
/// Reset at the start of every submission and never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UiState {
    /// Whether a request is in flight
    pub loading: bool,
    /// Message shown in the error area
    pub error_message: Option<String>,
    /// Records from the last successful request
    pub results: Option<Vec<ForecastRecord>>,
    /// Content of the results area
    pub display: ResultsView,
}

impl UiState {
    /// Clear previous output and show the loading indicator
    pub fn begin_submission(&mut self) {
        self.error_message = None;
        self.results = None;
        self.display = ResultsView::Empty;
        self.loading = true;
    }

    /// Show a failure
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Hide the loading indicator
    pub fn finish(&mut self) {
        self.loading = false;
    }
}
