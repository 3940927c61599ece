//! Result renderer
//!
//! Turns forecast records into the table shown in the results area.

use domain::{ForecastRecord, ResultsView, TableView};
use tracing::debug;

/// Shown when the renderer is handed no records
pub const NO_DATA_RECEIVED: &str = "No forecast data received.";

/// Build the results view for a set of records
///
/// Columns are the keys of the first record, in its order. Every record is
/// rendered against that column list: keys that only appear in later records
/// are not shown, and a column missing from a record renders as empty text.
#[must_use]
pub fn render_results(records: &[ForecastRecord]) -> ResultsView {
    let Some(first) = records.first() else {
        return ResultsView::Notice(NO_DATA_RECEIVED.to_string());
    };

    let columns: Vec<String> = first.columns().map(str::to_string).collect();
    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.display_value(column))
                .collect()
        })
        .collect::<Vec<Vec<String>>>();

    debug!(columns = columns.len(), rows = rows.len(), "Rendered results table");
    ResultsView::Table(TableView { columns, rows })
}
