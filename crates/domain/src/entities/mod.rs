//! Domain entities - the query, its records, and the form they flow through

mod forecast_query;
mod forecast_record;
mod form_state;
mod ui_state;

pub use forecast_query::ForecastQuery;
pub use forecast_record::ForecastRecord;
pub use form_state::FormState;
pub use ui_state::{ResultsView, TableView, UiState};
