//! Form controller
//!
//! Owns the forecast form and the UI state it drives. Each submission
//! builds a query from the form, performs one fetch through the
//! [`ForecastPort`], and updates the results area, error message and
//! loading indicator.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::{ForecastQuery, FormState, ResultsView, UiState};
use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::ports::ForecastPort;
use crate::services::result_renderer::render_results;

/// Shown when a request succeeds with no records
pub const NO_DATA_FOR_CRITERIA: &str = "No forecast data available for the selected criteria.";

/// Controller for the forecast form
///
/// Submissions are numbered. Only the most recent submission may write its
/// outcome; a response that arrives after a newer submission started is
/// dropped.
pub struct FormController {
    port: Arc<dyn ForecastPort>,
    form: RwLock<FormState>,
    state: RwLock<UiState>,
    generation: AtomicU64,
}

impl fmt::Debug for FormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("form", &*self.form.read())
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

impl FormController {
    /// Create a controller with an empty form
    pub fn new(port: Arc<dyn ForecastPort>) -> Self {
        Self::with_form(port, FormState::default())
    }

    /// Create a controller with pre-filled form values
    pub fn with_form(port: Arc<dyn ForecastPort>, form: FormState) -> Self {
        Self {
            port,
            form: RwLock::new(form),
            state: RwLock::new(UiState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Set the city field
    pub fn set_city(&self, city: impl Into<String>) {
        self.form.write().city = city.into();
    }

    /// Set the model field
    pub fn set_model_name(&self, model_name: impl Into<String>) {
        self.form.write().model_name = model_name.into();
    }

    /// Set the weekday selection; an empty value means none
    pub fn set_day_of_week(&self, day: impl Into<String>) {
        self.form.write().day_of_week = day.into();
    }

    /// Handle a change of the forecast type selector
    pub fn on_forecast_type_change(&self, value: &str) {
        let mut form = self.form.write();
        form.change_forecast_type(value);
        debug!(
            forecast_type = %form.forecast_type,
            day_of_week_visible = form.day_of_week_visible,
            "Forecast type changed"
        );
    }

    /// Snapshot of the form
    pub fn form(&self) -> FormState {
        self.form.read().clone()
    }

    /// Snapshot of the UI state
    pub fn state(&self) -> UiState {
        self.state.read().clone()
    }

    /// Query described by the current form values
    pub fn build_query(&self) -> ForecastQuery {
        self.form.read().to_query()
    }

    /// Submit the form
    ///
    /// Never fails: every error ends up as the state's error message. The
    /// loading indicator is cleared when this submission ends, including
    /// when the returned future is dropped before completion, unless a newer
    /// submission has started in the meantime.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> UiState {
        let generation = {
            let mut state = self.state.write();
            state.begin_submission();
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };
        let loading = LoadingGuard {
            controller: self,
            generation,
        };

        let query = self.build_query();
        info!(query = %query.to_query_string(), generation, "Fetching forecast");

        let outcome = self.port.fetch(&query).await;

        {
            let mut state = self.state.write();
            if self.generation.load(Ordering::SeqCst) != generation {
                debug!(generation, "Discarding response of a superseded submission");
                return state.clone();
            }

            match outcome {
                Ok(records) if records.is_empty() => {
                    state.display = ResultsView::Notice(NO_DATA_FOR_CRITERIA.to_string());
                    state.results = Some(records);
                },
                Ok(records) => {
                    state.display = render_results(&records);
                    state.results = Some(records);
                },
                Err(e) => {
                    warn!(error = %e, "Forecast request failed");
                    state.fail(e.user_message());
                },
            }
        }

        drop(loading);
        self.state()
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

/// Clears the loading indicator when a submission ends, however it ends
struct LoadingGuard<'a> {
    controller: &'a FormController,
    generation: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.controller.state.write();
        if self.controller.is_current(self.generation) {
            state.finish();
        }
    }
}
