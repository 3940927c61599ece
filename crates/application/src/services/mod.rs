//! Application services - Use case implementations

mod form_controller;
mod result_renderer;

pub use form_controller::{FormController, NO_DATA_FOR_CRITERIA};
pub use result_renderer::{NO_DATA_RECEIVED, render_results};
