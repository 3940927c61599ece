//! Forecasting API integration
//!
//! Client for the `/predict` endpoint of the weather forecasting API, which
//! returns model predictions as a JSON array of flat records.

pub mod client;
mod models;

pub use client::{DEFAULT_BASE_URL, HttpPredictClient, PredictClient, PredictConfig, PredictError};
pub use models::{ErrorBody, WelcomeResponse};
