//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the forecasting API adapter, configuration loading and the
//! templates the results are rendered with.

pub mod adapters;
pub mod config;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, FormDefaults};
pub use templates::{TemplateConfig, TemplateEngine, TemplateError};
