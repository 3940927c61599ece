//! Application layer - Use cases and orchestration
//!
//! Contains the form controller and result renderer, plus the port through
//! which forecasts are fetched. Adapters in the infrastructure layer
//! implement the port.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
