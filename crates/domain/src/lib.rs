//! Domain layer for the forecast viewer
//!
//! Contains the forecast query, the records returned by the forecasting API,
//! and the state of the form and its results area.
//! This layer performs no I/O.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
