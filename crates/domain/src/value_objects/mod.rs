//! Value Objects - Immutable, identity-less domain primitives

mod day_of_week;
mod forecast_type;

pub use day_of_week::DayOfWeek;
pub use forecast_type::ForecastType;
