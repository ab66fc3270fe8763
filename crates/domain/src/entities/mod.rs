//! Domain entities

pub mod current_conditions;
pub mod daily_summary;
pub mod forecast_sample;

pub use current_conditions::CurrentConditions;
pub use daily_summary::DailySummary;
pub use forecast_sample::{ForecastSample, title_case};
