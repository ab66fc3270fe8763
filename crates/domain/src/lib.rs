//! Domain layer for Skycast
//!
//! Contains the forecast entities, value objects, and the pure aggregation
//! logic that turns a three-hourly forecast feed into daily summaries.
//! This layer has no external dependencies beyond serialization and time.

pub mod aggregate;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use aggregate::{
    DETAIL_WINDOW_LEN, build_daily_summaries, build_detail_window, format_display_label,
};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
