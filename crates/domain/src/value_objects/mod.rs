//! Value objects for the Skycast domain

pub mod humidity;

pub use humidity::{Humidity, InvalidHumidity};
