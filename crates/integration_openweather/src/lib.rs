//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current conditions and the five-day/three-hour forecast in
//! metric units. Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherApi, OpenWeatherClient, OpenWeatherConfig, OpenWeatherError};
pub use models::{CurrentObservation, ForecastFeed, ForecastSlot};
