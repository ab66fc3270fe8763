//! Wire models for the OpenWeatherMap API
//!
//! Mirrors the JSON shapes of the `/weather` and `/forecast` endpoints,
//! plus the parsed forms the client hands to callers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The `main` block shared by both endpoints
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MainBlock {
    /// Temperature in the requested units (Celsius for metric)
    pub temp: f64,
    /// Perceived temperature; the forecast endpoint reports it too but
    /// the dashboard only uses it for current conditions
    #[serde(default)]
    pub feels_like: Option<f64>,
    /// Relative humidity in percent
    pub humidity: u8,
}

/// The `wind` block
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WindBlock {
    /// Wind speed in m/s for metric units
    pub speed: f64,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WeatherBlock {
    /// Lowercase condition text, e.g. "light rain"
    pub description: String,
}

/// The optional `rain` block of a forecast slot
///
/// Absent entirely for dry slots.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RainBlock {
    /// Rainfall over the three-hour slot in millimeters
    #[serde(rename = "3h", default)]
    pub three_hour: f64,
}

/// Response shape of `/weather`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentResponse {
    pub main: MainBlock,
    pub wind: WindBlock,
    pub weather: Vec<WeatherBlock>,
    /// Resolved location name
    pub name: String,
}

/// One slot of the `/forecast` list
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastItem {
    /// Forecast validity time as a unix timestamp
    pub dt: i64,
    pub main: MainBlock,
    pub wind: WindBlock,
    pub weather: Vec<WeatherBlock>,
    #[serde(default)]
    pub rain: Option<RainBlock>,
}

/// The `city` block of `/forecast`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CityBlock {
    pub name: String,
}

/// Response shape of `/forecast`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    pub list: Vec<ForecastItem>,
    pub city: CityBlock,
}

/// Current conditions as parsed from `/weather`
#[derive(Debug, Clone, Serialize)]
pub struct CurrentObservation {
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Perceived temperature in degrees Celsius
    pub feels_like: f64,
    /// Relative humidity in percent, as reported by the feed
    pub humidity: u8,
    /// Wind speed in meters per second
    pub wind_speed: f64,
    /// Lowercase condition text as reported by the feed
    pub description: String,
    /// Resolved location name
    pub location_name: String,
}

/// One three-hourly slot as parsed from `/forecast`
#[derive(Debug, Clone, Serialize)]
pub struct ForecastSlot {
    /// Forecast validity time, decoded from the slot's unix timestamp
    pub time: NaiveDateTime,
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent, as reported by the feed
    pub humidity: u8,
    /// Wind speed in meters per second
    pub wind_speed: f64,
    /// Rainfall over the slot in millimeters, zero when the feed omits it
    pub rain_3h: f64,
    /// Lowercase condition text as reported by the feed
    pub description: String,
}

/// The parsed `/forecast` response
#[derive(Debug, Clone, Serialize)]
pub struct ForecastFeed {
    /// Resolved location name
    pub location_name: String,
    /// Slots in the feed's own chronological order
    pub slots: Vec<ForecastSlot>,
}
