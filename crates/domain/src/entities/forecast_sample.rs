//! A single three-hourly forecast sample
//!
//! The upstream feed delivers the forecast as a flat list of samples,
//! one every three hours for roughly five days. This entity is the
//! normalized form the aggregation logic operates on.

use crate::value_objects::Humidity;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One three-hourly forecast sample, already converted to metric units
///
/// Timestamps are kept exactly as the upstream feed reports them, with
/// no timezone shifting. Grouping by calendar day therefore follows the
/// feed's own clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Forecast validity time as reported by the feed
    pub timestamp: NaiveDateTime,
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in meters per second
    pub wind_speed: f64,
    /// Accumulated rainfall over the three-hour slot in millimeters
    ///
    /// Zero when the feed omits the rain block, which it does for
    /// dry slots.
    pub rain_3h: f64,
    /// Human-readable conditions, title-cased (e.g. "Light Rain")
    pub description: String,
}

impl ForecastSample {
    /// Format the sample's timestamp for the detail table (e.g. "05 Jun 14:00")
    #[must_use]
    pub fn display_time(&self) -> String {
        self.timestamp.format("%d %b %H:%M").to_string()
    }
}

/// Title-case a description string: uppercase the first letter of each
/// whitespace-separated word, lowercase the rest
///
/// The upstream feed reports conditions in all lowercase ("light rain");
/// the dashboard shows them title-cased ("Light Rain").
#[must_use]
pub fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
