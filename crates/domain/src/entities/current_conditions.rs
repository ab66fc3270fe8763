//! Current weather conditions at the configured location

use crate::value_objects::Humidity;
use serde::{Deserialize, Serialize};

/// A snapshot of the weather right now, in metric units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Perceived temperature in degrees Celsius
    pub feels_like: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in meters per second
    pub wind_speed: f64,
    /// Human-readable conditions, title-cased
    pub description: String,
    /// Resolved location name as reported by the upstream feed
    pub location_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let current = CurrentConditions {
            temperature: 31.2,
            feels_like: 34.8,
            humidity: Humidity::clamped(74),
            wind_speed: 4.1,
            description: "Haze".to_string(),
            location_name: "Hyderabad".to_string(),
        };
        let json = serde_json::to_string(&current).expect("serialize");
        let back: CurrentConditions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, current);
    }
}
