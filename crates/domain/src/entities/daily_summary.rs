//! Per-day aggregate of forecast samples

use crate::value_objects::Humidity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for all forecast samples falling on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The calendar day the samples fall on
    pub date: NaiveDate,
    /// Arithmetic mean of the day's temperatures in degrees Celsius
    pub mean_temp: f64,
    /// Lowest temperature of the day
    pub min_temp: f64,
    /// Highest temperature of the day
    pub max_temp: f64,
    /// Total rainfall across the day's three-hour slots in millimeters
    pub total_rain: f64,
    /// Mean relative humidity, rounded to the nearest whole percent
    pub mean_humidity: Humidity,
}

impl DailySummary {
    /// Format the date for card headers (e.g. "Thu 05 Jun")
    #[must_use]
    pub fn display_label(&self) -> String {
        crate::aggregate::format_display_label(self.date)
    }

    /// One-line digest for the day card (e.g. "Avg 29.5°C • Rain 1.7 mm")
    #[must_use]
    pub fn digest_line(&self) -> String {
        format!(
            "Avg {:.1}°C \u{2022} Rain {:.1} mm",
            self.mean_temp, self.total_rain
        )
    }

    /// Temperature span shown under the digest (e.g. "28.0° / 31.0°")
    #[must_use]
    pub fn temp_span(&self) -> String {
        format!("{:.1}° / {:.1}°", self.min_temp, self.max_temp)
    }
}
