//! Dashboard service
//!
//! Orchestrates the weather port and the domain aggregation into one
//! renderable view: current conditions, per-day summary cards, and the
//! near-term detail table.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::entities::CurrentConditions;
use domain::{DETAIL_WINDOW_LEN, build_daily_summaries, build_detail_window};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// Everything the dashboard page needs, precomputed and display-ready
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    /// City the dashboard was built for
    pub city: String,
    /// When the view was assembled
    pub generated_at: DateTime<Utc>,
    /// Conditions right now
    pub current: CurrentConditions,
    /// One card per forecast day, in ascending date order
    pub days: Vec<DayCard>,
    /// The leading three-hourly slots for the detail table
    pub detail: Vec<DetailRow>,
}

/// A single day card on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCard {
    /// Card header, e.g. "Thu 05 Jun"
    pub label: String,
    /// One-line digest, e.g. "Avg 29.5°C • Rain 1.7 mm"
    pub digest: String,
    /// Temperature span, e.g. "28.0° / 31.0°"
    pub temp_span: String,
    /// Mean temperature in degrees Celsius
    pub mean_temp: f64,
    /// Lowest temperature of the day
    pub min_temp: f64,
    /// Highest temperature of the day
    pub max_temp: f64,
    /// Total rainfall in millimeters
    pub total_rain: f64,
    /// Mean relative humidity in percent
    pub mean_humidity: u8,
}

/// One row of the three-hourly detail table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRow {
    /// Slot time, e.g. "05 Jun 14:00"
    pub time: String,
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Title-cased conditions
    pub description: String,
    /// Rainfall for the slot in millimeters
    pub rain_3h: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed in meters per second
    pub wind_speed: f64,
}

/// Assembles the dashboard view from the weather feed
#[derive(Clone)]
pub struct DashboardService {
    port: Arc<dyn WeatherPort>,
    city: String,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("city", &self.city)
            .finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Create a new dashboard service for a configured city
    #[must_use]
    pub fn new(port: Arc<dyn WeatherPort>, city: impl Into<String>) -> Self {
        Self {
            port,
            city: city.into(),
        }
    }

    /// The city this service builds dashboards for
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Fetch current conditions and the forecast, then aggregate into a view
    ///
    /// The current conditions are fetched first; a failure there aborts
    /// the whole build so the page shows an error instead of a partial
    /// dashboard.
    #[instrument(skip(self), fields(city = %self.city))]
    pub async fn build_dashboard(&self) -> Result<DashboardView, ApplicationError> {
        let current = self.port.current_conditions(&self.city).await?;
        let samples = self.port.forecast_samples(&self.city).await?;

        let days = build_daily_summaries(&samples)
            .into_iter()
            .map(|summary| DayCard {
                label: summary.display_label(),
                digest: summary.digest_line(),
                temp_span: summary.temp_span(),
                mean_temp: summary.mean_temp,
                min_temp: summary.min_temp,
                max_temp: summary.max_temp,
                total_rain: summary.total_rain,
                mean_humidity: summary.mean_humidity.value(),
            })
            .collect();

        let detail = build_detail_window(&samples, DETAIL_WINDOW_LEN)
            .iter()
            .map(|sample| DetailRow {
                time: sample.display_time(),
                temperature: sample.temperature,
                description: sample.description.clone(),
                rain_3h: sample.rain_3h,
                humidity: sample.humidity.value(),
                wind_speed: sample.wind_speed,
            })
            .collect();

        Ok(DashboardView {
            city: self.city.clone(),
            generated_at: Utc::now(),
            current,
            days,
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockWeatherPort;
    use chrono::NaiveDate;
    use domain::entities::ForecastSample;
    use domain::value_objects::Humidity;

    fn current() -> CurrentConditions {
        CurrentConditions {
            temperature: 31.2,
            feels_like: 34.8,
            humidity: Humidity::clamped(74),
            wind_speed: 4.1,
            description: "Haze".to_string(),
            location_name: "Hyderabad".to_string(),
        }
    }

    fn sample(day: u32, hour: u32, temperature: f64, rain_3h: f64) -> ForecastSample {
        ForecastSample {
            timestamp: NaiveDate::from_ymd_opt(2025, 6, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            temperature,
            humidity: Humidity::clamped(70),
            wind_speed: 3.0,
            rain_3h,
            description: "Light Rain".to_string(),
        }
    }

    #[tokio::test]
    async fn build_dashboard_assembles_cards_and_detail() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .withf(|city| city == "Hyderabad")
            .returning(|_| Ok(current()));
        port.expect_forecast_samples().returning(|_| {
            Ok(vec![
                sample(5, 9, 28.0, 0.5),
                sample(5, 12, 31.0, 1.2),
                sample(6, 9, 26.0, 2.3),
                sample(6, 12, 29.0, 0.0),
            ])
        });

        let service = DashboardService::new(Arc::new(port), "Hyderabad");
        let view = service.build_dashboard().await.expect("dashboard");

        assert_eq!(view.city, "Hyderabad");
        assert_eq!(view.current.description, "Haze");
        assert_eq!(view.days.len(), 2);
        assert_eq!(view.days[0].label, "Thu 05 Jun");
        assert_eq!(view.days[0].digest, "Avg 29.5°C \u{2022} Rain 1.7 mm");
        assert_eq!(view.days[1].label, "Fri 06 Jun");
        assert!((view.days[1].total_rain - 2.3).abs() < 1e-9);
        assert_eq!(view.detail.len(), 4);
        assert_eq!(view.detail[0].time, "05 Jun 09:00");
        assert_eq!(view.detail[0].description, "Light Rain");
    }

    #[tokio::test]
    async fn detail_is_capped_at_twelve_rows() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions().returning(|_| Ok(current()));
        port.expect_forecast_samples().returning(|_| {
            Ok((0..40)
                .map(|i| sample(5 + i / 8, (i % 8) * 3, 27.0, 0.0))
                .collect())
        });

        let service = DashboardService::new(Arc::new(port), "Hyderabad");
        let view = service.build_dashboard().await.expect("dashboard");

        assert_eq!(view.detail.len(), 12);
        assert_eq!(view.days.len(), 5);
    }

    #[tokio::test]
    async fn empty_forecast_yields_empty_cards() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions().returning(|_| Ok(current()));
        port.expect_forecast_samples().returning(|_| Ok(vec![]));

        let service = DashboardService::new(Arc::new(port), "Hyderabad");
        let view = service.build_dashboard().await.expect("dashboard");

        assert!(view.days.is_empty());
        assert!(view.detail.is_empty());
    }

    #[tokio::test]
    async fn current_conditions_failure_aborts_the_build() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .returning(|_| Err(ApplicationError::WeatherFeed("connect timeout".to_string())));
        port.expect_forecast_samples().never();

        let service = DashboardService::new(Arc::new(port), "Hyderabad");
        let err = service.build_dashboard().await.unwrap_err();

        assert!(matches!(err, ApplicationError::WeatherFeed(_)));
    }

    #[tokio::test]
    async fn unknown_city_propagates_unchanged() {
        let mut port = MockWeatherPort::new();
        port.expect_current_conditions()
            .returning(|_| Err(ApplicationError::UnknownLocation("Atlantis".to_string())));
        port.expect_forecast_samples().never();

        let service = DashboardService::new(Arc::new(port), "Atlantis");
        let err = service.build_dashboard().await.unwrap_err();

        assert!(matches!(err, ApplicationError::UnknownLocation(city) if city == "Atlantis"));
    }

    #[test]
    fn service_debug_hides_the_port() {
        let port = MockWeatherPort::new();
        let service = DashboardService::new(Arc::new(port), "Hyderabad");
        let debug = format!("{service:?}");
        assert!(debug.contains("Hyderabad"));
    }
}
