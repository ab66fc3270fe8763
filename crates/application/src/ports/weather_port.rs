//! Weather feed port
//!
//! Defines the interface the dashboard needs from a weather data source:
//! the conditions right now, plus the five-day three-hourly forecast.

use async_trait::async_trait;
use domain::entities::{CurrentConditions, ForecastSample};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather feed operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch the current conditions for a city
    async fn current_conditions(&self, city: &str)
    -> Result<CurrentConditions, ApplicationError>;

    /// Fetch the three-hourly forecast for a city, roughly five days ahead
    ///
    /// Samples are returned in the feed's own chronological order.
    async fn forecast_samples(&self, city: &str)
    -> Result<Vec<ForecastSample>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
