//! Weather adapter - Implements WeatherPort using integration_openweather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::DomainError;
use domain::entities::{CurrentConditions, ForecastSample, title_case};
use domain::value_objects::Humidity;
use integration_openweather::{
    CurrentObservation, ForecastSlot, OpenWeatherApi, OpenWeatherClient, OpenWeatherError,
};
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::config::WeatherAppConfig;

/// Adapter for the OpenWeatherMap feed
pub struct WeatherAdapter {
    client: Box<dyn OpenWeatherApi>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter").finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Create a new adapter from the application config
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client
    /// fails to initialize.
    pub fn from_config(config: &WeatherAppConfig) -> Result<Self, ApplicationError> {
        let api_key = config
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().to_owned())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ApplicationError::Configuration(
                    "weather.api_key is required (set SKYCAST_WEATHER__API_KEY)".to_string(),
                )
            })?;

        let client = OpenWeatherClient::new(config.to_openweather_config(), api_key)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        Ok(Self {
            client: Box::new(client),
        })
    }

    /// Create an adapter around an existing client, mainly for tests
    #[must_use]
    pub fn with_client(client: Box<dyn OpenWeatherApi>) -> Self {
        Self { client }
    }

    /// Map an integration error to an application error
    fn map_error(err: OpenWeatherError) -> ApplicationError {
        match err {
            OpenWeatherError::ConnectionFailed(e)
            | OpenWeatherError::RequestFailed(e)
            | OpenWeatherError::ParseError(e)
            | OpenWeatherError::ServiceUnavailable(e) => ApplicationError::WeatherFeed(e),
            OpenWeatherError::MalformedSlot { index, reason } => {
                ApplicationError::Domain(DomainError::MalformedSample { index, reason })
            },
            OpenWeatherError::Unauthorized => {
                ApplicationError::Configuration("weather API key rejected".to_string())
            },
            OpenWeatherError::UnknownCity(city) => ApplicationError::UnknownLocation(city),
            OpenWeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert a parsed observation into the domain entity
    fn map_current(observation: CurrentObservation) -> CurrentConditions {
        CurrentConditions {
            temperature: observation.temperature,
            feels_like: observation.feels_like,
            humidity: Humidity::clamped(observation.humidity),
            wind_speed: observation.wind_speed,
            description: title_case(&observation.description),
            location_name: observation.location_name,
        }
    }

    /// Convert one forecast slot, validating humidity against its position
    fn map_slot(index: usize, slot: ForecastSlot) -> Result<ForecastSample, DomainError> {
        let humidity = Humidity::new(slot.humidity)
            .map_err(|e| DomainError::malformed_sample(index, e.to_string()))?;

        Ok(ForecastSample {
            timestamp: slot.time,
            temperature: slot.temperature,
            humidity,
            wind_speed: slot.wind_speed,
            rain_3h: slot.rain_3h,
            description: title_case(&slot.description),
        })
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_conditions(
        &self,
        city: &str,
    ) -> Result<CurrentConditions, ApplicationError> {
        let observation = self
            .client
            .current(city)
            .await
            .map_err(Self::map_error)?;

        debug!(
            temperature = observation.temperature,
            description = %observation.description,
            "Retrieved current conditions"
        );

        Ok(Self::map_current(observation))
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast_samples(
        &self,
        city: &str,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let feed = self
            .client
            .forecast(city)
            .await
            .map_err(Self::map_error)?;

        debug!(slots = feed.slots.len(), "Retrieved forecast feed");

        let samples = feed
            .slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| Self::map_slot(index, slot))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use secrecy::SecretString;

    fn slot(humidity: u8) -> ForecastSlot {
        ForecastSlot {
            time: NaiveDate::from_ymd_opt(2025, 6, 5)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            temperature: 28.0,
            humidity,
            wind_speed: 3.2,
            rain_3h: 0.5,
            description: "light rain".to_string(),
        }
    }

    #[test]
    fn from_config_requires_api_key() {
        let config = WeatherAppConfig::default();
        let err = WeatherAdapter::from_config(&config).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn from_config_rejects_empty_api_key() {
        let config = WeatherAppConfig {
            api_key: Some(SecretString::from("")),
            ..Default::default()
        };
        let err = WeatherAdapter::from_config(&config).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn from_config_accepts_api_key() {
        let config = WeatherAppConfig {
            api_key: Some(SecretString::from("owm-key")),
            ..Default::default()
        };
        assert!(WeatherAdapter::from_config(&config).is_ok());
    }

    #[test]
    fn map_slot_title_cases_the_description() {
        let sample = WeatherAdapter::map_slot(0, slot(70)).expect("sample");
        assert_eq!(sample.description, "Light Rain");
        assert_eq!(sample.humidity.value(), 70);
        assert!((sample.rain_3h - 0.5).abs() < 1e-9);
    }

    #[test]
    fn map_slot_rejects_out_of_range_humidity() {
        let err = WeatherAdapter::map_slot(4, slot(130)).unwrap_err();
        assert!(matches!(err, DomainError::MalformedSample { index: 4, .. }));
    }

    #[test]
    fn map_current_clamps_humidity_and_title_cases() {
        let conditions = WeatherAdapter::map_current(CurrentObservation {
            temperature: 31.2,
            feels_like: 34.8,
            humidity: 120,
            wind_speed: 4.1,
            description: "haze".to_string(),
            location_name: "Hyderabad".to_string(),
        });
        assert_eq!(conditions.humidity.value(), 100);
        assert_eq!(conditions.description, "Haze");
    }

    #[test]
    fn map_error_rate_limited() {
        let err = WeatherAdapter::map_error(OpenWeatherError::RateLimitExceeded);
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[test]
    fn map_error_malformed_slot_becomes_domain_error() {
        let err = WeatherAdapter::map_error(OpenWeatherError::MalformedSlot {
            index: 7,
            reason: "empty weather array".to_string(),
        });
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MalformedSample { index: 7, .. })
        ));
    }

    #[test]
    fn map_error_unknown_city() {
        let err = WeatherAdapter::map_error(OpenWeatherError::UnknownCity("Atlantis".to_string()));
        assert!(matches!(err, ApplicationError::UnknownLocation(city) if city == "Atlantis"));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherAdapter>();
    }
}
