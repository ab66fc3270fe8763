//! OpenWeatherMap HTTP client
//!
//! Fetches current conditions from `/weather` and the five-day forecast
//! from `/forecast`, always in metric units.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    CurrentObservation, CurrentResponse, ForecastFeed, ForecastItem, ForecastResponse, ForecastSlot,
};

/// OpenWeatherMap client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// Connection to the API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the API failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A forecast slot is missing a required field or carries an
    /// uninterpretable value
    #[error("Malformed forecast slot at index {index}: {reason}")]
    MalformedSlot { index: usize, reason: String },

    /// The API key was rejected
    #[error("API key rejected")]
    Unauthorized,

    /// The requested city is unknown to the API
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// OpenWeatherMap client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for fetching OpenWeatherMap data
#[async_trait]
pub trait OpenWeatherApi: Send + Sync {
    /// Get current conditions for a city
    async fn current(&self, city: &str) -> Result<CurrentObservation, OpenWeatherError>;

    /// Get the five-day/three-hour forecast for a city
    async fn forecast(&self, city: &str) -> Result<ForecastFeed, OpenWeatherError>;
}

/// OpenWeatherMap HTTP client implementation
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
    api_key: String,
}

impl std::fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration and API key
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig, api_key: String) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Issue a GET against one of the two endpoints and check the status
    async fn fetch(&self, endpoint: &str, city: &str) -> Result<reqwest::Response, OpenWeatherError> {
        let url = format!("{}/{endpoint}", self.config.base_url);
        debug!(endpoint, city, "Fetching from OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        match status {
            reqwest::StatusCode::UNAUTHORIZED => Err(OpenWeatherError::Unauthorized),
            reqwest::StatusCode::NOT_FOUND => Err(OpenWeatherError::UnknownCity(city.to_string())),
            reqwest::StatusCode::TOO_MANY_REQUESTS => Err(OpenWeatherError::RateLimitExceeded),
            s if s.is_server_error() => {
                Err(OpenWeatherError::ServiceUnavailable(format!("HTTP {s}")))
            },
            s if !s.is_success() => Err(OpenWeatherError::RequestFailed(format!("HTTP {s}"))),
            _ => Ok(response),
        }
    }

    /// Parse one forecast slot, reporting its position on failure
    fn parse_slot(index: usize, item: &ForecastItem) -> Result<ForecastSlot, OpenWeatherError> {
        let time = DateTime::from_timestamp(item.dt, 0)
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| OpenWeatherError::MalformedSlot {
                index,
                reason: format!("timestamp {} out of range", item.dt),
            })?;

        let description = item
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or_else(|| OpenWeatherError::MalformedSlot {
                index,
                reason: "empty weather array".to_string(),
            })?;

        Ok(ForecastSlot {
            time,
            temperature: item.main.temp,
            humidity: item.main.humidity,
            wind_speed: item.wind.speed,
            rain_3h: item.rain.as_ref().map_or(0.0, |r| r.three_hour),
            description,
        })
    }
}

#[async_trait]
impl OpenWeatherApi for OpenWeatherClient {
    #[instrument(skip(self), fields(city = %city))]
    async fn current(&self, city: &str) -> Result<CurrentObservation, OpenWeatherError> {
        let response = self.fetch("weather", city).await?;

        let body: CurrentResponse = response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))?;

        let description = body
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or_else(|| OpenWeatherError::ParseError("empty weather array".to_string()))?;

        Ok(CurrentObservation {
            temperature: body.main.temp,
            feels_like: body.main.feels_like.unwrap_or(body.main.temp),
            humidity: body.main.humidity,
            wind_speed: body.wind.speed,
            description,
            location_name: body.name,
        })
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast(&self, city: &str) -> Result<ForecastFeed, OpenWeatherError> {
        let response = self.fetch("forecast", city).await?;

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))?;

        let slots = body
            .list
            .iter()
            .enumerate()
            .map(|(index, item)| Self::parse_slot(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(slots = slots.len(), "Parsed forecast feed");

        Ok(ForecastFeed {
            location_name: body.city.name,
            slots,
        })
    }
}
