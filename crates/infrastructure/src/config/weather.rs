//! Weather feed configuration.

use integration_openweather::OpenWeatherConfig;
use secrecy::SecretString;
use serde::Deserialize;

/// OpenWeatherMap feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherAppConfig {
    /// City the dashboard is built for
    #[serde(default = "default_city")]
    pub city: String,

    /// OpenWeatherMap API key
    ///
    /// Usually supplied via `SKYCAST_WEATHER__API_KEY` rather than the
    /// config file.
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_city() -> String {
    "Hyderabad".to_string()
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            city: default_city(),
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherAppConfig {
    /// Build the integration client configuration from this app config
    #[must_use]
    pub fn to_openweather_config(&self) -> OpenWeatherConfig {
        OpenWeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
