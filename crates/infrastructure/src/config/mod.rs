//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `weather`: OpenWeatherMap feed settings
//!
//! Configuration is loaded from an optional `config` file and overridden
//! by `SKYCAST_*` environment variables. A double underscore separates
//! the section from the key, e.g. `SKYCAST_SERVER__PORT=8080` or
//! `SKYCAST_WEATHER__API_KEY=...`, so keys like `api_key` keep their
//! own underscores.

mod server;
mod weather;

use serde::Deserialize;

pub use server::ServerConfig;
pub use weather::WeatherAppConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather feed configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("weather.city", "Hyderabad")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., SKYCAST_SERVER__PORT)
            .add_source(Self::env_source());

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Environment source mapping `SKYCAST_<SECTION>__<KEY>` variables
    /// onto nested config keys
    ///
    /// The section/key separator is a double underscore so that keys
    /// containing underscores, like `api_key` or `timeout_secs`, stay
    /// addressable.
    fn env_source() -> config::Environment {
        config::Environment::with_prefix("SKYCAST")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}
