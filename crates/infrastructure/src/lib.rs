//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer: the
//! OpenWeatherMap adapter, application configuration, and the HTML
//! template engine for the dashboard page.

pub mod adapters;
pub mod config;
pub mod templates;

pub use adapters::WeatherAdapter;
pub use config::{AppConfig, ServerConfig, WeatherAppConfig};
pub use templates::{TemplateContext, TemplateEngine, TemplateError};
