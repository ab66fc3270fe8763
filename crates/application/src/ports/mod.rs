//! Port definitions satisfied by infrastructure adapters

pub mod weather_port;

pub use weather_port::WeatherPort;

#[cfg(test)]
pub use weather_port::MockWeatherPort;
