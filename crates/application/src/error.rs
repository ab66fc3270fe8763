//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The upstream weather feed failed or returned an unusable response
    #[error("Weather feed error: {0}")]
    WeatherFeed(String),

    /// The configured city is unknown to the upstream feed
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    /// Upstream rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::RateLimited | ApplicationError::WeatherFeed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_feed_errors_are_retryable() {
        assert!(ApplicationError::WeatherFeed("timeout".to_string()).is_retryable());
        assert!(ApplicationError::RateLimited.is_retryable());
    }

    #[test]
    fn unknown_location_is_not_retryable() {
        assert!(!ApplicationError::UnknownLocation("Atlantis".to_string()).is_retryable());
        assert!(!ApplicationError::Configuration("missing key".to_string()).is_retryable());
    }

    #[test]
    fn domain_error_converts_transparently() {
        let err: ApplicationError = DomainError::malformed_sample(2, "missing dt").into();
        assert_eq!(
            err.to_string(),
            "Malformed forecast sample at index 2: missing dt"
        );
    }
}
