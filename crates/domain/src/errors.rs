//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A forecast sample from the upstream feed is missing a required field
    /// or carries a value that cannot be interpreted
    #[error("Malformed forecast sample at index {index}: {reason}")]
    MalformedSample { index: usize, reason: String },
}

impl DomainError {
    /// Create a malformed sample error for the sample at `index`
    pub fn malformed_sample(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedSample {
            index,
            reason: reason.into(),
        }
    }
}
