//! Application layer - Use cases and orchestration
//!
//! Defines the weather port the infrastructure must satisfy and the
//! dashboard service that turns raw feed data into a renderable view.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
