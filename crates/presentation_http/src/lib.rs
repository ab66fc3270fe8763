//! HTTP presentation layer for Skycast
//!
//! Serves the server-rendered dashboard page, a JSON view of the same
//! data, and the usual health endpoints.

pub mod chart;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use chart::{ChartGeometry, build_chart};
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;
