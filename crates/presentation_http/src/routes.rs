//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Server-rendered dashboard
        .route("/", get(handlers::dashboard::dashboard_page))
        // Dashboard data as JSON (v1)
        .route("/api/v1/dashboard", get(handlers::dashboard::dashboard_json))
        // Attach state
        .with_state(state)
}
