//! Application state shared across handlers

use std::sync::Arc;

use application::DashboardService;
use infrastructure::TemplateEngine;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dashboard service assembling the weather view
    pub dashboard_service: Arc<DashboardService>,
    /// Template engine for the server-rendered pages
    pub templates: TemplateEngine,
}
