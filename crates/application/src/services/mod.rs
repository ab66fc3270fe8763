//! Application services

pub mod dashboard_service;

pub use dashboard_service::{DashboardService, DashboardView, DayCard, DetailRow};
