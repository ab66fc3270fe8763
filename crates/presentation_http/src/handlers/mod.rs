//! HTTP request handlers

pub mod dashboard;
pub mod health;
