//! Dashboard handlers
//!
//! Serves the rendered HTML dashboard at the root path and the same
//! view as JSON under `/api/v1/dashboard`.

use application::DashboardView;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use infrastructure::TemplateContext;
use tracing::{error, instrument};

use crate::{chart::build_chart, error::ApiError, state::AppState};

/// Render the HTML dashboard page
#[instrument(skip(state))]
pub async fn dashboard_page(State(state): State<AppState>) -> Response {
    match state.dashboard_service.build_dashboard().await {
        Ok(view) => {
            let chart = build_chart(&view.days);
            let mut context = TemplateContext::new();
            context.insert("view", &view);
            context.insert("chart", &chart);
            match state.templates.render_dashboard(&context) {
                Ok(html) => Html(html).into_response(),
                Err(err) => {
                    error!(error = %err, "Dashboard template rendering failed");
                    ApiError::Internal("Template rendering failed".to_string()).into_response()
                }
            }
        }
        Err(err) => {
            let api_error = ApiError::from(err);
            let status = api_error.status();
            error_page(&state, status, &api_error)
        }
    }
}

/// Return the dashboard view as JSON
#[instrument(skip(state))]
pub async fn dashboard_json(
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, ApiError> {
    let view = state.dashboard_service.build_dashboard().await?;
    Ok(Json(view))
}

/// Render the error page with the failure's status code
///
/// Falls back to the JSON error body when the error template itself
/// fails to render.
fn error_page(state: &AppState, status: StatusCode, api_error: &ApiError) -> Response {
    match state.templates.render_error(&api_error.to_string()) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!(error = %err, "Error template rendering failed");
            (
                status,
                Json(crate::error::ErrorResponse {
                    error: api_error.to_string(),
                    code: api_error.code().to_string(),
                }),
            )
                .into_response()
        }
    }
}
