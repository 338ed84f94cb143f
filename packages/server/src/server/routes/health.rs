use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    upstream: UpstreamHealth,
}

#[derive(Serialize)]
pub struct UpstreamHealth {
    base_url: String,
}

/// Health check endpoint
///
/// The front end holds no state of its own; this reports the process as up
/// and names the upstream it forwards to.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            upstream: UpstreamHealth {
                base_url: state.client.base_url().to_string(),
            },
        }),
    )
}
