use ahara_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LiveResponse {
    pub status: String,
}

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct ReadyResponse {
    pub data: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness check",
    responses((status = 200, body = LiveResponse))
)]
pub async fn health_live() -> Response<LiveResponse> {
    Response::OK(LiveResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Checks that the database answers.",
    responses(
        (status = 200, body = ReadyResponse),
        (status = 503, body = ApiErrorResponse)
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<ReadyResponse>, ApiError> {
    let status = state.service.readiness().await.map_err(|e| {
        warn!("Readiness check failed: {}", e);
        ApiError::ServiceUnavailable("Database unavailable".to_string())
    })?;

    Ok(Response::OK(ReadyResponse { data: status }))
}

#[derive(OpenApi)]
#[openapi(paths(health_live, health_ready))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(health_live))
        .route(&format!("{}/health/ready", root_path), get(health_ready))
}
