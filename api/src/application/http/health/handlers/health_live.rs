use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use coniven_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthLiveResponse {
    pub status: String,
    pub database_latency_ms: u64,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    description = "Answers as long as the process can reach the database.",
    responses(
        (status = 200, body = HealthLiveResponse),
        (status = 500, body = ErrorResponse)
    ),
)]
pub async fn health_live(
    State(state): State<AppState>,
) -> Result<Response<HealthLiveResponse>, ApiError> {
    let latency = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthLiveResponse {
        status: "ok".to_string(),
        database_latency_ms: latency,
    }))
}
