use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use coniven_core::domain::health::entities::DatabaseHealthStatus;
use coniven_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthReadyResponse {
    pub data: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = HealthReadyResponse),
        (status = 503, body = ErrorResponse)
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<HealthReadyResponse>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    if !status.is_healthy {
        let reason = status
            .error
            .unwrap_or_else(|| "database is not ready".to_string());
        warn!("Readiness check failed: {}", reason);
        return Err(ApiError::ServiceUnavailable(reason));
    }

    Ok(Response::OK(HealthReadyResponse { data: status }))
}
