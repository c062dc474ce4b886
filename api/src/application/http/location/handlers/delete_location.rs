use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use coniven_core::domain::location::ports::LocationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteLocationResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{location_id}",
    tag = "location",
    summary = "Delete location",
    description = "Deletes a location and every room in it.",
    params(
        ("location_id" = Uuid, Path, description = "Location ID"),
    ),
    responses(
        (status = 200, body = DeleteLocationResponse),
        (status = 404, body = ErrorResponse)
    ),
)]
pub async fn delete_location(
    Path(location_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteLocationResponse>, ApiError> {
    state
        .service
        .delete_location(location_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteLocationResponse {
        message: "Location deleted successfully".to_string(),
    }))
}
