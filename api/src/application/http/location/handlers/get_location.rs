use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use coniven_core::domain::location::entities::LocationDetail;
use coniven_core::domain::location::ports::LocationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetLocationResponse {
    pub data: LocationDetail,
}

#[utoipa::path(
    get,
    path = "/{slug}",
    tag = "location",
    summary = "Get location",
    description = "Returns a location together with its rooms.",
    params(
        ("slug" = String, Path, description = "Location slug"),
    ),
    responses(
        (status = 200, body = GetLocationResponse),
        (status = 404, body = ErrorResponse)
    ),
)]
pub async fn get_location(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetLocationResponse>, ApiError> {
    let detail = state
        .service
        .get_location_detail(&slug)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetLocationResponse { data: detail }))
}
