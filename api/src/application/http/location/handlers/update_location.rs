use crate::application::http::location::validators::UpdateLocationValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use coniven_core::domain::location::entities::Location;
use coniven_core::domain::location::ports::LocationService;
use coniven_core::domain::location::value_objects::UpdateLocationInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateLocationResponse {
    pub data: Location,
}

#[utoipa::path(
    put,
    path = "/{slug}",
    tag = "location",
    summary = "Update location",
    description = "Updates the code and/or name of a location. A new name also changes the slug.",
    params(
        ("slug" = String, Path, description = "Location slug"),
    ),
    responses(
        (status = 200, body = UpdateLocationResponse),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    request_body = UpdateLocationValidator
)]
pub async fn update_location(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateLocationValidator>,
) -> Result<Response<UpdateLocationResponse>, ApiError> {
    let location = state
        .service
        .update_location(UpdateLocationInput {
            slug,
            code: payload.code,
            name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateLocationResponse { data: location }))
}
