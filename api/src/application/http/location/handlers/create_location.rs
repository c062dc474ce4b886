use crate::application::http::location::validators::CreateLocationValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use coniven_core::domain::location::entities::Location;
use coniven_core::domain::location::ports::LocationService;
use coniven_core::domain::location::value_objects::CreateLocationInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateLocationResponse {
    pub data: Location,
}

#[utoipa::path(
    post,
    path = "",
    tag = "location",
    summary = "Create location",
    description = "Creates a location with a generated slug. The code must be unique.",
    responses(
        (status = 201, body = CreateLocationResponse),
        (status = 400, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    ),
    request_body = CreateLocationValidator
)]
pub async fn create_location(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateLocationValidator>,
) -> Result<Response<CreateLocationResponse>, ApiError> {
    let location = state
        .service
        .create_location(CreateLocationInput {
            code: payload.code,
            name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateLocationResponse { data: location }))
}
