use crate::application::http::room::validators::CreateRoomValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use coniven_core::domain::room::entities::Room;
use coniven_core::domain::room::ports::RoomService;
use coniven_core::domain::room::value_objects::CreateRoomInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateRoomResponse {
    pub data: Room,
}

#[utoipa::path(
    post,
    path = "",
    tag = "room",
    summary = "Create room",
    description = "Creates a room in an existing location and bumps the location's room count.",
    responses(
        (status = 201, body = CreateRoomResponse),
        (status = 400, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    ),
    request_body = CreateRoomValidator
)]
pub async fn create_room(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateRoomValidator>,
) -> Result<Response<CreateRoomResponse>, ApiError> {
    let room = state
        .service
        .create_room(CreateRoomInput {
            name: payload.name,
            manager: payload.manager,
            location_id: payload.location_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRoomResponse { data: room }))
}
