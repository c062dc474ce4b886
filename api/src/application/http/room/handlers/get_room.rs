use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use coniven_core::domain::room::entities::Room;
use coniven_core::domain::room::ports::RoomService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRoomResponse {
    pub data: Room,
}

#[utoipa::path(
    get,
    path = "/{slug}",
    tag = "room",
    summary = "Get room",
    params(
        ("slug" = String, Path, description = "Room slug"),
    ),
    responses(
        (status = 200, body = GetRoomResponse),
        (status = 404, body = ErrorResponse)
    ),
)]
pub async fn get_room(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetRoomResponse>, ApiError> {
    let room = state
        .service
        .get_room_by_slug(&slug)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRoomResponse { data: room }))
}
