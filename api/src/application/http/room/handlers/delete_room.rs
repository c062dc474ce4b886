use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use coniven_core::domain::room::ports::RoomService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteRoomResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{room_id}",
    tag = "room",
    summary = "Delete room",
    params(
        ("room_id" = Uuid, Path, description = "Room ID"),
    ),
    responses(
        (status = 200, body = DeleteRoomResponse),
        (status = 404, body = ErrorResponse)
    ),
)]
pub async fn delete_room(
    Path(room_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteRoomResponse>, ApiError> {
    state
        .service
        .delete_room(room_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteRoomResponse {
        message: "Room deleted successfully".to_string(),
    }))
}
