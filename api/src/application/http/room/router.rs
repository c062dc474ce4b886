use super::handlers::create_room::{__path_create_room, create_room};
use super::handlers::delete_room::{__path_delete_room, delete_room};
use super::handlers::get_room::{__path_get_room, get_room};
use super::handlers::get_rooms::{__path_get_rooms, get_rooms};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_rooms, get_room, create_room, delete_room))]
pub struct RoomApiDoc;

pub fn room_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/rooms", state.args.server.root_path),
            get(get_rooms).post(create_room),
        )
        .route(
            &format!("{}/rooms/{{room}}", state.args.server.root_path),
            get(get_room).delete(delete_room),
        )
}
