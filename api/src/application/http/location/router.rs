use super::handlers::create_location::{__path_create_location, create_location};
use super::handlers::delete_location::{__path_delete_location, delete_location};
use super::handlers::get_location::{__path_get_location, get_location};
use super::handlers::get_locations::{__path_get_locations, get_locations};
use super::handlers::update_location::{__path_update_location, update_location};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_locations,
    get_location,
    create_location,
    update_location,
    delete_location
))]
pub struct LocationApiDoc;

/// `GET`/`PUT` address a location by slug, `DELETE` by id. They share one
/// path segment, so the router names it after neither.
pub fn location_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/locations", state.args.server.root_path),
            get(get_locations).post(create_location),
        )
        .route(
            &format!("{}/locations/{{location}}", state.args.server.root_path),
            get(get_location)
                .put(update_location)
                .delete(delete_location),
        )
}
