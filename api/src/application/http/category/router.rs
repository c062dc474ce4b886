use super::handlers::create_category::{__path_create_category, create_category};
use super::handlers::delete_category::{__path_delete_category, delete_category};
use super::handlers::get_categories::{__path_get_categories, get_categories};
use super::handlers::get_category::{__path_get_category, get_category};
use super::handlers::update_category::{__path_update_category, update_category};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_categories,
    get_category,
    create_category,
    update_category,
    delete_category
))]
pub struct CategoryApiDoc;

pub fn category_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/categories", state.args.server.root_path),
            get(get_categories).post(create_category),
        )
        .route(
            &format!("{}/categories/{{category_id}}", state.args.server.root_path),
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}
