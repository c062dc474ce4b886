use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use coniven_core::domain::category::ports::CategoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCategoryResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{category_id}",
    tag = "category",
    summary = "Delete category",
    params(
        ("category_id" = i32, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = DeleteCategoryResponse),
        (status = 404, body = ErrorResponse)
    ),
)]
pub async fn delete_category(
    Path(category_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<DeleteCategoryResponse>, ApiError> {
    state
        .service
        .delete_category(category_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCategoryResponse {
        message: "Category deleted successfully".to_string(),
    }))
}
