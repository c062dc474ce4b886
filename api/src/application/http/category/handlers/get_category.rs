use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use coniven_core::domain::category::entities::Category;
use coniven_core::domain::category::ports::CategoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCategoryResponse {
    pub data: Category,
}

#[utoipa::path(
    get,
    path = "/{category_id}",
    tag = "category",
    summary = "Get category",
    params(
        ("category_id" = i32, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = GetCategoryResponse),
        (status = 404, body = ErrorResponse)
    ),
)]
pub async fn get_category(
    Path(category_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<GetCategoryResponse>, ApiError> {
    let category = state
        .service
        .get_category(category_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCategoryResponse { data: category }))
}
