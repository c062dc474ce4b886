use crate::application::http::category::validators::UpdateCategoryValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use coniven_core::domain::category::entities::Category;
use coniven_core::domain::category::ports::CategoryService;
use coniven_core::domain::category::value_objects::UpdateCategoryInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateCategoryResponse {
    pub data: Category,
}

#[utoipa::path(
    put,
    path = "/{category_id}",
    tag = "category",
    summary = "Update category",
    description = "Updates the code and/or name of a category. Blank fields are left unchanged.",
    params(
        ("category_id" = i32, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = UpdateCategoryResponse),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    request_body = UpdateCategoryValidator
)]
pub async fn update_category(
    Path(category_id): Path<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateCategoryValidator>,
) -> Result<Response<UpdateCategoryResponse>, ApiError> {
    let category = state
        .service
        .update_category(UpdateCategoryInput {
            id: category_id,
            code: payload.code,
            name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateCategoryResponse { data: category }))
}
