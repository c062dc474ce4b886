use crate::application::http::category::validators::CreateCategoryValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use coniven_core::domain::category::entities::Category;
use coniven_core::domain::category::ports::CategoryService;
use coniven_core::domain::category::value_objects::CreateCategoryInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCategoryResponse {
    pub data: Category,
}

#[utoipa::path(
    post,
    path = "",
    tag = "category",
    summary = "Create category",
    description = "Creates a category. Code and name must both be unique.",
    responses(
        (status = 201, body = CreateCategoryResponse),
        (status = 400, body = ErrorResponse),
        (status = 422, body = ErrorResponse)
    ),
    request_body = CreateCategoryValidator
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCategoryValidator>,
) -> Result<Response<CreateCategoryResponse>, ApiError> {
    let category = state
        .service
        .create_category(CreateCategoryInput {
            code: payload.code,
            name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCategoryResponse { data: category }))
}
