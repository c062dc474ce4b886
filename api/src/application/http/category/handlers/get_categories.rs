use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::query_params::{ListingQuery, PageMeta};
use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use coniven_core::domain::category::entities::Category;
use coniven_core::domain::category::ports::CategoryService;
use coniven_core::domain::pagination::PaginationParams;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCategoriesResponse {
    pub data: Vec<Category>,
    pub pagination: PageMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "category",
    summary = "List categories",
    description = "Returns one page of categories. Searches code and name; sortable by `nama`, `kode` and `tgl_dibuat`.",
    params(ListingQuery),
    responses(
        (status = 200, body = GetCategoriesResponse),
        (status = 400, body = ErrorResponse)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    QueryParamsExtractor(values): QueryParamsExtractor,
) -> Result<Response<GetCategoriesResponse>, ApiError> {
    let params = PaginationParams::from_query(
        &values,
        &state.listing.categories,
        &state.listing.limits,
    )?;

    let result = state
        .service
        .list_categories(params.clone())
        .await
        .map_err(ApiError::from)?;

    let pagination = PageMeta::new(&result, &params, &state.service.tables().categories)?;

    Ok(Response::OK(GetCategoriesResponse {
        data: result.data,
        pagination,
    }))
}
