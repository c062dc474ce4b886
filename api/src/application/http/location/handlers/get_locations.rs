use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::query_params::{ListingQuery, PageMeta};
use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use coniven_core::domain::location::entities::Location;
use coniven_core::domain::location::ports::LocationService;
use coniven_core::domain::pagination::PaginationParams;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetLocationsResponse {
    pub data: Vec<Location>,
    pub pagination: PageMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "location",
    summary = "List locations",
    description = "Returns one page of locations. Searches code and name; sortable by `nama`, `kode`, `tgl_dibuat` and `jumlah_ruangan`.",
    params(
        ListingQuery,
        ("jr" = Option<i64>, Query, description = "Exact number of rooms"),
    ),
    responses(
        (status = 200, body = GetLocationsResponse),
        (status = 400, body = ErrorResponse)
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
    QueryParamsExtractor(values): QueryParamsExtractor,
) -> Result<Response<GetLocationsResponse>, ApiError> {
    let params = PaginationParams::from_query(
        &values,
        &state.listing.locations,
        &state.listing.limits,
    )?;

    let result = state
        .service
        .list_locations(params.clone())
        .await
        .map_err(ApiError::from)?;

    let pagination = PageMeta::new(&result, &params, &state.service.tables().locations)?;

    Ok(Response::OK(GetLocationsResponse {
        data: result.data,
        pagination,
    }))
}
