use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::query_params::{ListingQuery, PageMeta};
use crate::application::http::server::api_entities::api_error::{ApiError, ErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use coniven_core::domain::pagination::PaginationParams;
use coniven_core::domain::room::entities::Room;
use coniven_core::domain::room::ports::RoomService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRoomsResponse {
    pub data: Vec<Room>,
    pub pagination: PageMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "room",
    summary = "List rooms",
    description = "Returns one page of rooms. Searches name and manager; sortable by `nama`, `tgl_dibuat` and `jumlah_barang`.",
    params(
        ListingQuery,
        ("loc" = Option<Uuid>, Query, description = "Only rooms of this location"),
    ),
    responses(
        (status = 200, body = GetRoomsResponse),
        (status = 400, body = ErrorResponse)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    QueryParamsExtractor(values): QueryParamsExtractor,
) -> Result<Response<GetRoomsResponse>, ApiError> {
    let params =
        PaginationParams::from_query(&values, &state.listing.rooms, &state.listing.limits)?;

    let result = state
        .service
        .list_rooms(params.clone())
        .await
        .map_err(ApiError::from)?;

    let pagination = PageMeta::new(&result, &params, &state.service.tables().rooms)?;

    Ok(Response::OK(GetRoomsResponse {
        data: result.data,
        pagination,
    }))
}
