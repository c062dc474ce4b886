use crate::application::http::{
    category::router::CategoryApiDoc, health::router::HealthApiDoc,
    location::router::LocationApiDoc, room::router::RoomApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coniven API"
    ),
    nest(
        (path = "/categories", api = CategoryApiDoc),
        (path = "/locations", api = LocationApiDoc),
        (path = "/rooms", api = RoomApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
