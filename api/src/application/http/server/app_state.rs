use std::sync::Arc;

use coniven_core::{
    application::ConivenService,
    domain::{
        category::listing as category_listing,
        location::listing as location_listing,
        pagination::{FilterRegistry, PaginationConfigError, PaginationLimits},
        room::listing as room_listing,
    },
};

use crate::args::Args;

/// Filter registries of the listed resources and the page-size limits
/// applied to every listing request.
#[derive(Debug, Clone)]
pub struct ListingSettings {
    pub limits: PaginationLimits,
    pub categories: FilterRegistry,
    pub locations: FilterRegistry,
    pub rooms: FilterRegistry,
}

impl ListingSettings {
    pub fn new(limits: PaginationLimits) -> Result<Self, PaginationConfigError> {
        Ok(Self {
            limits,
            categories: category_listing::filter_registry()?,
            locations: location_listing::filter_registry()?,
            rooms: room_listing::filter_registry()?,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ConivenService,
    pub listing: Arc<ListingSettings>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: ConivenService,
        limits: PaginationLimits,
    ) -> Result<Self, PaginationConfigError> {
        Ok(Self {
            args,
            service,
            listing: Arc::new(ListingSettings::new(limits)?),
        })
    }
}
