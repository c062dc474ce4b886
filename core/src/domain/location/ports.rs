use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    location::{
        entities::{Location, LocationDetail},
        value_objects::{CreateLocationInput, UpdateLocationInput},
    },
    pagination::{PaginationParams, PaginationResult, TableConfig},
};

pub trait LocationService: Send + Sync {
    fn list_locations(
        &self,
        params: PaginationParams,
    ) -> impl Future<Output = Result<PaginationResult<Location>, CoreError>> + Send;

    /// Number of locations, unfiltered.
    fn count_locations(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn create_location(
        &self,
        input: CreateLocationInput,
    ) -> impl Future<Output = Result<Location, CoreError>> + Send;

    fn get_location_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Location, CoreError>> + Send;

    fn get_location_detail(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<LocationDetail, CoreError>> + Send;

    fn update_location(
        &self,
        input: UpdateLocationInput,
    ) -> impl Future<Output = Result<Location, CoreError>> + Send;

    fn delete_location(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait LocationRepository: Send + Sync {
    fn count_locations(
        &self,
        params: &PaginationParams,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn list_locations(
        &self,
        params: &PaginationParams,
        table: &TableConfig,
    ) -> impl Future<Output = Result<Vec<Location>, CoreError>> + Send;

    fn exists_by_code(&self, code: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn create_location(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<Location, CoreError>> + Send;

    fn get_location_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Location>, CoreError>> + Send;

    fn get_location_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Location>, CoreError>> + Send;

    fn update_location(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<Location, CoreError>> + Send;

    /// Rooms of the location go with it.
    fn delete_location(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
