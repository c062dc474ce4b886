use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    location::{
        entities::{Location, LocationDetail},
        ports::{LocationRepository, LocationService},
        value_objects::{CreateLocationInput, UpdateLocationInput},
    },
    pagination::{PaginationParams, PaginationResult},
    room::ports::RoomRepository,
};

impl<CA, LO, RO, HC> LocationService for Service<CA, LO, RO, HC>
where
    CA: CategoryRepository,
    LO: LocationRepository,
    RO: RoomRepository,
    HC: HealthCheckRepository,
{
    async fn list_locations(
        &self,
        mut params: PaginationParams,
    ) -> Result<PaginationResult<Location>, CoreError> {
        let table = &self.tables.locations;
        table.apply(&mut params);

        let total = self.location_repository.count_locations(&params).await?;
        params.clamp_to_total(total);

        let locations = self
            .location_repository
            .list_locations(&params, table)
            .await?;

        Ok(PaginationResult::new(locations, total, &params))
    }

    async fn count_locations(&self) -> Result<u64, CoreError> {
        self.location_repository
            .count_locations(&PaginationParams::default())
            .await
    }

    async fn create_location(&self, input: CreateLocationInput) -> Result<Location, CoreError> {
        let location = Location::new(&input.code, &input.name)?;

        if self
            .location_repository
            .exists_by_code(&location.code)
            .await?
        {
            return Err(CoreError::validation("code", "code is already taken"));
        }

        let created = self.location_repository.create_location(location).await?;
        info!(id = %created.id, slug = %created.slug, "location created");

        Ok(created)
    }

    async fn get_location_by_slug(&self, slug: &str) -> Result<Location, CoreError> {
        self.location_repository
            .get_location_by_slug(slug)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_location_detail(&self, slug: &str) -> Result<LocationDetail, CoreError> {
        let location = self.get_location_by_slug(slug).await?;
        let rooms = self
            .room_repository
            .get_rooms_by_location(location.id)
            .await?;

        Ok(LocationDetail { location, rooms })
    }

    async fn update_location(&self, input: UpdateLocationInput) -> Result<Location, CoreError> {
        let code = input.code.trim();
        let name = input.name.trim();

        let mut location = self.get_location_by_slug(&input.slug).await?;

        if code.is_empty() && name.is_empty() {
            return Ok(location);
        }

        if !code.is_empty() && code != location.code {
            if self.location_repository.exists_by_code(code).await? {
                return Err(CoreError::validation("code", "code is already taken"));
            }
            location.code = code.to_string();
        }

        if !name.is_empty() && name != location.name {
            location.rename(name);
        }

        location.updated_at = Utc::now();

        self.location_repository.update_location(location).await
    }

    async fn delete_location(&self, id: Uuid) -> Result<(), CoreError> {
        let location = self
            .location_repository
            .get_location_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.location_repository
            .delete_location(location.id)
            .await?;
        info!(id = %location.id, "location deleted");

        Ok(())
    }
}
