use std::sync::Arc;

use crate::domain::{
    category::{listing as category_listing, ports::CategoryRepository},
    common::entities::app_errors::CoreError,
    health::ports::HealthCheckRepository,
    location::{listing as location_listing, ports::LocationRepository},
    pagination::TableConfig,
    room::{listing as room_listing, ports::RoomRepository},
};

#[cfg(test)]
pub(crate) type MockService = Service<
    crate::domain::category::ports::MockCategoryRepository,
    crate::domain::location::ports::MockLocationRepository,
    crate::domain::room::ports::MockRoomRepository,
    crate::domain::health::ports::MockHealthCheckRepository,
>;

/// Table configurations of every listed resource, validated once at start-up.
#[derive(Debug, Clone)]
pub struct ResourceTables {
    pub categories: TableConfig,
    pub locations: TableConfig,
    pub rooms: TableConfig,
}

impl ResourceTables {
    pub fn new() -> Result<Self, CoreError> {
        Ok(Self {
            categories: category_listing::table_config()?,
            locations: location_listing::table_config()?,
            rooms: room_listing::table_config()?,
        })
    }
}

pub struct Service<CA, LO, RO, HC>
where
    CA: CategoryRepository,
    LO: LocationRepository,
    RO: RoomRepository,
    HC: HealthCheckRepository,
{
    pub(crate) category_repository: Arc<CA>,
    pub(crate) location_repository: Arc<LO>,
    pub(crate) room_repository: Arc<RO>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) tables: Arc<ResourceTables>,
}

impl<CA, LO, RO, HC> Clone for Service<CA, LO, RO, HC>
where
    CA: CategoryRepository,
    LO: LocationRepository,
    RO: RoomRepository,
    HC: HealthCheckRepository,
{
    fn clone(&self) -> Self {
        Self {
            category_repository: Arc::clone(&self.category_repository),
            location_repository: Arc::clone(&self.location_repository),
            room_repository: Arc::clone(&self.room_repository),
            health_check_repository: Arc::clone(&self.health_check_repository),
            tables: Arc::clone(&self.tables),
        }
    }
}

impl<CA, LO, RO, HC> Service<CA, LO, RO, HC>
where
    CA: CategoryRepository,
    LO: LocationRepository,
    RO: RoomRepository,
    HC: HealthCheckRepository,
{
    pub fn new(
        category_repository: CA,
        location_repository: LO,
        room_repository: RO,
        health_check_repository: HC,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            category_repository: Arc::new(category_repository),
            location_repository: Arc::new(location_repository),
            room_repository: Arc::new(room_repository),
            health_check_repository: Arc::new(health_check_repository),
            tables: Arc::new(ResourceTables::new()?),
        })
    }

    pub fn tables(&self) -> &ResourceTables {
        &self.tables
    }
}
