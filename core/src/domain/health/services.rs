use crate::domain::{
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    location::ports::LocationRepository,
    room::ports::RoomRepository,
};

impl<CA, LO, RO, HC> HealthCheckService for Service<CA, LO, RO, HC>
where
    CA: CategoryRepository,
    LO: LocationRepository,
    RO: RoomRepository,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
