use tracing::info;

use crate::{
    domain::common::{ConivenConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        category::PostgresCategoryRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        location::PostgresLocationRepository,
        room::PostgresRoomRepository,
    },
};

pub type ConivenService = Service<
    PostgresCategoryRepository,
    PostgresLocationRepository,
    PostgresRoomRepository,
    PostgresHealthCheckRepository,
>;

/// Connects to Postgres, optionally applies migrations and wires the
/// repositories into a [`ConivenService`].
pub async fn create_service(config: ConivenConfig) -> Result<ConivenService, CoreError> {
    let database_url = config.database.url();
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    if config.database.run_migrations {
        postgres.run_migrations().await?;
    }

    let db = postgres.get_db();
    let service = Service::new(
        PostgresCategoryRepository::new(db.clone()),
        PostgresLocationRepository::new(db.clone()),
        PostgresRoomRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
    )?;

    info!(
        host = %config.database.host,
        database = %config.database.name,
        "service initialised"
    );

    Ok(service)
}
