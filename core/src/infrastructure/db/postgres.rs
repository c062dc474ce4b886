use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::domain::common::entities::app_errors::CoreError;

pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, CoreError> {
        let mut options = ConnectOptions::new(config.database_url);
        options.sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            CoreError::DatabaseConnection(e.to_string())
        })?;

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Applies the SQL files under `core/migrations` that have not run yet.
    pub async fn run_migrations(&self) -> Result<(), CoreError> {
        sqlx::migrate!("./migrations")
            .run(self.db.get_postgres_connection_pool())
            .await
            .map_err(|e| {
                error!("Failed to run migrations: {}", e);
                CoreError::Migration(e.to_string())
            })?;

        info!("database migrations applied");
        Ok(())
    }
}
