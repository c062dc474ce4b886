use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn ping_statement() -> Statement {
        Statement::from_string(DatabaseBackend::Postgres, "SELECT 1")
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();

        self.db
            .execute(Self::ping_statement())
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(start.elapsed().as_millis() as u64)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let start = Instant::now();
        let result = self.db.execute(Self::ping_statement()).await;
        let response_time_ms = start.elapsed().as_millis() as u64;

        Ok(match result {
            Ok(_) => DatabaseHealthStatus {
                is_healthy: true,
                response_time_ms,
                error: None,
            },
            Err(e) => {
                error!("Database readiness check failed: {}", e);
                DatabaseHealthStatus {
                    is_healthy: false,
                    response_time_ms,
                    error: Some(e.to_string()),
                }
            }
        })
    }
}
