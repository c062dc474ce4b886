use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    location::{entities::Location, ports::LocationRepository},
    pagination::{PaginationParams, TableConfig},
};
use crate::entity::lokasi::{
    ActiveModel as LokasiActiveModel, Column as LokasiColumn, Entity as LokasiEntity,
};
use crate::infrastructure::pagination::{count_rows, count_statement, select_statement};

const TABLE: &str = "lokasi";
const SELECT_LOCATIONS: &str =
    "SELECT id, kode, nama, jumlah_ruangan, slug, tgl_dibuat, tgl_update FROM lokasi";

#[derive(Debug, Clone)]
pub struct PostgresLocationRepository {
    pub db: DatabaseConnection,
}

impl PostgresLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(location: Location) -> LokasiActiveModel {
    LokasiActiveModel {
        id: Set(location.id),
        kode: Set(location.code),
        nama: Set(location.name),
        jumlah_ruangan: Set(location.room_count),
        slug: Set(location.slug),
        tgl_dibuat: Set(location.created_at.naive_utc()),
        tgl_update: Set(location.updated_at.naive_utc()),
    }
}

impl LocationRepository for PostgresLocationRepository {
    async fn count_locations(&self, params: &PaginationParams) -> Result<u64, CoreError> {
        count_rows(&self.db, count_statement(TABLE, params))
            .await
            .map_err(|e| {
                error!("Failed to count locations: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn list_locations(
        &self,
        params: &PaginationParams,
        table: &TableConfig,
    ) -> Result<Vec<Location>, CoreError> {
        let locations = LokasiEntity::find()
            .from_raw_sql(select_statement(SELECT_LOCATIONS, params, table))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list locations: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Location::from)
            .collect::<Vec<Location>>();

        Ok(locations)
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, CoreError> {
        let count = LokasiEntity::find()
            .filter(LokasiColumn::Kode.eq(code))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find location by code: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn create_location(&self, location: Location) -> Result<Location, CoreError> {
        let created = active_model(location)
            .insert(&self.db)
            .await
            .map(Location::from)
            .map_err(|e| {
                error!("Failed to create location: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created)
    }

    async fn get_location_by_id(&self, id: Uuid) -> Result<Option<Location>, CoreError> {
        let location = LokasiEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get location by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Location::from);

        Ok(location)
    }

    async fn get_location_by_slug(&self, slug: &str) -> Result<Option<Location>, CoreError> {
        let location = LokasiEntity::find()
            .filter(LokasiColumn::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get location by slug: {}", e);
                CoreError::InternalServerError
            })?
            .map(Location::from);

        Ok(location)
    }

    async fn update_location(&self, location: Location) -> Result<Location, CoreError> {
        // The room count is maintained by the room repository.
        let mut model = active_model(location);
        model.jumlah_ruangan = NotSet;
        model.tgl_dibuat = NotSet;

        let updated = model
            .update(&self.db)
            .await
            .map(Location::from)
            .map_err(|e| {
                error!("Failed to update location: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated)
    }

    async fn delete_location(&self, id: Uuid) -> Result<(), CoreError> {
        LokasiEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete location: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
