use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pagination::{PaginationParams, TableConfig},
    room::{entities::Room, ports::RoomRepository},
};
use crate::entity::{
    lokasi::{Column as LokasiColumn, Entity as LokasiEntity},
    ruangan::{ActiveModel as RuanganActiveModel, Column as RuanganColumn, Entity as RuanganEntity},
};
use crate::infrastructure::pagination::{count_rows, count_statement, select_statement};

const TABLE: &str = "ruangan";
const SELECT_ROOMS: &str = "SELECT id, id_lokasi, nama, penanggung_jawab, jumlah_barang, slug, tgl_dibuat, tgl_update FROM ruangan";

#[derive(Debug, Clone)]
pub struct PostgresRoomRepository {
    pub db: DatabaseConnection,
}

impl PostgresRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RoomRepository for PostgresRoomRepository {
    async fn count_rooms(&self, params: &PaginationParams) -> Result<u64, CoreError> {
        count_rows(&self.db, count_statement(TABLE, params))
            .await
            .map_err(|e| {
                error!("Failed to count rooms: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn list_rooms(
        &self,
        params: &PaginationParams,
        table: &TableConfig,
    ) -> Result<Vec<Room>, CoreError> {
        let rooms = RuanganEntity::find()
            .from_raw_sql(select_statement(SELECT_ROOMS, params, table))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list rooms: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Room::from)
            .collect::<Vec<Room>>();

        Ok(rooms)
    }

    async fn get_rooms_by_location(&self, location_id: Uuid) -> Result<Vec<Room>, CoreError> {
        let rooms = RuanganEntity::find()
            .filter(RuanganColumn::IdLokasi.eq(location_id))
            .order_by_asc(RuanganColumn::Nama)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get rooms by location: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Room::from)
            .collect::<Vec<Room>>();

        Ok(rooms)
    }

    async fn get_room_by_id(&self, id: Uuid) -> Result<Option<Room>, CoreError> {
        let room = RuanganEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get room by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Room::from);

        Ok(room)
    }

    async fn get_room_by_slug(&self, slug: &str) -> Result<Option<Room>, CoreError> {
        let room = RuanganEntity::find()
            .filter(RuanganColumn::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get room by slug: {}", e);
                CoreError::InternalServerError
            })?
            .map(Room::from);

        Ok(room)
    }

    async fn create_room(&self, room: Room) -> Result<Room, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let created = RuanganActiveModel {
            id: Set(room.id),
            id_lokasi: Set(room.location_id),
            nama: Set(room.name),
            penanggung_jawab: Set(room.manager),
            jumlah_barang: Set(room.item_count),
            slug: Set(room.slug),
            tgl_dibuat: Set(room.created_at.naive_utc()),
            tgl_update: Set(room.updated_at.naive_utc()),
        }
        .insert(&txn)
        .await
        .map(Room::from)
        .map_err(|e| {
            error!("Failed to create room: {}", e);
            CoreError::InternalServerError
        })?;

        LokasiEntity::update_many()
            .col_expr(
                LokasiColumn::JumlahRuangan,
                Expr::col(LokasiColumn::JumlahRuangan).add(1),
            )
            .filter(LokasiColumn::Id.eq(created.location_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to increment room count: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit room creation: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn delete_room(&self, room: &Room) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let deleted = RuanganEntity::delete_by_id(room.id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete room: {}", e);
                CoreError::InternalServerError
            })?;

        if deleted.rows_affected > 0 {
            LokasiEntity::update_many()
                .col_expr(
                    LokasiColumn::JumlahRuangan,
                    Expr::col(LokasiColumn::JumlahRuangan).sub(1),
                )
                .filter(LokasiColumn::Id.eq(room.location_id))
                .filter(LokasiColumn::JumlahRuangan.gt(0))
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to decrement room count: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit room deletion: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }
}
