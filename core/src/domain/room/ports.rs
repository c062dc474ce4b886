use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pagination::{PaginationParams, PaginationResult, TableConfig},
    room::{entities::Room, value_objects::CreateRoomInput},
};

pub trait RoomService: Send + Sync {
    fn list_rooms(
        &self,
        params: PaginationParams,
    ) -> impl Future<Output = Result<PaginationResult<Room>, CoreError>> + Send;

    fn create_room(
        &self,
        input: CreateRoomInput,
    ) -> impl Future<Output = Result<Room, CoreError>> + Send;

    fn get_room_by_slug(&self, slug: &str)
    -> impl Future<Output = Result<Room, CoreError>> + Send;

    fn delete_room(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RoomRepository: Send + Sync {
    fn count_rooms(
        &self,
        params: &PaginationParams,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn list_rooms(
        &self,
        params: &PaginationParams,
        table: &TableConfig,
    ) -> impl Future<Output = Result<Vec<Room>, CoreError>> + Send;

    fn get_rooms_by_location(
        &self,
        location_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Room>, CoreError>> + Send;

    fn get_room_by_id(&self, id: Uuid)
    -> impl Future<Output = Result<Option<Room>, CoreError>> + Send;

    fn get_room_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Room>, CoreError>> + Send;

    /// Stores the room and increments the room count of its location.
    fn create_room(&self, room: Room) -> impl Future<Output = Result<Room, CoreError>> + Send;

    /// Removes the room and decrements the room count of its location.
    fn delete_room(&self, room: &Room) -> impl Future<Output = Result<(), CoreError>> + Send;
}
