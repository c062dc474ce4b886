use tracing::info;
use uuid::Uuid;

use crate::domain::{
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    location::ports::LocationRepository,
    pagination::{PaginationParams, PaginationResult},
    room::{
        entities::Room,
        ports::{RoomRepository, RoomService},
        value_objects::CreateRoomInput,
    },
};

impl<CA, LO, RO, HC> RoomService for Service<CA, LO, RO, HC>
where
    CA: CategoryRepository,
    LO: LocationRepository,
    RO: RoomRepository,
    HC: HealthCheckRepository,
{
    async fn list_rooms(
        &self,
        mut params: PaginationParams,
    ) -> Result<PaginationResult<Room>, CoreError> {
        let table = &self.tables.rooms;
        table.apply(&mut params);

        let total = self.room_repository.count_rooms(&params).await?;
        params.clamp_to_total(total);

        let rooms = self.room_repository.list_rooms(&params, table).await?;

        Ok(PaginationResult::new(rooms, total, &params))
    }

    async fn create_room(&self, input: CreateRoomInput) -> Result<Room, CoreError> {
        let room = Room::new(&input.name, &input.manager, input.location_id)?;

        if self
            .location_repository
            .get_location_by_id(room.location_id)
            .await?
            .is_none()
        {
            return Err(CoreError::validation(
                "location_id",
                "location does not exist",
            ));
        }

        let created = self.room_repository.create_room(room).await?;
        info!(id = %created.id, location_id = %created.location_id, "room created");

        Ok(created)
    }

    async fn get_room_by_slug(&self, slug: &str) -> Result<Room, CoreError> {
        self.room_repository
            .get_room_by_slug(slug)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn delete_room(&self, id: Uuid) -> Result<(), CoreError> {
        let room = self
            .room_repository
            .get_room_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.room_repository.delete_room(&room).await?;
        info!(id = %room.id, "room deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        category::ports::MockCategoryRepository,
        common::services::MockService,
        health::ports::MockHealthCheckRepository,
        location::{entities::Location, ports::MockLocationRepository},
        room::ports::MockRoomRepository,
    };

    fn service(locations: MockLocationRepository, rooms: MockRoomRepository) -> MockService {
        Service::new(
            MockCategoryRepository::new(),
            locations,
            rooms,
            MockHealthCheckRepository::new(),
        )
        .unwrap()
    }

    fn room(name: &str, location_id: Uuid) -> CreateRoomInput {
        CreateRoomInput {
            name: name.to_string(),
            manager: "Budi".to_string(),
            location_id,
        }
    }

    #[tokio::test]
    async fn test_create_requires_existing_location() {
        let mut locations = MockLocationRepository::new();
        locations
            .expect_get_location_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let mut rooms = MockRoomRepository::new();
        rooms.expect_create_room().never();

        assert_eq!(
            service(locations, rooms)
                .create_room(room("Lab", Uuid::new_v4()))
                .await,
            Err(CoreError::validation("location_id", "location does not exist"))
        );
    }

    #[tokio::test]
    async fn test_create_stores_room_under_location() {
        let location = Location::new("GA", "Gedung A").unwrap();
        let location_id = location.id;

        let mut locations = MockLocationRepository::new();
        locations
            .expect_get_location_by_id()
            .with(eq(location_id))
            .returning(move |_| {
                let found = location.clone();
                Box::pin(async move { Ok(Some(found)) })
            });

        let mut rooms = MockRoomRepository::new();
        rooms
            .expect_create_room()
            .withf(move |room| {
                room.location_id == location_id && room.name == "Lab 1" && room.item_count == 0
            })
            .times(1)
            .returning(|room| Box::pin(async move { Ok(room) }));

        let created = service(locations, rooms)
            .create_room(room(" Lab 1 ", location_id))
            .await
            .unwrap();

        assert_eq!(created.manager, "Budi");
        assert!(created.slug.starts_with("lab-1-"));
    }

    #[tokio::test]
    async fn test_delete_passes_found_room() {
        let existing = Room::new("Lab 1", "Budi", Uuid::new_v4()).unwrap();
        let room_id = existing.id;

        let mut rooms = MockRoomRepository::new();
        rooms
            .expect_get_room_by_id()
            .with(eq(room_id))
            .returning(move |_| {
                let found = existing.clone();
                Box::pin(async move { Ok(Some(found)) })
            });
        rooms
            .expect_delete_room()
            .withf(move |room| room.id == room_id)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        service(MockLocationRepository::new(), rooms)
            .delete_room(room_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_uses_room_search_columns() {
        let mut rooms = MockRoomRepository::new();
        rooms
            .expect_count_rooms()
            .withf(|params| {
                params.query_cols == vec!["nama", "penanggung_jawab"]
                    && params.sort_by == "tgl_dibuat"
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(0) }));
        rooms
            .expect_list_rooms()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(Vec::new()) }));

        let result = service(MockLocationRepository::new(), rooms)
            .list_rooms(PaginationParams {
                query: "lab".to_string(),
                sort_by: "kode".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(result.data.is_empty());
        assert_eq!(result.total_page, 0);
    }

    #[tokio::test]
    async fn test_missing_room_is_not_found() {
        let mut rooms = MockRoomRepository::new();
        rooms
            .expect_get_room_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        rooms
            .expect_get_room_by_slug()
            .returning(|_| Box::pin(async { Ok(None) }));
        rooms.expect_delete_room().never();
        let service = service(MockLocationRepository::new(), rooms);

        assert_eq!(
            service.delete_room(Uuid::new_v4()).await,
            Err(CoreError::NotFound)
        );
        assert_eq!(
            service.get_room_by_slug("lab-1-x7Kp2Qa").await,
            Err(CoreError::NotFound)
        );
    }
}
