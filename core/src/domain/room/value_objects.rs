use uuid::Uuid;

pub struct CreateRoomInput {
    pub name: String,
    pub manager: String,
    pub location_id: Uuid,
}
