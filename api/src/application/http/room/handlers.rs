pub mod create_room;
pub mod delete_room;
pub mod get_room;
pub mod get_rooms;
