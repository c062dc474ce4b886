use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7, new_slug};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Room {
    pub id: Uuid,
    pub location_id: Uuid,
    pub name: String,
    /// Person in charge of the room.
    pub manager: String,
    pub item_count: i32,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    pub fn new(name: &str, manager: &str, location_id: Uuid) -> Result<Self, CoreError> {
        let name = name.trim();
        let manager = manager.trim();

        if name.is_empty() {
            return Err(CoreError::validation("name", "name is required"));
        }
        if manager.is_empty() {
            return Err(CoreError::validation("manager", "manager is required"));
        }

        let now = Utc::now();
        Ok(Self {
            id: generate_uuid_v7(),
            location_id,
            name: name.to_string(),
            manager: manager.to_string(),
            item_count: 0,
            slug: new_slug(name),
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room() {
        let location_id = Uuid::new_v4();
        let room = Room::new(" Lab Kimia ", " Siti ", location_id).unwrap();

        assert_eq!(room.name, "Lab Kimia");
        assert_eq!(room.manager, "Siti");
        assert_eq!(room.location_id, location_id);
        assert_eq!(room.item_count, 0);
        assert!(room.slug.starts_with("lab-kimia-"));
    }

    #[test]
    fn test_new_room_requires_name_and_manager() {
        assert_eq!(
            Room::new("", "Siti", Uuid::new_v4()),
            Err(CoreError::validation("name", "name is required"))
        );
        assert_eq!(
            Room::new("Lab", "  ", Uuid::new_v4()),
            Err(CoreError::validation("manager", "manager is required"))
        );
    }
}
