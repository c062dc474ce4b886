use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, new_slug},
    room::entities::Room,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub room_count: i32,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    pub fn new(code: &str, name: &str) -> Result<Self, CoreError> {
        let code = code.trim();
        let name = name.trim();

        if code.is_empty() {
            return Err(CoreError::validation("code", "code must not be empty"));
        }
        if name.is_empty() {
            return Err(CoreError::validation("name", "name must not be empty"));
        }

        let now = Utc::now();
        Ok(Self {
            id: generate_uuid_v7(),
            code: code.to_string(),
            name: name.to_string(),
            room_count: 0,
            slug: new_slug(name),
            created_at: now,
            updated_at: now,
        })
    }

    /// Renaming also issues a fresh slug.
    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
        self.slug = new_slug(name);
    }
}

/// A location together with its rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocationDetail {
    #[serde(flatten)]
    pub location: Location,
    pub rooms: Vec<Room>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_location_generates_slug() {
        let location = Location::new(" GA ", " Gedung A ").unwrap();

        assert_eq!(location.code, "GA");
        assert_eq!(location.name, "Gedung A");
        assert_eq!(location.room_count, 0);
        assert!(location.slug.starts_with("gedung-a-"));
    }

    #[test]
    fn test_new_location_rejects_blank_fields() {
        assert_eq!(
            Location::new("", "Gedung A"),
            Err(CoreError::validation("code", "code must not be empty"))
        );
        assert_eq!(
            Location::new("GA", " "),
            Err(CoreError::validation("name", "name must not be empty"))
        );
    }

    #[test]
    fn test_rename_regenerates_slug() {
        let mut location = Location::new("GA", "Gedung A").unwrap();
        let old_slug = location.slug.clone();

        location.rename("Gedung B");
        assert_eq!(location.name, "Gedung B");
        assert!(location.slug.starts_with("gedung-b-"));
        assert_ne!(location.slug, old_slug);
    }
}
