use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category that has not been stored yet; the id comes from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewCategory {
    pub fn new(code: &str, name: &str) -> Result<Self, CoreError> {
        let code = code.trim();
        let name = name.trim();

        if code.is_empty() {
            return Err(CoreError::validation("code", "code is required"));
        }
        if name.is_empty() {
            return Err(CoreError::validation("name", "name is required"));
        }

        let now = Utc::now();
        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}
