use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLocationValidator {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateLocationValidator {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,
}
