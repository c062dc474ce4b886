pub struct CreateLocationInput {
    pub code: String,
    pub name: String,
}

/// Blank fields are left unchanged.
pub struct UpdateLocationInput {
    pub slug: String,
    pub code: String,
    pub name: String,
}
