pub struct CreateCategoryInput {
    pub code: String,
    pub name: String,
}

/// Blank fields are left unchanged.
pub struct UpdateCategoryInput {
    pub id: i32,
    pub code: String,
    pub name: String,
}
