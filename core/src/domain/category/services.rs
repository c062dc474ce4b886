use chrono::Utc;
use tracing::info;

use crate::domain::{
    category::{
        entities::{Category, NewCategory},
        ports::{CategoryRepository, CategoryService},
        value_objects::{CreateCategoryInput, UpdateCategoryInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    location::ports::LocationRepository,
    pagination::{PaginationParams, PaginationResult},
    room::ports::RoomRepository,
};

fn check_id(id: i32) -> Result<i32, CoreError> {
    if id <= 0 {
        return Err(CoreError::InvalidId);
    }
    Ok(id)
}

impl<CA, LO, RO, HC> CategoryService for Service<CA, LO, RO, HC>
where
    CA: CategoryRepository,
    LO: LocationRepository,
    RO: RoomRepository,
    HC: HealthCheckRepository,
{
    async fn list_categories(
        &self,
        mut params: PaginationParams,
    ) -> Result<PaginationResult<Category>, CoreError> {
        let table = &self.tables.categories;
        table.apply(&mut params);

        let total = self.category_repository.count_categories(&params).await?;
        params.clamp_to_total(total);

        let categories = self
            .category_repository
            .list_categories(&params, table)
            .await?;

        Ok(PaginationResult::new(categories, total, &params))
    }

    async fn get_category(&self, id: i32) -> Result<Category, CoreError> {
        self.category_repository
            .get_category_by_id(check_id(id)?)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_category(&self, input: CreateCategoryInput) -> Result<Category, CoreError> {
        let category = NewCategory::new(&input.code, &input.name)?;

        if self
            .category_repository
            .exists_by_code(&category.code)
            .await?
        {
            return Err(CoreError::validation("code", "code is already taken"));
        }

        if self
            .category_repository
            .exists_by_name(&category.name)
            .await?
        {
            return Err(CoreError::validation("name", "name is already taken"));
        }

        let created = self.category_repository.create_category(category).await?;
        info!(id = created.id, code = %created.code, "category created");

        Ok(created)
    }

    async fn update_category(&self, input: UpdateCategoryInput) -> Result<Category, CoreError> {
        let id = check_id(input.id)?;
        let code = input.code.trim();
        let name = input.name.trim();

        let mut category = self
            .category_repository
            .get_category_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if code.is_empty() && name.is_empty() {
            return Ok(category);
        }

        if !code.is_empty() && code != category.code {
            if self.category_repository.exists_by_code(code).await? {
                return Err(CoreError::validation("code", "code is already taken"));
            }
            category.code = code.to_string();
        }

        if !name.is_empty() && name != category.name {
            if self.category_repository.exists_by_name(name).await? {
                return Err(CoreError::validation("name", "name is already taken"));
            }
            category.name = name.to_string();
        }

        category.updated_at = Utc::now();

        self.category_repository.update_category(category).await
    }

    async fn delete_category(&self, id: i32) -> Result<(), CoreError> {
        let category = self
            .category_repository
            .get_category_by_id(check_id(id)?)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.category_repository
            .delete_category(category.id)
            .await?;
        info!(id = category.id, "category deleted");

        Ok(())
    }
}
