use crate::domain::{
    category::{
        entities::{Category, NewCategory},
        value_objects::{CreateCategoryInput, UpdateCategoryInput},
    },
    common::entities::app_errors::CoreError,
    pagination::{PaginationParams, PaginationResult, TableConfig},
};

pub trait CategoryService: Send + Sync {
    fn list_categories(
        &self,
        params: PaginationParams,
    ) -> impl Future<Output = Result<PaginationResult<Category>, CoreError>> + Send;

    fn get_category(&self, id: i32) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn create_category(
        &self,
        input: CreateCategoryInput,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn update_category(
        &self,
        input: UpdateCategoryInput,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn delete_category(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    /// Rows matching the filters and search of `params`.
    fn count_categories(
        &self,
        params: &PaginationParams,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn list_categories(
        &self,
        params: &PaginationParams,
        table: &TableConfig,
    ) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    fn get_category_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Category>, CoreError>> + Send;

    fn exists_by_code(&self, code: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn exists_by_name(&self, name: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn create_category(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn update_category(
        &self,
        category: Category,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn delete_category(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}
