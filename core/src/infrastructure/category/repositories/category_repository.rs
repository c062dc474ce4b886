use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter,
};
use tracing::error;

use crate::domain::{
    category::{
        entities::{Category, NewCategory},
        ports::CategoryRepository,
    },
    common::entities::app_errors::CoreError,
    pagination::{PaginationParams, TableConfig},
};
use crate::entity::kategori::{
    ActiveModel as KategoriActiveModel, Column as KategoriColumn, Entity as KategoriEntity,
};
use crate::infrastructure::pagination::{count_rows, count_statement, select_statement};

const TABLE: &str = "kategori";
const SELECT_CATEGORIES: &str = "SELECT id, kode, nama, tgl_dibuat, tgl_update FROM kategori";

#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CategoryRepository for PostgresCategoryRepository {
    async fn count_categories(&self, params: &PaginationParams) -> Result<u64, CoreError> {
        count_rows(&self.db, count_statement(TABLE, params))
            .await
            .map_err(|e| {
                error!("Failed to count categories: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn list_categories(
        &self,
        params: &PaginationParams,
        table: &TableConfig,
    ) -> Result<Vec<Category>, CoreError> {
        let categories = KategoriEntity::find()
            .from_raw_sql(select_statement(SELECT_CATEGORIES, params, table))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list categories: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Category::from)
            .collect::<Vec<Category>>();

        Ok(categories)
    }

    async fn get_category_by_id(&self, id: i32) -> Result<Option<Category>, CoreError> {
        let category = KategoriEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get category by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Category::from);

        Ok(category)
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, CoreError> {
        let count = KategoriEntity::find()
            .filter(KategoriColumn::Kode.eq(code))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find category by code: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, CoreError> {
        let count = KategoriEntity::find()
            .filter(KategoriColumn::Nama.eq(name))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find category by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category, CoreError> {
        let created = KategoriActiveModel {
            id: NotSet,
            kode: Set(category.code),
            nama: Set(category.name),
            tgl_dibuat: Set(category.created_at.naive_utc()),
            tgl_update: Set(category.updated_at.naive_utc()),
        }
        .insert(&self.db)
        .await
        .map(Category::from)
        .map_err(|e| {
            error!("Failed to create category: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn update_category(&self, category: Category) -> Result<Category, CoreError> {
        let updated = KategoriActiveModel {
            id: Set(category.id),
            kode: Set(category.code),
            nama: Set(category.name),
            tgl_dibuat: Set(category.created_at.naive_utc()),
            tgl_update: Set(category.updated_at.naive_utc()),
        }
        .update(&self.db)
        .await
        .map(Category::from)
        .map_err(|e| {
            error!("Failed to update category: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn delete_category(&self, id: i32) -> Result<(), CoreError> {
        KategoriEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
