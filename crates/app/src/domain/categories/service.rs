//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::categories::{
        errors::CategoriesServiceError,
        models::{Category, CategoryId, CategoryUpdate, NewCategory},
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

fn validate(name: &str, description: &str) -> Result<(), CategoriesServiceError> {
    if name.trim().is_empty() {
        return Err(CategoriesServiceError::NameRequired);
    }

    if description.trim().is_empty() {
        return Err(CategoriesServiceError::DescriptionRequired);
    }

    Ok(())
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(&self, category: CategoryId) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CategoriesServiceError> {
        validate(&category.name, &category.description)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_category(
        &self,
        category: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Category, CategoriesServiceError> {
        validate(&update.name, &update.description)?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_category(&mut tx, category, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_category(&self, category: CategoryId) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_category(&mut tx, category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves all categories ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(&self, category: CategoryId) -> Result<Category, CategoriesServiceError>;

    /// Creates a new category.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CategoriesServiceError>;

    /// Replaces the name and description of a category.
    async fn update_category(
        &self,
        category: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Category, CategoriesServiceError>;

    /// Deletes a category. Products in it become uncategorised.
    async fn delete_category(&self, category: CategoryId) -> Result<(), CategoriesServiceError>;
}
