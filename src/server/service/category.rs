//! Category service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository, error::AppError, model::category::Category,
};

/// Service providing category queries.
pub struct CategoryService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every category.
    ///
    /// # Returns
    /// - `Ok(Vec<Category>)` - All categories
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db).get_all().await?;

        Ok(categories)
    }
}
