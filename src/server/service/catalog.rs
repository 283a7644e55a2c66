//! Catalog service for characters, vehicles and planets.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::catalog::CatalogRepository,
    error::AppError,
    model::catalog::{CatalogItem, CatalogKind},
};

/// Service providing read access to the catalog.
pub struct CatalogService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new CatalogService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every item of one kind.
    pub async fn get_all(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, AppError> {
        let repo = CatalogRepository::new(self.db);
        let items = repo.get_all(kind).await?;
        Ok(items)
    }

    /// Retrieves an item that must exist.
    ///
    /// # Returns
    /// - `Ok(CatalogItem)` - Item found
    /// - `Err(AppError::NotFound)` - `"<kind> not exist"` when the id is unknown
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn require(&self, kind: CatalogKind, id: i32) -> Result<CatalogItem, AppError> {
        let repo = CatalogRepository::new(self.db);

        repo.find_by_id(kind, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not exist", kind)))
    }
}
