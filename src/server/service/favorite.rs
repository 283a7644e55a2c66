//! Favorite service: adding, removing and listing a user's favorites.
//!
//! Add and remove are single operations parameterized by `CatalogKind`, so characters,
//! vehicles and planets share the same existence and duplicate rules.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::favorite::FavoriteRepository,
    error::AppError,
    model::{
        catalog::{CatalogItem, CatalogKind},
        favorite::{Favorite, FavoriteParam, FavoriteScope},
    },
    service::{catalog::CatalogService, user::UserService},
};

/// Service providing business logic for favorites.
pub struct FavoriteService<'a> {
    pub db: &'a DatabaseConnection,
    pub scope: FavoriteScope,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `scope` - Whether duplicates are checked across all users or per user
    pub fn new(db: &'a DatabaseConnection, scope: FavoriteScope) -> Self {
        Self { db, scope }
    }

    /// Lists the favorites of an existing user.
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites (empty if none)
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        UserService::new(self.db).require_user(user_id).await?;

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(favorites)
    }

    /// Adds a catalog item to a user's favorites.
    ///
    /// Checks run in order: the item exists, no conflicting favorite exists (scope
    /// dependent), the user exists. A unique-index violation from a concurrent insert
    /// is reported as the same conflict.
    ///
    /// # Returns
    /// - `Ok(CatalogItem)` - The favorited item
    /// - `Err(AppError::NotFound)` - Item or user does not exist
    /// - `Err(AppError::Conflict)` - The item is already a favorite
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(&self, param: FavoriteParam) -> Result<CatalogItem, AppError> {
        let item = CatalogService::new(self.db)
            .require(param.kind, param.entity_id)
            .await?;

        let repo = FavoriteRepository::new(self.db);

        let scoped_user = match self.scope {
            FavoriteScope::Global => None,
            FavoriteScope::PerUser => Some(param.user_id),
        };
        if repo
            .find_for_target(param.kind, param.entity_id, scoped_user)
            .await?
            .is_some()
        {
            tracing::debug!(
                "Rejected duplicate favorite of {} {} for user {}",
                param.kind,
                param.entity_id,
                param.user_id
            );
            return Err(duplicate(param.kind));
        }

        UserService::new(self.db)
            .require_user(param.user_id)
            .await?;

        let favorite = repo
            .create(param)
            .await
            .map_err(|e| insert_error(param.kind, e))?;

        tracing::info!(
            "User {} added {} '{}' as favorite {}",
            favorite.user_id,
            item.kind,
            item.name,
            favorite.id
        );

        Ok(item)
    }

    /// Removes a catalog item from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(CatalogItem)` - The item that was removed
    /// - `Err(AppError::NotFound)` - Item, user or favorite does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(&self, param: FavoriteParam) -> Result<CatalogItem, AppError> {
        let item = CatalogService::new(self.db)
            .require(param.kind, param.entity_id)
            .await?;

        UserService::new(self.db)
            .require_user(param.user_id)
            .await?;

        let repo = FavoriteRepository::new(self.db);

        let favorite = repo
            .find_for_target(param.kind, param.entity_id, Some(param.user_id))
            .await?
            .ok_or_else(favorite_not_found)?;

        // A concurrent removal may win the race between lookup and delete.
        if !repo.delete(favorite.id).await? {
            return Err(favorite_not_found());
        }

        tracing::info!(
            "User {} removed {} '{}' from favorites",
            param.user_id,
            item.kind,
            item.name
        );

        Ok(item)
    }
}

fn duplicate(kind: CatalogKind) -> AppError {
    AppError::Conflict(format!("{} already exist in Favorites list", kind))
}

fn favorite_not_found() -> AppError {
    AppError::NotFound("favorite not exist".to_string())
}

/// Maps a failed favorite insert, reporting a unique-index violation as a duplicate.
fn insert_error(kind: CatalogKind, err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate(kind),
        _ => AppError::from(err),
    }
}
