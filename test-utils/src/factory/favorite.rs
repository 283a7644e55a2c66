//! Favorite factory linking a user to a catalog entity.

use entity::sea_orm_active_enums::CatalogKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::catalog::CatalogRecord;

/// Factory for creating favorite rows.
///
/// The target does not have to exist, which lets tests build orphaned favorites.
pub struct FavoriteFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    kind: CatalogKind,
    entity_id: i32,
}

impl<'a> FavoriteFactory<'a> {
    /// Creates a factory for a favorite of `user_id` on (`kind`, `entity_id`).
    pub fn new(db: &'a DatabaseConnection, user_id: i32, kind: CatalogKind, entity_id: i32) -> Self {
        Self {
            db,
            user_id,
            kind,
            entity_id,
        }
    }

    /// Builds and inserts the favorite row.
    ///
    /// # Returns
    /// - `Ok(entity::favorite::Model)` - Created favorite
    /// - `Err(DbErr)` - Database error during insert (missing user, duplicate, ...)
    pub async fn build(self) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(self.kind),
            entity_id: ActiveValue::Set(self.entity_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a favorite of `user_id` on an existing catalog record.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    target: &CatalogRecord,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id, target.kind, target.id)
        .build()
        .await
}
