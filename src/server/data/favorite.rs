//! Favorite data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    catalog::CatalogKind,
    favorite::{Favorite, FavoriteParam},
};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all favorites of a user ordered by id.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Finds a favorite pointing at (`kind`, `entity_id`).
    ///
    /// With `user_id` set only that user's favorite matches; with `None` the first
    /// favorite of any user is returned.
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - A matching favorite exists
    /// - `Ok(None)` - No matching favorite
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_for_target(
        &self,
        kind: CatalogKind,
        entity_id: i32,
        user_id: Option<i32>,
    ) -> Result<Option<Favorite>, DbErr> {
        let mut query = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::Kind.eq(kind.into_entity()))
            .filter(entity::favorite::Column::EntityId.eq(entity_id));

        if let Some(user_id) = user_id {
            query = query.filter(entity::favorite::Column::UserId.eq(user_id));
        }

        let entity = query
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Favorite::from_entity))
    }

    /// Inserts a favorite.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Database error, including unique or foreign key violations
    pub async fn create(&self, param: FavoriteParam) -> Result<Favorite, DbErr> {
        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            kind: ActiveValue::Set(param.kind.into_entity()),
            entity_id: ActiveValue::Set(param.entity_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Deletes a favorite by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite was deleted
    /// - `Ok(false)` - No favorite with that id existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
