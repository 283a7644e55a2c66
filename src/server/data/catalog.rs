//! Catalog data repository.
//!
//! Dispatches on `CatalogKind` to the character, vehicle or planet table and returns
//! uniform `CatalogItem`s.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::catalog::{CatalogItem, CatalogKind};

/// Repository providing read access to the catalog tables.
pub struct CatalogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogRepository<'a> {
    /// Creates a new CatalogRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every item of one kind ordered by id.
    ///
    /// # Arguments
    /// - `kind` - Catalog table to read
    ///
    /// # Returns
    /// - `Ok(Vec<CatalogItem>)` - All items of the kind (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, DbErr> {
        let items = match kind {
            CatalogKind::Character => entity::prelude::Character::find()
                .order_by_asc(entity::character::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(CatalogItem::from_character)
                .collect(),
            CatalogKind::Vehicle => entity::prelude::Vehicle::find()
                .order_by_asc(entity::vehicle::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(CatalogItem::from_vehicle)
                .collect(),
            CatalogKind::Planet => entity::prelude::Planet::find()
                .order_by_asc(entity::planet::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(CatalogItem::from_planet)
                .collect(),
        };

        Ok(items)
    }

    /// Finds an item of one kind by id.
    ///
    /// # Returns
    /// - `Ok(Some(CatalogItem))` - Item found
    /// - `Ok(None)` - No item of that kind with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(
        &self,
        kind: CatalogKind,
        id: i32,
    ) -> Result<Option<CatalogItem>, DbErr> {
        let item = match kind {
            CatalogKind::Character => entity::prelude::Character::find_by_id(id)
                .one(self.db)
                .await?
                .map(CatalogItem::from_character),
            CatalogKind::Vehicle => entity::prelude::Vehicle::find_by_id(id)
                .one(self.db)
                .await?
                .map(CatalogItem::from_vehicle),
            CatalogKind::Planet => entity::prelude::Planet::find_by_id(id)
                .one(self.db)
                .await?
                .map(CatalogItem::from_planet),
        };

        Ok(item)
    }
}
