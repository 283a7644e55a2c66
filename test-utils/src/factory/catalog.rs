//! Catalog factory for creating character, vehicle and planet entities.
//!
//! The three catalog tables share one layout, so a single factory parameterized by
//! `CatalogKind` covers all of them. Results are returned as a `CatalogRecord` that
//! remembers which table the row was written to.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::CatalogKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// A catalog row inserted by the factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub kind: CatalogKind,
    pub id: i32,
    pub name: String,
    pub url: String,
}

/// Factory for creating test catalog entities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::catalog::CatalogFactory;
///
/// let vehicle = CatalogFactory::new(&db, CatalogKind::Vehicle)
///     .name("X-wing")
///     .url("https://swapi.dev/api/starships/12/")
///     .build()
///     .await?;
/// ```
pub struct CatalogFactory<'a> {
    db: &'a DatabaseConnection,
    kind: CatalogKind,
    name: String,
    url: String,
}

impl<'a> CatalogFactory<'a> {
    /// Creates a new CatalogFactory with default values.
    ///
    /// Defaults:
    /// - name: `"<Kind> {id}"` where id is auto-incremented
    /// - url: `"https://swapi.dev/api/<kind>s/{id}/"`
    pub fn new(db: &'a DatabaseConnection, kind: CatalogKind) -> Self {
        let id = next_id();
        let (label, path) = match kind {
            CatalogKind::Character => ("Character", "people"),
            CatalogKind::Vehicle => ("Vehicle", "vehicles"),
            CatalogKind::Planet => ("Planet", "planets"),
        };

        Self {
            db,
            kind,
            name: format!("{} {}", label, id),
            url: format!("https://swapi.dev/api/{}/{}/", path, id),
        }
    }

    /// Sets the unique name of the entity.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the url of the entity.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builds and inserts the entity into the table matching its kind.
    ///
    /// # Returns
    /// - `Ok(CatalogRecord)` - Created catalog row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<CatalogRecord, DbErr> {
        let (id, name, url) = match self.kind {
            CatalogKind::Character => {
                let model = entity::character::ActiveModel {
                    name: ActiveValue::Set(self.name),
                    url: ActiveValue::Set(self.url),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
                (model.id, model.name, model.url)
            }
            CatalogKind::Vehicle => {
                let model = entity::vehicle::ActiveModel {
                    name: ActiveValue::Set(self.name),
                    url: ActiveValue::Set(self.url),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
                (model.id, model.name, model.url)
            }
            CatalogKind::Planet => {
                let model = entity::planet::ActiveModel {
                    name: ActiveValue::Set(self.name),
                    url: ActiveValue::Set(self.url),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
                (model.id, model.name, model.url)
            }
        };

        Ok(CatalogRecord {
            kind: self.kind,
            id,
            name,
            url,
        })
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<CatalogRecord, DbErr> {
    CatalogFactory::new(db, CatalogKind::Character).build().await
}

/// Creates a vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<CatalogRecord, DbErr> {
    CatalogFactory::new(db, CatalogKind::Vehicle).build().await
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<CatalogRecord, DbErr> {
    CatalogFactory::new(db, CatalogKind::Planet).build().await
}
