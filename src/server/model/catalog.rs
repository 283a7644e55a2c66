//! Catalog domain models.
//!
//! Characters, vehicles and planets are stored in separate tables with an identical
//! layout. The service layer handles them uniformly as a `CatalogItem` tagged with its
//! `CatalogKind`.

use std::fmt;

use entity::sea_orm_active_enums::CatalogKind as CatalogKindEntity;

use crate::model::catalog::CatalogItemDto;

/// Which catalog table an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Character,
    Vehicle,
    Planet,
}

impl CatalogKind {
    /// Lowercase singular name used in messages and serialized favorites.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Vehicle => "vehicle",
            Self::Planet => "planet",
        }
    }

    pub fn into_entity(self) -> CatalogKindEntity {
        match self {
            Self::Character => CatalogKindEntity::Character,
            Self::Vehicle => CatalogKindEntity::Vehicle,
            Self::Planet => CatalogKindEntity::Planet,
        }
    }

    pub fn from_entity(kind: CatalogKindEntity) -> Self {
        match kind {
            CatalogKindEntity::Character => Self::Character,
            CatalogKindEntity::Vehicle => Self::Vehicle,
            CatalogKindEntity::Planet => Self::Planet,
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A character, vehicle or planet.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub kind: CatalogKind,
    pub id: i32,
    pub name: String,
    pub url: String,
}

impl CatalogItem {
    pub fn from_character(entity: entity::character::Model) -> Self {
        Self {
            kind: CatalogKind::Character,
            id: entity.id,
            name: entity.name,
            url: entity.url,
        }
    }

    pub fn from_vehicle(entity: entity::vehicle::Model) -> Self {
        Self {
            kind: CatalogKind::Vehicle,
            id: entity.id,
            name: entity.name,
            url: entity.url,
        }
    }

    pub fn from_planet(entity: entity::planet::Model) -> Self {
        Self {
            kind: CatalogKind::Planet,
            id: entity.id,
            name: entity.name,
            url: entity.url,
        }
    }

    /// Converts the catalog item to a DTO for API responses.
    pub fn into_dto(self) -> CatalogItemDto {
        CatalogItemDto {
            id: self.id,
            name: self.name,
            url: self.url,
        }
    }
}
