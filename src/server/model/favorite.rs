//! Favorite domain models and parameters.

use std::str::FromStr;

use crate::{model::favorite::FavoriteDto, server::model::catalog::CatalogKind};

/// A user's favorite catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub kind: CatalogKind,
    pub entity_id: i32,
}

impl Favorite {
    /// Converts an entity model to a favorite domain model at the repository boundary.
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: CatalogKind::from_entity(entity.kind),
            entity_id: entity.entity_id,
        }
    }

    /// Converts the favorite domain model to a DTO for API responses.
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            kind: self.kind.as_str().to_string(),
            entity_id: self.entity_id,
        }
    }
}

/// How widely the duplicate check looks before a favorite is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteScope {
    /// An item favorited by any user cannot be favorited again by anyone.
    #[default]
    Global,
    /// Each user may favorite an item once.
    PerUser,
}

impl FromStr for FavoriteScope {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "user" | "per_user" | "per-user" => Ok(Self::PerUser),
            other => Err(format!("unknown favorite scope '{}'", other)),
        }
    }
}

/// Parameters for adding or removing a favorite.
#[derive(Debug, Clone, Copy)]
pub struct FavoriteParam {
    /// Catalog table the target lives in.
    pub kind: CatalogKind,
    /// Id of the target within its catalog table.
    pub entity_id: i32,
    /// User the favorite belongs to.
    pub user_id: i32,
}
