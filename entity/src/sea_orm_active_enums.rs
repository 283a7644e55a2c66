use sea_orm::entity::prelude::*;

/// Catalog table a favorite row points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum CatalogKind {
    #[sea_orm(string_value = "character")]
    Character,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
    #[sea_orm(string_value = "planet")]
    Planet,
}
