use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A character, vehicle or planet.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CatalogItemDto {
    pub id: i32,
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct CatalogListResponseDto {
    pub msg: String,
    pub results: Vec<CatalogItemDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct CatalogItemResponseDto {
    pub msg: String,
    pub result: CatalogItemDto,
}
