use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    /// `character`, `vehicle` or `planet`
    pub kind: String,
    pub entity_id: i32,
}

/// Favorites of a single user. Kept under `result` for compatibility with existing clients.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct FavoritesResponseDto {
    pub msg: String,
    pub result: Vec<FavoriteDto>,
}

/// Body of the add and remove favorite endpoints.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct FavoriteRequestDto {
    pub user_id: i32,
}
