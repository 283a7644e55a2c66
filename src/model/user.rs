use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user. The password and active flag are never serialized.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct UsersResponseDto {
    pub msg: String,
    pub results: Vec<UserDto>,
}
