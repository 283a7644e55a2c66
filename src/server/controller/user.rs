use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, OK_MSG},
        favorite::FavoritesResponseDto,
        user::UsersResponseDto,
    },
    server::{
        controller::extract::IdPath,
        error::AppError,
        service::{favorite::FavoriteService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user.
///
/// # Returns
/// - `200 OK` - `{msg, results}` with every user as `{id, email}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = UsersResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all_users().await?;

    Ok((
        StatusCode::OK,
        Json(UsersResponseDto {
            msg: OK_MSG.to_string(),
            results: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// List the favorites of a user.
///
/// # Returns
/// - `200 OK` - `{msg, result}` with the user's favorites
/// - `404 Not Found` - User does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/favorites/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Favorites of the user", body = FavoritesResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites_by_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let service = FavoriteService::new(&state.db, state.favorite_scope);

    let favorites = service.get_by_user(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(FavoritesResponseDto {
            msg: OK_MSG.to_string(),
            result: favorites.into_iter().map(|f| f.into_dto()).collect(),
        }),
    ))
}
