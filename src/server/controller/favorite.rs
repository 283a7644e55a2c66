use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DoneDto, ErrorDto},
        favorite::FavoriteRequestDto,
    },
    server::{
        controller::extract::IdPath,
        error::AppError,
        model::{catalog::CatalogKind, favorite::FavoriteParam},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Parses the `{user_id}` request body.
///
/// The body is read as JSON whatever the request's content type says, so clients that
/// omit the header are still served.
fn parse_body(body: &Bytes) -> Result<FavoriteRequestDto, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected favorite request body: {}", e);
        AppError::BadRequest("request body must be JSON with a numeric user_id".to_string())
    })
}

async fn add(
    state: &AppState,
    kind: CatalogKind,
    entity_id: i32,
    body: &Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_body(body)?;
    let service = FavoriteService::new(&state.db, state.favorite_scope);

    let item = service
        .add(FavoriteParam {
            kind,
            entity_id,
            user_id: payload.user_id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(DoneDto {
            done: format!("item added: {}", item.name),
        }),
    ))
}

async fn remove(
    state: &AppState,
    kind: CatalogKind,
    entity_id: i32,
    body: &Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_body(body)?;
    let service = FavoriteService::new(&state.db, state.favorite_scope);

    let item = service
        .remove(FavoriteParam {
            kind,
            entity_id,
            user_id: payload.user_id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(DoneDto {
            done: format!("item removed: {}", item.name),
        }),
    ))
}

/// Add a character to a user's favorites.
///
/// # Returns
/// - `200 OK` - `{"done": "item added: <name>"}`
/// - `400 Bad Request` - Body is not `{user_id}`
/// - `404 Not Found` - Character or user does not exist
/// - `409 Conflict` - Character is already a favorite
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/favorites/characters/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Character id")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite added", body = DoneDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 404, description = "Character or user not found", body = ErrorDto),
        (status = 409, description = "Character already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_character_favorite(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    add(&state, CatalogKind::Character, id, &body).await
}

/// Add a vehicle to a user's favorites.
#[utoipa::path(
    post,
    path = "/users/favorites/vehicles/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite added", body = DoneDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 404, description = "Vehicle or user not found", body = ErrorDto),
        (status = 409, description = "Vehicle already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_vehicle_favorite(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    add(&state, CatalogKind::Vehicle, id, &body).await
}

/// Add a planet to a user's favorites.
#[utoipa::path(
    post,
    path = "/users/favorites/planets/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet id")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite added", body = DoneDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 404, description = "Planet or user not found", body = ErrorDto),
        (status = 409, description = "Planet already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    add(&state, CatalogKind::Planet, id, &body).await
}

/// Remove a character from a user's favorites.
///
/// # Returns
/// - `200 OK` - `{"done": "item removed: <name>"}`
/// - `400 Bad Request` - Body is not `{user_id}`
/// - `404 Not Found` - Character, user or favorite does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/favorites/characters/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Character id")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite removed", body = DoneDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 404, description = "Character, user or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_character_favorite(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, CatalogKind::Character, id, &body).await
}

/// Remove a vehicle from a user's favorites.
#[utoipa::path(
    delete,
    path = "/users/favorites/vehicles/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite removed", body = DoneDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 404, description = "Vehicle, user or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_vehicle_favorite(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, CatalogKind::Vehicle, id, &body).await
}

/// Remove a planet from a user's favorites.
#[utoipa::path(
    delete,
    path = "/users/favorites/planets/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet id")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite removed", body = DoneDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 404, description = "Planet, user or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_planet_favorite(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, CatalogKind::Planet, id, &body).await
}
