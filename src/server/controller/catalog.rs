use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, OK_MSG},
        catalog::{CatalogItemResponseDto, CatalogListResponseDto},
    },
    server::{
        controller::extract::IdPath, error::AppError, model::catalog::CatalogKind,
        service::catalog::CatalogService, state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

async fn list(state: &AppState, kind: CatalogKind) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);

    let items = service.get_all(kind).await?;

    Ok((
        StatusCode::OK,
        Json(CatalogListResponseDto {
            msg: OK_MSG.to_string(),
            results: items.into_iter().map(|i| i.into_dto()).collect(),
        }),
    ))
}

async fn get_one(
    state: &AppState,
    kind: CatalogKind,
    id: i32,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);

    let item = service.require(kind, id).await?;

    Ok((
        StatusCode::OK,
        Json(CatalogItemResponseDto {
            msg: OK_MSG.to_string(),
            result: item.into_dto(),
        }),
    ))
}

/// List every character.
#[utoipa::path(
    get,
    path = "/characters",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All characters", body = CatalogListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, CatalogKind::Character).await
}

/// List every vehicle.
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All vehicles", body = CatalogListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_vehicles(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, CatalogKind::Vehicle).await
}

/// List every planet.
#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All planets", body = CatalogListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    list(&state, CatalogKind::Planet).await
}

/// Get a character by id.
///
/// # Returns
/// - `200 OK` - `{msg, result}` with the character
/// - `404 Not Found` - Character does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "The character", body = CatalogItemResponseDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    get_one(&state, CatalogKind::Character, id).await
}

/// Get a vehicle by id.
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle id")
    ),
    responses(
        (status = 200, description = "The vehicle", body = CatalogItemResponseDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    get_one(&state, CatalogKind::Vehicle, id).await
}

/// Get a planet by id.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "The planet", body = CatalogItemResponseDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    get_one(&state, CatalogKind::Planet, id).await
}
