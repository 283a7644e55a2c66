use axum::{response::Html, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        catalog::{self, CATALOG_TAG},
        favorite::{self, FAVORITE_TAG},
        sitemap::{self, OPENAPI_PATH},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Holocron API", description = "Users, the catalog, and their favorites"),
    tags(
        (name = USER_TAG, description = "Users and their favorites"),
        (name = CATALOG_TAG, description = "Characters, vehicles and planets"),
        (name = FAVORITE_TAG, description = "Adding and removing favorites")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_all_users))
        .routes(routes!(user::get_favorites_by_user))
        .routes(routes!(catalog::get_all_characters))
        .routes(routes!(catalog::get_all_vehicles))
        .routes(routes!(catalog::get_all_planets))
        .routes(routes!(catalog::get_character))
        .routes(routes!(catalog::get_vehicle))
        .routes(routes!(catalog::get_planet))
        .routes(routes!(
            favorite::add_character_favorite,
            favorite::remove_character_favorite
        ))
        .routes(routes!(
            favorite::add_vehicle_favorite,
            favorite::remove_vehicle_favorite
        ))
        .routes(routes!(
            favorite::add_planet_favorite,
            favorite::remove_planet_favorite
        ))
        .split_for_parts();

    let sitemap_page = Html(sitemap::render(&api));

    router
        .route("/", get(move || std::future::ready(sitemap_page.clone())))
        .route(
            OPENAPI_PATH,
            get(move || std::future::ready(Json(api.clone()))),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
