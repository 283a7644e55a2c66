//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It replaces any process-wide globals: the
//! database pool and the favorite duplicate policy are injected here and nowhere else.

use sea_orm::DatabaseConnection;

use crate::server::model::favorite::FavoriteScope;

/// Application state containing shared resources and dependencies.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Scope of the duplicate check performed before a favorite is added.
    pub favorite_scope: FavoriteScope,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `favorite_scope` - Duplicate policy for new favorites
    pub fn new(db: DatabaseConnection, favorite_scope: FavoriteScope) -> Self {
        Self { db, favorite_scope }
    }
}
