use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use sea_orm::DbErr;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{model::favorite::FavoriteScope, router, state::AppState};

mod favorite;

/// Builds a migrated in-memory database and the full router on top of it.
///
/// The returned context must outlive the router since it owns the connection pool.
async fn setup(scope: FavoriteScope) -> (TestContext, Router) {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let app = router::router().with_state(AppState::new(db, scope));

    (test, app)
}

/// Sends one request and returns the status with the body parsed as JSON.
///
/// Non-JSON bodies come back as `Value::String`.
async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, value)
}
