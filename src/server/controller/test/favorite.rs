use entity::sea_orm_active_enums::CatalogKind;
use test_utils::factory::catalog::CatalogFactory;

use super::*;

fn user_body(user_id: i32) -> String {
    format!("{{\"user_id\":{}}}", user_id)
}

/// Tests adding a favorite and repeating the same call.
///
/// Expected: 200 "item added: <name>", then 409 with the duplicate message
#[tokio::test]
async fn adds_character_then_rejects_repeat() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::Global).await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = CatalogFactory::new(db, CatalogKind::Character)
        .name("Luke Skywalker")
        .build()
        .await?;
    let uri = format!("/users/favorites/characters/{}", character.id);

    let (status, body) = send(&app, "POST", &uri, Some(&user_body(user.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "done": "item added: Luke Skywalker" }));

    let (status, body) = send(&app, "POST", &uri, Some(&user_body(user.id))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        serde_json::json!({ "error": "character already exist in Favorites list" })
    );

    Ok(())
}

/// Tests the duplicate message for vehicles and planets.
///
/// Expected: 409 naming the kind of the target
#[tokio::test]
async fn duplicate_message_names_kind() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::Global).await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_favorite(db, user.id, &vehicle).await?;
    factory::create_favorite(db, user.id, &planet).await?;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/users/favorites/vehicles/{}", vehicle.id),
        Some(&user_body(user.id)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "vehicle already exist in Favorites list");

    let (status, body) = send(
        &app,
        "POST",
        &format!("/users/favorites/planets/{}", planet.id),
        Some(&user_body(user.id)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "planet already exist in Favorites list");

    Ok(())
}

/// Pins the global duplicate scope: the check looks at the target only.
///
/// A second user cannot favorite a character that another user already favorited.
///
/// Expected: 409 for the second user
#[tokio::test]
async fn global_scope_blocks_second_user() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::Global).await;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let uri = format!("/users/favorites/characters/{}", character.id);

    let (status, _) = send(&app, "POST", &uri, Some(&user_body(first.id))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "POST", &uri, Some(&user_body(second.id))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    Ok(())
}

/// Tests the per-user duplicate scope.
///
/// Expected: 200 for the second user, 409 when either repeats
#[tokio::test]
async fn per_user_scope_allows_second_user() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::PerUser).await;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let uri = format!("/users/favorites/characters/{}", character.id);

    let (status, _) = send(&app, "POST", &uri, Some(&user_body(first.id))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "POST", &uri, Some(&user_body(second.id))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "POST", &uri, Some(&user_body(second.id))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    Ok(())
}

/// Tests adding a favorite for a missing target or user.
///
/// Expected: 404 with the matching message, no favorite stored
#[tokio::test]
async fn add_rejects_missing_target_and_user() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::Global).await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let (status, body) = send(
        &app,
        "POST",
        "/users/favorites/planets/999",
        Some(&user_body(user.id)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "planet not exist");

    let (status, body) = send(
        &app,
        "POST",
        &format!("/users/favorites/planets/{}", planet.id),
        Some(&user_body(user.id + 50)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "user not exist");

    let (_, body) = send(&app, "GET", &format!("/users/favorites/{}", user.id), None).await;
    assert_eq!(body["result"], serde_json::json!([]));

    Ok(())
}

/// Tests malformed request bodies.
///
/// Expected: 400 with an `error` key for empty, non-JSON, and user_id-less bodies
#[tokio::test]
async fn rejects_bad_body() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::Global).await;
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let uri = format!("/users/favorites/vehicles/{}", vehicle.id);

    for (method, body) in [
        ("POST", None),
        ("POST", Some("not json")),
        ("POST", Some("{\"id\":1}")),
        ("DELETE", Some("{\"user_id\":\"one\"}")),
    ] {
        let (status, response) = send(&app, method, &uri, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {:?}", method, body);
        assert!(response["error"].is_string());
    }

    Ok(())
}

/// Tests that the body is parsed even without a JSON content type.
///
/// Expected: 200
#[tokio::test]
async fn accepts_body_without_content_type() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::Global).await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let request = Request::builder()
        .method("POST")
        .uri(format!("/users/favorites/vehicles/{}", vehicle.id))
        .body(Body::from(user_body(user.id)))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Round-trip: adding then removing a favorite restores the user's favorites.
///
/// Expected: favorites after DELETE equal favorites before POST
#[tokio::test]
async fn add_then_remove_round_trips() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::Global).await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::create_character(db).await?;
    let planet = CatalogFactory::new(db, CatalogKind::Planet)
        .name("Hoth")
        .build()
        .await?;
    factory::create_favorite(db, user.id, &existing).await?;

    let favorites_uri = format!("/users/favorites/{}", user.id);
    let planet_uri = format!("/users/favorites/planets/{}", planet.id);

    let (_, before) = send(&app, "GET", &favorites_uri, None).await;

    let (status, _) = send(&app, "POST", &planet_uri, Some(&user_body(user.id))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, during) = send(&app, "GET", &favorites_uri, None).await;
    assert_eq!(during["result"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, "DELETE", &planet_uri, Some(&user_body(user.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "done": "item removed: Hoth" }));

    let (_, after) = send(&app, "GET", &favorites_uri, None).await;
    assert_eq!(after["result"], before["result"]);

    Ok(())
}

/// Regression: removing a favorite that does not exist is a clean 404.
///
/// Character and user both exist, but the user never favorited the character.
///
/// Expected: 404 "favorite not exist"
#[tokio::test]
async fn removing_missing_favorite_is_not_found() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::Global).await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/users/favorites/characters/{}", character.id),
        Some(&user_body(user.id)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "favorite not exist" }));

    Ok(())
}

/// Tests removal with a missing target or user.
///
/// Expected: 404 naming the missing row
#[tokio::test]
async fn remove_rejects_missing_target_and_user() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::Global).await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let (status, body) = send(
        &app,
        "DELETE",
        "/users/favorites/vehicles/999",
        Some(&user_body(user.id)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "vehicle not exist");

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/users/favorites/vehicles/{}", vehicle.id),
        Some(&user_body(user.id + 9)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "user not exist");

    Ok(())
}

/// Tests that removing only deletes the requesting user's favorite.
///
/// Expected: 200 for the owner under per-user scope; the other user's favorite remains
#[tokio::test]
async fn remove_leaves_other_users_favorite() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::PerUser).await;
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_favorite(db, first.id, &planet).await?;
    factory::create_favorite(db, second.id, &planet).await?;

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/users/favorites/planets/{}", planet.id),
        Some(&user_body(first.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", &format!("/users/favorites/{}", second.id), None).await;
    assert_eq!(body["result"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", &format!("/users/favorites/{}", first.id), None).await;
    assert_eq!(body["result"], serde_json::json!([]));

    Ok(())
}

/// Tests a non-numeric target id on add and remove.
///
/// Expected: 400 with a JSON `error` body before the request body is read
#[tokio::test]
async fn rejects_unparseable_target_id() -> Result<(), DbErr> {
    let (test, app) = setup(FavoriteScope::Global).await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    for method in ["POST", "DELETE"] {
        let (status, body) = send(
            &app,
            method,
            "/users/favorites/planets/abc",
            Some(&user_body(user.id)),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", method);
        assert!(body["error"].is_string());
    }

    Ok(())
}
