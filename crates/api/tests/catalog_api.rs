//! HTTP-level tests for room types, questions and the default catalog.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_room_type, delete_auth, get_auth, post_auth, post_json_auth, put_json_auth, register,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn room_types_are_isolated_per_architect(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let a = register(app.clone(), "a@atelier.fr").await;
    let b = register(app.clone(), "b@atelier.fr").await;

    create_room_type(app.clone(), &a.token, "Salon", None).await;
    create_room_type(app.clone(), &b.token, "Cuisine", None).await;

    let response = get_auth(app, "/api/v1/room-types", &a.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|rt| rt["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Salon"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn room_type_names_are_unique_case_insensitively(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let a = register(app.clone(), "a@atelier.fr").await;
    let salon = create_room_type(app.clone(), &a.token, "Salon", None).await;

    let clash = post_json_auth(app.clone(), "/api/v1/room-types", json!({ "name": "  salon " }), &a.token).await;
    assert_eq!(clash.status(), StatusCode::CONFLICT);

    // Free again once the first one is soft-deleted.
    let deleted = delete_auth(app.clone(), &format!("/api/v1/room-types/{salon}"), &a.token).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let again = post_json_auth(app, "/api/v1/room-types", json!({ "name": "salon" }), &a.token).await;
    assert_eq!(again.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hierarchy_is_limited_to_two_levels(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let a = register(app.clone(), "a@atelier.fr").await;
    let salon = create_room_type(app.clone(), &a.token, "Salon", None).await;
    let zone = create_room_type(app.clone(), &a.token, "Canapé zone", Some(&salon)).await;

    let too_deep = post_json_auth(
        app.clone(),
        "/api/v1/room-types",
        json!({ "name": "Coin lecture", "parent_id": zone }),
        &a.token,
    )
    .await;
    assert_eq!(too_deep.status(), StatusCode::BAD_REQUEST);

    let tree = get_auth(app, "/api/v1/room-types?include_children=true", &a.token).await;
    let json = body_json(tree).await;
    let roots = json["data"].as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["name"], "Salon");
    assert_eq!(roots[0]["children"][0]["name"], "Canapé zone");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_room_types_cannot_be_touched(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let a = register(app.clone(), "a@atelier.fr").await;
    let b = register(app.clone(), "b@atelier.fr").await;
    let salon = create_room_type(app.clone(), &a.token, "Salon", None).await;

    let update = put_json_auth(
        app.clone(),
        &format!("/api/v1/room-types/{salon}"),
        json!({ "name": "Pirate" }),
        &b.token,
    )
    .await;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let question = post_json_auth(
        app,
        "/api/v1/questions",
        json!({ "question_text": "Style ?", "question_type": "text", "room_type_id": salon }),
        &b.token,
    )
    .await;
    assert_eq!(question.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn question_options_follow_the_type(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let a = register(app.clone(), "a@atelier.fr").await;
    let salon = create_room_type(app.clone(), &a.token, "Salon", None).await;

    let missing_options = post_json_auth(
        app.clone(),
        "/api/v1/questions",
        json!({ "text": "Quel style ?", "type": "select", "room_type_id": salon }),
        &a.token,
    )
    .await;
    assert_eq!(missing_options.status(), StatusCode::BAD_REQUEST);

    let bad_type = post_json_auth(
        app.clone(),
        "/api/v1/questions",
        json!({ "text": "Quel style ?", "type": "slider", "room_type_id": salon }),
        &a.token,
    )
    .await;
    assert_eq!(bad_type.status(), StatusCode::BAD_REQUEST);

    let created = post_json_auth(
        app.clone(),
        "/api/v1/questions",
        json!({
            "text": "Quel style ?",
            "type": "select",
            "room_type_id": salon,
            "options": ["Moderne", " Classique ", ""],
        }),
        &a.token,
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let question = body_json(created).await;
    assert_eq!(question["data"]["options"], json!(["Moderne", "Classique"]));
    assert_eq!(question["data"]["required"], true);

    let listed = get_auth(app, &format!("/api/v1/questions?room_type_id={salon}"), &a.token).await;
    let json = body_json(listed).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["room_type"]["name"], "Salon");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn default_catalog_is_seeded_once(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let a = register(app.clone(), "a@atelier.fr").await;

    let seeded = post_auth(app.clone(), "/api/v1/room-types/seed-default", &a.token).await;
    assert_eq!(seeded.status(), StatusCode::CREATED);
    let json = body_json(seeded).await;
    assert!(!json["data"].as_array().unwrap().is_empty());

    let again = post_auth(app, "/api/v1/room-types/seed-default", &a.token).await;
    assert_eq!(again.status(), StatusCode::CONFLICT);
}
