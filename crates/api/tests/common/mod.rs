//! Shared helpers for the HTTP-level integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use archimatch_api::auth::jwt::JwtConfig;
use archimatch_api::config::ServerConfig;
use archimatch_api::router::build_app_router;
use archimatch_api::state::AppState;
use archimatch_storage::local::LocalStore;
use archimatch_storage::{StorageBackend, StorageConfig};

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` writing uploads to `upload_dir`.
pub fn test_config(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 60,
        },
        storage: StorageConfig {
            backend: StorageBackend::Local {
                dir: upload_dir,
                public_url: "http://localhost:3000/uploads".to_string(),
            },
        },
    }
}

/// A fresh upload directory per test app.
pub fn test_upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!("archimatch-uploads-{}", uuid::Uuid::new_v4()))
}

/// Build the full application router (same middleware stack as `main.rs`)
/// on top of `pool`, with a local object store in a temporary directory.
pub async fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_dir(pool, test_upload_dir()).await
}

pub async fn build_test_app_with_dir(pool: PgPool, upload_dir: PathBuf) -> Router {
    let config = test_config(upload_dir.clone());
    let store = LocalStore::new(upload_dir, "http://localhost:3000/uploads".to_string())
        .await
        .expect("local store should initialise");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store: Arc::new(store),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch(app: Router, uri: &str) -> Response {
    send(app, Method::PATCH, uri, None, None).await
}

pub async fn patch_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::PATCH, uri, Some(token), None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// POST a multipart form with a single `file` field.
pub async fn post_multipart(app: Router, uri: &str, filename: &str, content_type: &str, data: &[u8]) -> Response {
    let boundary = "archimatch-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n").as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A registered architect and its access token.
pub struct TestArchitect {
    pub id: String,
    pub token: String,
}

/// Register an architect through the API.
pub async fn register(app: Router, email: &str) -> TestArchitect {
    let response = post_json(
        app,
        "/api/v1/architects/register",
        json!({
            "email": email,
            "password": TEST_PASSWORD,
            "name": "Claire Martin",
            "company": "Atelier Martin",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    TestArchitect {
        id: json["data"]["architect"]["id"].as_str().unwrap().to_string(),
        token: json["data"]["access_token"].as_str().unwrap().to_string(),
    }
}

/// Create a room type and return its id.
pub async fn create_room_type(app: Router, token: &str, name: &str, parent_id: Option<&str>) -> String {
    let response = post_json_auth(
        app,
        "/api/v1/room-types",
        json!({ "name": name, "parent_id": parent_id }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_str().unwrap().to_string()
}

/// Create a client session for `architect_id` and return its id.
pub async fn create_session(app: Router, architect_id: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/client-sessions",
        json!({
            "architect_id": architect_id,
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@example.com",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_str().unwrap().to_string()
}

/// Create a curated photo linked to `room_type_ids` and return its id.
pub async fn create_photo(app: Router, token: &str, title: &str, room_type_ids: &[&str]) -> String {
    let response = post_json_auth(
        app,
        "/api/v1/inspiration-photos",
        json!({
            "image_url": format!("https://cdn.example.com/{title}.jpg"),
            "title": title,
            "room_type_ids": room_type_ids,
        }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_str().unwrap().to_string()
}
