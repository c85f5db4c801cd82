#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use plassets_api::config::ServerConfig;
use plassets_api::router::build_app_router;
use plassets_api::state::AppState;
use plassets_db::repositories::AssetRepo;

/// Build a test `ServerConfig` with safe defaults and an in-memory database.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over a fresh, migrated in-memory
/// database, using the same middleware stack as production.
pub async fn build_test_app() -> Router {
    let config = test_config();
    let pool = plassets_db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .unwrap();
    plassets_db::run_migrations(&pool).await.unwrap();

    let state = AppState {
        assets: AssetRepo::new(pool),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// POST a JSON body, optionally as the given `X-User`.
pub async fn post_json_as(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    user: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(user) = user {
        builder = builder.header("x-user", user);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// POST a JSON body as the admin user.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_json_as(app, uri, body, Some("admin")).await
}

/// POST a raw body as the admin user, without a `Content-Type` header.
pub async fn post_raw(app: &Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("x-user", "admin")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-user", "admin")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header("x-user", "admin")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The projection a freshly created asset without details is expected to have.
pub fn projection(name: &str, asset_type: &str, asset_class: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "type": asset_type,
        "class": asset_class,
        "details": {}
    })
}

/// Create one asset of each class, two apiece, in scrambled order.
pub async fn seed_fleet(app: &Router) -> Vec<serde_json::Value> {
    let fleet = [
        ("yagi2", "antenna", "yagi"),
        ("dove1", "satellite", "dove"),
        ("dish2", "antenna", "dish"),
        ("rapideye1", "satellite", "rapideye"),
        ("dove2", "satellite", "dove"),
        ("dish1", "antenna", "dish"),
        ("rapideye2", "satellite", "rapideye"),
        ("yagi1", "antenna", "yagi"),
    ];
    let mut created = Vec::new();
    for (name, asset_type, asset_class) in fleet {
        let body = projection(name, asset_type, asset_class);
        let response = post_json(app, "/assets/v1/", body.clone()).await;
        assert_eq!(response.status(), axum::http::StatusCode::OK, "{name}");
        created.push(body);
    }
    created
}
