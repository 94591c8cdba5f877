//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! on top of the per-test database pool provided by `#[sqlx::test]`, and
//! provides request/seeding helpers used across test files.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use stampa_api::auth::jwt::{generate_access_token, JwtConfig};
use stampa_api::auth::password::hash_password;
use stampa_api::config::ServerConfig;
use stampa_api::router::build_app_router;
use stampa_api::state::AppState;
use stampa_core::transform::{Transforms, Vector3};
use stampa_db::models::design::CreateDesign;
use stampa_db::models::product::CreateProduct;
use stampa_db::models::user::CreateUser;
use stampa_db::repositories::{DesignRepo, ProductRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: std::env::temp_dir()
            .join("stampa-test-uploads")
            .to_string_lossy()
            .into_owned(),
        max_upload_bytes: 1024 * 1024,
        public_base_url: "http://localhost:3000".to_string(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors production via [`build_app_router`].
pub async fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .expect("upload dir should be creatable");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a status and return the parsed body for further checks.
pub async fn expect_status(
    response: Response<Body>,
    expected: StatusCode,
) -> serde_json::Value {
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    json
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database and return its id plus a signed
/// access token.
pub async fn seed_user(pool: &PgPool, email: &str, role: &str) -> (i64, String) {
    let hashed = hash_password("test_password_123!").expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hashed,
            name: Some("Test User".to_string()),
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    let token = generate_access_token(user.id, role, &test_config().jwt)
        .expect("token generation should succeed");
    (user.id, token)
}

/// Create a product with the given colors and return its id.
pub async fn seed_product(pool: &PgPool, colors: &[&str]) -> i64 {
    let product = ProductRepo::create(
        pool,
        &CreateProduct {
            name: "Basic Tee".to_string(),
            category: "t-shirts".to_string(),
            base_model_url: "/models/tee-basic.glb".to_string(),
            available_colors: colors.iter().map(|c| c.to_string()).collect(),
            price_cents: 2999,
            thumbnail_url: Some("/thumbnails/tee-basic.jpg".to_string()),
            description: None,
        },
    )
    .await
    .expect("product creation should succeed");
    product.id
}

/// Stamp placement used by seeded designs: double width, unit height.
pub fn seed_transforms() -> Transforms {
    Transforms {
        position: Vector3 {
            x: 1.5,
            y: 0.0,
            z: -2.3,
        },
        rotation: Vector3::ZERO,
        scale: Vector3 {
            x: 2.0,
            y: 1.0,
            z: 1.0,
        },
    }
}

/// Create a pending design for `user_id` and return its id.
pub async fn seed_design(pool: &PgPool, user_id: i64, product_id: i64) -> i64 {
    let design = DesignRepo::create(
        pool,
        user_id,
        &CreateDesign {
            product_id,
            color: "white".to_string(),
            image_url: "https://cdn.example.com/stamps/a.png".to_string(),
            transforms: seed_transforms(),
        },
    )
    .await
    .expect("design creation should succeed");
    design.id
}
