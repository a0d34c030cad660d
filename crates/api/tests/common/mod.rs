#![allow(dead_code)]

use std::collections::HashMap;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use intake_api::auth::password::hash_password;
use intake_api::config::ServerConfig;
use intake_api::router::build_app_router;
use intake_api::state::AppState;
use intake_db::models::account::CreateAccount;
use intake_db::Database;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "test_password_123!";

/// A router over a freshly migrated SQLite database.
///
/// Holds the temp directory so the database file outlives the test body.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _dir: TempDir,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build a test `ServerConfig` through the same loader production uses.
pub fn test_config(database_url: &str, extra: &[(&str, &str)]) -> ServerConfig {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("DATABASE_URL".to_string(), database_url.to_string()),
        ("JWT_SECRET".to_string(), TEST_SECRET.to_string()),
        ("HOST".to_string(), "127.0.0.1".to_string()),
        ("PORT".to_string(), "0".to_string()),
    ]);
    for (k, v) in extra {
        vars.insert(k.to_string(), v.to_string());
    }
    ServerConfig::from_lookup(|var| vars.get(var).cloned()).expect("test config should load")
}

pub async fn build_test_app() -> TestApp {
    build_test_app_with(&[]).await
}

/// Build the full application router with extra configuration variables.
pub async fn build_test_app_with(extra: &[(&str, &str)]) -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let url = format!("sqlite://{}", dir.path().join("intake.db").display());
    let config = test_config(&url, extra);

    let database = Database::connect(&url, 2)
        .await
        .expect("sqlite connection should succeed");
    database.run_migrations().await.expect("migrations should apply");

    let state = AppState::new(database, config).expect("state should build");
    TestApp {
        router: build_app_router(state.clone()),
        state,
        _dir: dir,
    }
}

/// Insert an account directly through the credential store.
pub async fn create_account(state: &AppState, username: &str, password: &str) {
    let password_hash = hash_password(password).expect("hashing should succeed");
    state
        .accounts
        .create_if_absent(&CreateAccount {
            username: username.to_string(),
            password_hash,
            role: None,
        })
        .await
        .expect("account creation should succeed");
}

/// Create the default admin and log in, returning the bearer token.
pub async fn admin_token(test: &TestApp) -> String {
    create_account(&test.state, ADMIN_USERNAME, ADMIN_PASSWORD).await;
    let body = serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD });
    let response = post_json(test.app(), "/api/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let json = body_json(response).await;
    json["token"].as_str().expect("login returns a token").to_string()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

fn json_request(method: Method, uri: &str, body: &serde_json::Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn get_with_header(app: Router, uri: &str, authorization: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, &body, None)).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, &body, Some(token))).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, &body, None)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, &body, Some(token))).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, &body, None)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, None)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
