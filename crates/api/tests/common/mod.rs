//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as production)
//! and drives it with `tower::ServiceExt::oneshot`, so no TCP listener is
//! needed. Requests carry the `x-employee-code` header the SSO proxy would
//! inject in production.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use nippo_api::config::ServerConfig;
use nippo_api::router::build_app_router;
use nippo_api::state::AppState;
use nippo_core::roles::Role;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router using the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert an employee fixture.
pub async fn seed_employee(pool: &PgPool, code: &str, name: &str, role: Role) {
    sqlx::query("INSERT INTO employees (code, name, role) VALUES ($1, $2, $3)")
        .bind(code)
        .bind(name)
        .bind(role)
        .execute(pool)
        .await
        .unwrap();
}

/// Send a GET request as the given employee.
pub async fn get(app: Router, employee: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-employee-code", employee)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with no identity header.
pub async fn get_anonymous(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body as the given employee.
pub async fn post_json(
    app: Router,
    employee: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_json(app, "POST", employee, uri, body).await
}

/// Send a PUT request with a JSON body as the given employee.
pub async fn put_json(
    app: Router,
    employee: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_json(app, "PUT", employee, uri, body).await
}

/// Send a DELETE request as the given employee.
pub async fn delete(app: Router, employee: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("x-employee-code", employee)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(
    app: Router,
    method: &str,
    employee: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-employee-code", employee)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
