//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as production)
//! over a test database pool and provides request/response helpers driven
//! through `tower::ServiceExt` without a TCP listener.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::util::ServiceExt;

use assetflow_api::auth::jwt::{generate_access_token, JwtConfig};
use assetflow_api::config::ServerConfig;
use assetflow_api::router::build_app_router;
use assetflow_api::state::AppState;
use assetflow_core::roles::{ROLE_EMPLOYEE, ROLE_HR};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router over the given pool, mirroring the
/// production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint an access token for an HR principal.
pub fn hr_token(email: &str) -> String {
    generate_access_token(email, ROLE_HR, &test_config().jwt).unwrap()
}

/// Mint an access token for an employee principal.
pub fn employee_token(email: &str) -> String {
    generate_access_token(email, ROLE_EMPLOYEE, &test_config().jwt).unwrap()
}

/// Send a request through the router. `token` adds a Bearer header; `body`
/// is sent as JSON.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
