//! HTTP-level integration tests for organization and asset endpoints:
//! tenancy enforcement, validation, and pagination.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, employee_token, hr_token, send};
use sqlx::PgPool;

/// Register an organization for `hr_email` and return its id.
async fn create_org(pool: &PgPool, hr_email: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = send(
        app,
        "POST",
        "/api/v1/organizations",
        Some(&hr_token(hr_email)),
        Some(serde_json::json!({"company_name": "Acme Corp"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create an asset under an organization and return its id.
async fn create_asset(pool: &PgPool, hr_email: &str, org: i64, name: &str, quantity: i32) -> i64 {
    let app = build_test_app(pool.clone());
    let response = send(
        app,
        "POST",
        &format!("/api/v1/organizations/{org}/assets"),
        Some(&hr_token(hr_email)),
        Some(serde_json::json!({"name": name, "quantity": quantity})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Organization registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_organization_defaults_seat_limit(pool: PgPool) {
    let app = build_test_app(pool);
    let response = send(
        app,
        "POST",
        "/api/v1/organizations",
        Some(&hr_token("hr@acme.example")),
        Some(serde_json::json!({"company_name": "Acme Corp"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["hr_email"], "hr@acme.example");
    assert_eq!(json["data"]["employee_limit"], 5);
    assert_eq!(json["data"]["current_employees"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_organization_takes_limit_from_package(pool: PgPool) {
    // Find the "Team" package (seeded by migration).
    let app = build_test_app(pool.clone());
    let response = send(app, "GET", "/api/v1/packages", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let packages = body_json(response).await;
    let team = packages["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "Team")
        .unwrap()
        .clone();

    let app = build_test_app(pool);
    let response = send(
        app,
        "POST",
        "/api/v1/organizations",
        Some(&hr_token("hr@acme.example")),
        Some(serde_json::json!({
            "company_name": "Acme Corp",
            "package_id": team["id"],
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["employee_limit"], team["employee_limit"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_organization_conflicts(pool: PgPool) {
    create_org(&pool, "hr@acme.example").await;

    let app = build_test_app(pool);
    let response = send(
        app,
        "POST",
        "/api/v1/organizations",
        Some(&hr_token("hr@acme.example")),
        Some(serde_json::json!({"company_name": "Acme Again"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_cannot_register_organization(pool: PgPool) {
    let app = build_test_app(pool);
    let response = send(
        app,
        "POST",
        "/api/v1/organizations",
        Some(&employee_token("worker@acme.example")),
        Some(serde_json::json!({"company_name": "Acme Corp"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Asset CRUD & tenancy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_asset_requires_token(pool: PgPool) {
    let org = create_org(&pool, "hr@acme.example").await;

    let app = build_test_app(pool);
    let response = send(
        app,
        "POST",
        &format!("/api/v1/organizations/{org}/assets"),
        None,
        Some(serde_json::json!({"name": "Laptop", "quantity": 3})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_foreign_organization_is_forbidden(pool: PgPool) {
    let org = create_org(&pool, "hr@acme.example").await;

    // A different verified principal may not read acme's inventory.
    let app = build_test_app(pool);
    let response = send(
        app,
        "GET",
        &format!("/api/v1/organizations/{org}/assets"),
        Some(&hr_token("hr@other.example")),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_asset_listing_pages_with_total_count(pool: PgPool) {
    let org = create_org(&pool, "hr@acme.example").await;
    for i in 0..5 {
        create_asset(&pool, "hr@acme.example", org, &format!("Asset {i}"), 1).await;
    }

    let app = build_test_app(pool);
    let response = send(
        app,
        "GET",
        &format!("/api/v1/organizations/{org}/assets?limit=2&offset=0"),
        Some(&hr_token("hr@acme.example")),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["total_count"], 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_asset_rejects_negative_quantity(pool: PgPool) {
    let org = create_org(&pool, "hr@acme.example").await;

    let app = build_test_app(pool);
    let response = send(
        app,
        "POST",
        &format!("/api/v1/organizations/{org}/assets"),
        Some(&hr_token("hr@acme.example")),
        Some(serde_json::json!({"name": "Laptop", "quantity": -1})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_asset_rejects_unknown_type(pool: PgPool) {
    let org = create_org(&pool, "hr@acme.example").await;

    let app = build_test_app(pool);
    let response = send(
        app,
        "POST",
        &format!("/api/v1/organizations/{org}/assets"),
        Some(&hr_token("hr@acme.example")),
        Some(serde_json::json!({"name": "Laptop", "quantity": 1, "asset_type": "leased"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_asset(pool: PgPool) {
    let org = create_org(&pool, "hr@acme.example").await;
    let asset = create_asset(&pool, "hr@acme.example", org, "Laptop", 3).await;

    let app = build_test_app(pool.clone());
    let response = send(
        app,
        "PUT",
        &format!("/api/v1/assets/{asset}"),
        Some(&hr_token("hr@acme.example")),
        Some(serde_json::json!({"name": "Laptop 14\"", "quantity": 7})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Laptop 14\"");
    assert_eq!(json["data"]["quantity"], 7);

    let app = build_test_app(pool.clone());
    let response = send(
        app,
        "DELETE",
        &format!("/api/v1/assets/{asset}"),
        Some(&hr_token("hr@acme.example")),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent update hits 404.
    let app = build_test_app(pool);
    let response = send(
        app,
        "PUT",
        &format!("/api/v1/assets/{asset}"),
        Some(&hr_token("hr@acme.example")),
        Some(serde_json::json!({"name": "Ghost"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_hr_cannot_mutate_asset(pool: PgPool) {
    let org = create_org(&pool, "hr@acme.example").await;
    let asset = create_asset(&pool, "hr@acme.example", org, "Laptop", 3).await;

    let app = build_test_app(pool);
    let response = send(
        app,
        "DELETE",
        &format!("/api/v1/assets/{asset}"),
        Some(&hr_token("hr@other.example")),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
