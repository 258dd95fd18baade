//! HTTP-level integration tests for the vendor history endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, delete, get, post_json, put_json};
use sqlx::PgPool;

const VENDOR: &str = "vendor@acme.dev";

fn history_payload(title: &str, year: i32) -> serde_json::Value {
    serde_json::json!({
        "vendorEmail": VENDOR,
        "title": title,
        "description": "Seasonal staffing engagement",
        "clientEmail": "retail@bigbox.example",
        "year": year
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_history_stamped_completed(pool: PgPool) {
    create_user(pool.clone(), "Acme Talent", VENDOR, "Vendor").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/vendor/history", history_payload("Holiday Rush", 2024)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "Completed");
    assert_eq!(json["data"]["year"], 2024);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_non_vendor_owner(pool: PgPool) {
    // A user exists at the email, but is not vendor-typed.
    create_user(pool.clone(), "Acme Talent", VENDOR, "Client").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/vendor/history", history_payload("Nope", 2024)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_by_year_and_search(pool: PgPool) {
    create_user(pool.clone(), "Acme Talent", VENDOR, "Vendor").await;

    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/vendor/history", history_payload("Warehouse Expansion", 2023)).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/vendor/history", history_payload("Call Center Launch", 2024)).await;

    let app = common::build_test_app(pool.clone());
    let by_year = body_json(
        get(app, &format!("/api/vendor/history?vendorEmail={VENDOR}&year=2023")).await,
    )
    .await;
    assert_eq!(by_year["count"], 1);
    assert_eq!(by_year["data"][0]["title"], "Warehouse Expansion");

    // Search is case-insensitive and also matches the client email.
    let app = common::build_test_app(pool.clone());
    let by_search = body_json(
        get(
            app,
            &format!("/api/vendor/history?vendorEmail={VENDOR}&search=WAREHOUSE"),
        )
        .await,
    )
    .await;
    assert_eq!(by_search["count"], 1);

    let app = common::build_test_app(pool);
    let by_client = body_json(
        get(
            app,
            &format!("/api/vendor/history?vendorEmail={VENDOR}&search=bigbox"),
        )
        .await,
    )
    .await;
    assert_eq!(by_client["count"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_scoped_to_vendor(pool: PgPool) {
    create_user(pool.clone(), "Acme Talent", VENDOR, "Vendor").await;

    let app = common::build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/api/vendor/history", history_payload("Original", 2022)).await)
            .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/vendor/history/{id}"),
        serde_json::json!({"vendorEmail": "impostor@acme.dev", "title": "Hijacked"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/vendor/history/{id}"),
        serde_json::json!({"vendorEmail": VENDOR, "duration": "3 months"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["duration"], "3 months");
    assert_eq!(json["data"]["title"], "Original");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_scoped_to_vendor(pool: PgPool) {
    create_user(pool.clone(), "Acme Talent", VENDOR, "Vendor").await;

    let app = common::build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/api/vendor/history", history_payload("Old Job", 2020)).await)
            .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = delete(
        app,
        &format!("/api/vendor/history/{id}?vendorEmail=other@acme.dev"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/vendor/history/{id}?vendorEmail={VENDOR}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
