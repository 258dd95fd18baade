//! HTTP-level integration tests for the project endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn project_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": "Warehouse staffing ramp-up",
        "location": "NY",
        "startDate": "2025-01-01",
        "status": "ongoing"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", project_payload("Alpha")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Alpha");
    assert!(json["data"]["id"].is_string());
    assert!(json["data"]["technologies"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_end_date_before_start_date_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let mut payload = project_payload("Alpha");
    payload["endDate"] = serde_json::json!("2024-12-31");
    let response = post_json(app, "/api/projects", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "End date cannot be before start date");

    // Nothing was written.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/projects").await).await;
    assert_eq!(list["count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_end_date_equal_to_start_date_is_accepted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut payload = project_payload("Same Day");
    payload["endDate"] = serde_json::json!("2025-01-01");
    let response = post_json(app, "/api/projects", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_created_project_listed_first(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/projects", project_payload("First")).await;

    let app = common::build_test_app(pool.clone());
    let mut payload = project_payload("Second");
    payload["endDate"] = serde_json::json!("2025-02-01");
    let created = body_json(post_json(app, "/api/projects", payload).await).await;
    let id = created["data"]["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/projects").await).await;
    assert_eq!(list["data"][0]["id"], id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_missing_location_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/projects",
        serde_json::json!({
            "name": "Alpha",
            "description": "d",
            "startDate": "2025-01-01",
            "status": "ongoing"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_validates_merged_dates(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/projects", project_payload("Alpha")).await).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    // start_date stays 2025-01-01; the patched end date lands before it.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/projects/{id}"),
        serde_json::json!({"endDate": "2024-06-01"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/projects/{id}"),
        serde_json::json!({"endDate": "2025-06-01"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_is_partial_merge(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/projects", project_payload("Alpha")).await).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let json = body_json(
        put_json(
            app,
            &format!("/api/projects/{id}"),
            serde_json::json!({"status": "completed"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["status"], "completed");
    assert_eq!(json["data"]["location"], "NY");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_status_filter_and_search(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/projects", project_payload("Harbor Build")).await;

    let app = common::build_test_app(pool.clone());
    let mut payload = project_payload("Office Fitout");
    payload["status"] = serde_json::json!("completed");
    post_json(app, "/api/projects", payload).await;

    let app = common::build_test_app(pool.clone());
    let by_status = body_json(get(app, "/api/projects?status=completed").await).await;
    assert_eq!(by_status["count"], 1);
    assert_eq!(by_status["data"][0]["name"], "Office Fitout");

    let app = common::build_test_app(pool);
    let by_search = body_json(get(app, "/api/projects?search=harbor").await).await;
    assert_eq!(by_search["count"], 1);
    assert_eq!(by_search["data"][0]["name"], "Harbor Build");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/projects", project_payload("Gone")).await).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
