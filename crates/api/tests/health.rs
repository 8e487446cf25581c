//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::SqlitePool;

#[sqlx::test(migrator = "roomdesk_db::MIGRATOR")]
async fn health_check_returns_ok_with_json(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["dbHealthy"], true);
}

#[sqlx::test(migrator = "roomdesk_db::MIGRATOR")]
async fn unknown_route_returns_404(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrator = "roomdesk_db::MIGRATOR")]
async fn response_contains_x_request_id_header(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("response must carry an x-request-id header");

    // MakeRequestUuid produces a hyphenated UUID.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrator = "roomdesk_db::MIGRATOR")]
async fn api_routes_are_mounted_under_api_prefix(pool: SqlitePool) {
    let response = get(common::build_test_app(pool.clone()), "/api/rooms").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(pool), "/rooms").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
