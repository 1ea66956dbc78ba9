mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use shortlink::api::handlers::stats_handler;

fn stats_app(state: shortlink::AppState) -> Router {
    Router::new()
        .route("/v1/{short_code}/stats", get(stats_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_stats_unknown_code_returns_404(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(stats_app(state)).unwrap();

    let response = server.get("/v1/doesnotexist/stats").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_stats_zero_visits(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(stats_app(state)).unwrap();

    common::create_test_link(&pool, "fresh1", "https://example.com/fresh").await;

    let response = server.get("/v1/fresh1/stats").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["short_code"], "fresh1");
    assert_eq!(body["original_url"], "https://example.com/fresh");
    assert_eq!(body["total_visits"], 0);
    assert!(body["created_at"].is_string());
}

#[sqlx::test]
async fn test_stats_counts_visits(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(stats_app(state)).unwrap();

    let link_id = common::create_test_link(&pool, "busy2", "https://example.com/busy").await;
    common::create_test_visit(&pool, link_id, "1.1.1.1").await;
    common::create_test_visit(&pool, link_id, "2.2.2.2").await;
    common::create_test_visit(&pool, link_id, "1.1.1.1").await;

    let response = server.get("/v1/busy2/stats").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total_visits"], 3);
}

#[sqlx::test]
async fn test_stats_counts_only_own_visits(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(stats_app(state)).unwrap();

    let first = common::create_test_link(&pool, "mine1", "https://example.com/mine").await;
    let other = common::create_test_link(&pool, "other1", "https://example.com/other").await;
    common::create_test_visit(&pool, first, "1.1.1.1").await;
    common::create_test_visit(&pool, other, "2.2.2.2").await;
    common::create_test_visit(&pool, other, "3.3.3.3").await;

    let response = server.get("/v1/mine1/stats").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["total_visits"], 1);
}
