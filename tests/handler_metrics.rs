mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use shortlinks::domain::entities::ClickScore;
use shortlinks::domain::repositories::ClickCounterStore;
use shortlinks::error::AppError;
use shortlinks::infrastructure::persistence::PgLinkRepository;
use shortlinks::routes::router;
use shortlinks::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Counter store whose backend is always down.
struct UnavailableCounterStore;

#[async_trait]
impl ClickCounterStore for UnavailableCounterStore {
    async fn increment(&self, _link_id: i64) -> Result<(), AppError> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }

    async fn top_n(&self, _n: usize) -> Result<Vec<ClickScore>, AppError> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }

    async fn score(&self, _link_id: i64) -> Result<u64, AppError> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

#[sqlx::test]
async fn test_metrics_empty(pool: PgPool) {
    let ctx = common::create_test_context(pool);
    let server = ctx.server();

    let response = server.get("/api/v1/metrics").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[sqlx::test]
async fn test_metrics_ordered_by_clicks(pool: PgPool) {
    let ctx = common::create_test_context(pool);
    for (id, clicks) in [(1, 2), (2, 7), (3, 4), (4, 4)] {
        for _ in 0..clicks {
            ctx.counter_store.increment(id).await.unwrap();
        }
    }
    let server = ctx.server();

    let response = server.get("/api/v1/metrics").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([
            { "shortLinkId": 2, "clicks": 7 },
            { "shortLinkId": 3, "clicks": 4 },
            { "shortLinkId": 4, "clicks": 4 },
            { "shortLinkId": 1, "clicks": 2 },
        ])
    );
}

#[sqlx::test]
async fn test_metrics_default_limit_is_50(pool: PgPool) {
    let ctx = common::create_test_context(pool);
    for id in 1..=60 {
        ctx.counter_store.increment(id).await.unwrap();
    }
    let server = ctx.server();

    let items = server.get("/api/v1/metrics").await.json::<Vec<Value>>();

    assert_eq!(items.len(), 50);
}

#[sqlx::test]
async fn test_metrics_limit_param(pool: PgPool) {
    let ctx = common::create_test_context(pool);
    for id in 1..=5 {
        ctx.counter_store.increment(id).await.unwrap();
    }
    let server = ctx.server();

    let items = server
        .get("/api/v1/metrics")
        .add_query_param("limit", 2)
        .await
        .json::<Vec<Value>>();
    assert_eq!(items.len(), 2);

    server
        .get("/api/v1/metrics")
        .add_query_param("limit", 0)
        .await
        .assert_status_bad_request();

    server
        .get("/api/v1/metrics")
        .add_query_param("limit", 5000)
        .await
        .assert_status_bad_request();
}

#[sqlx::test]
async fn test_metrics_repeatable(pool: PgPool) {
    let ctx = common::create_test_context(pool);
    for id in [9, 4, 6] {
        ctx.counter_store.increment(id).await.unwrap();
    }
    let server = ctx.server();

    let first = server.get("/api/v1/metrics").await.json::<Value>();
    let second = server.get("/api/v1/metrics").await.json::<Value>();

    assert_eq!(first, second);
}

#[sqlx::test]
async fn test_metrics_store_failure_is_internal_error(pool: PgPool) {
    let (tx, _rx) = mpsc::channel(10);
    let state = AppState::new(
        Arc::new(PgLinkRepository::new(Arc::new(pool))),
        Arc::new(UnavailableCounterStore),
        tx,
        50,
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/api/v1/metrics").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body, json!({ "message": "Internal server error" }));
    assert!(!body.to_string().contains("connection refused"));
}
