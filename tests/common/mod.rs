#![allow(dead_code)]

use axum_test::TestServer;
use shortlinks::domain::click_event::ClickEvent;
use shortlinks::domain::repositories::ClickCounterStore;
use shortlinks::infrastructure::counter::MemoryCounterStore;
use shortlinks::infrastructure::persistence::PgLinkRepository;
use shortlinks::routes::router;
use shortlinks::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO short_links (code, original_url) VALUES ($1, $2) RETURNING id")
        .bind(code)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub struct TestContext {
    pub state: AppState,
    pub click_rx: mpsc::Receiver<ClickEvent>,
    pub counter_store: Arc<MemoryCounterStore>,
}

impl TestContext {
    /// Applies every queued click to the counter store, as the worker would.
    pub async fn drain_clicks(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.click_rx.try_recv() {
            self.counter_store.increment(event.link_id).await.unwrap();
            applied += 1;
        }
        applied
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(router(self.state.clone())).unwrap()
    }
}

pub fn create_test_context(pool: PgPool) -> TestContext {
    let (tx, rx) = mpsc::channel(100);
    let counter_store = Arc::new(MemoryCounterStore::new());
    let link_repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));

    let state = AppState::new(link_repository, counter_store.clone(), tx, 50);

    TestContext {
        state,
        click_rx: rx,
        counter_store,
    }
}
