//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LeaderboardService, LinkService, Resolver};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{ClickCounterStore, LinkRepository};

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub link_service: Arc<LinkService>,
    pub counter_store: Arc<dyn ClickCounterStore>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Number of entries returned by `/api/v1/metrics` when no `limit` is given.
    pub leaderboard_limit: usize,
}

impl AppState {
    /// Wires services around the given registry, counter store and click queue.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        counter_store: Arc<dyn ClickCounterStore>,
        click_sender: mpsc::Sender<ClickEvent>,
        leaderboard_limit: usize,
    ) -> Self {
        Self {
            resolver: Arc::new(Resolver::new(
                link_repository.clone(),
                click_sender.clone(),
            )),
            leaderboard_service: Arc::new(LeaderboardService::new(counter_store.clone())),
            link_service: Arc::new(LinkService::new(link_repository)),
            counter_store,
            click_sender,
            leaderboard_limit,
        }
    }
}
