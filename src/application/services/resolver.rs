//! Short code resolution.

use std::sync::Arc;

use axum::http::StatusCode;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// HTTP status used for every redirect (301 Moved Permanently).
///
/// Browsers and CDNs may cache a 301 and skip the resolver on repeat visits,
/// so the click count undercounts returning clients.
pub const REDIRECT_STATUS: StatusCode = StatusCode::MOVED_PERMANENTLY;

/// Where to send the caller for a resolved code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub link_id: i64,
    pub status: StatusCode,
    pub location: String,
}

impl RedirectTarget {
    pub fn permanent(link_id: i64, location: String) -> Self {
        Self {
            link_id,
            status: REDIRECT_STATUS,
            location,
        }
    }
}

/// Resolves short codes and schedules click counting.
///
/// The counter update is handed to the click worker with `try_send` and is
/// never awaited: a full or closed queue drops the click, it never delays or
/// fails the redirect.
pub struct Resolver {
    link_repository: Arc<dyn LinkRepository>,
    click_sender: mpsc::Sender<ClickEvent>,
}

impl Resolver {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            link_repository,
            click_sender,
        }
    }

    /// Looks up `code` and returns its redirect target.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code has no mapping (no click is
    /// recorded). Returns [`AppError::Lookup`] if the registry fails.
    pub async fn resolve(&self, code: &str) -> Result<RedirectTarget, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        debug!(code = %code, link_id = link.id, "Resolved short code");

        self.record_click(ClickEvent::new(link.id, code));

        Ok(RedirectTarget::permanent(link.id, link.original_url))
    }

    fn record_click(&self, event: ClickEvent) {
        match self.click_sender.try_send(event) {
            Ok(()) => metrics::counter!("clicks_enqueued_total").increment(1),
            Err(TrySendError::Full(event)) => {
                metrics::counter!("clicks_dropped_total").increment(1);
                warn!(link_id = event.link_id, "Click queue full, dropping click");
            }
            Err(TrySendError::Closed(event)) => {
                metrics::counter!("clicks_dropped_total").increment(1);
                warn!(link_id = event.link_id, "Click queue closed, dropping click");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(id: i64, code: &str, url: &str) -> Link {
        Link::new(id, code.to_string(), url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_resolve_hit_returns_permanent_redirect() {
        let mut mock_repo = MockLinkRepository::new();
        let link = create_test_link(10, "abc", "https://example.com/a?b=c");
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "abc")
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let (tx, mut rx) = mpsc::channel(10);
        let resolver = Resolver::new(Arc::new(mock_repo), tx);

        let target = resolver.resolve("abc").await.unwrap();

        assert_eq!(target.status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(target.location, "https://example.com/a?b=c");
        assert_eq!(target.link_id, 10);

        let event = rx.try_recv().unwrap();
        assert_eq!(event, ClickEvent::new(10, "abc"));
    }

    #[tokio::test]
    async fn test_resolve_miss_records_nothing() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let (tx, mut rx) = mpsc::channel(10);
        let resolver = Resolver::new(Arc::new(mock_repo), tx);

        let result = resolver.resolve("nope").await;

        assert!(matches!(result, Err(AppError::NotFound)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_resolve_registry_failure_is_lookup_error() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Err(AppError::Lookup("connection reset".to_string())));

        let (tx, mut rx) = mpsc::channel(10);
        let resolver = Resolver::new(Arc::new(mock_repo), tx);

        let result = resolver.resolve("abc").await;

        assert!(matches!(result, Err(AppError::Lookup(_))));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_resolve_succeeds_when_queue_full() {
        let mut mock_repo = MockLinkRepository::new();
        let link = create_test_link(1, "full", "https://example.com");
        mock_repo
            .expect_find_by_code()
            .times(2)
            .returning(move |_| Ok(Some(link.clone())));

        let (tx, mut rx) = mpsc::channel(1);
        let resolver = Resolver::new(Arc::new(mock_repo), tx);

        assert!(resolver.resolve("full").await.is_ok());
        // Queue is now full; the second click is dropped but the redirect holds.
        let second = resolver.resolve("full").await.unwrap();
        assert_eq!(second.location, "https://example.com");

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_resolve_succeeds_when_queue_closed() {
        let mut mock_repo = MockLinkRepository::new();
        let link = create_test_link(1, "closed", "https://example.com");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let resolver = Resolver::new(Arc::new(mock_repo), tx);

        let target = resolver.resolve("closed").await.unwrap();
        assert_eq!(target.status, REDIRECT_STATUS);
    }
}
