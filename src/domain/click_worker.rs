//! Background worker that applies click events to the counter store.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ClickCounterStore;

/// Drains the click channel until every sender is dropped.
///
/// At most `concurrency` increments are in flight at once. Failed increments
/// are logged and counted in `clicks_failed_total`, then dropped: a lost click
/// is acceptable, a retry storm against a struggling backend is not.
///
/// Returns once the channel is closed and all in-flight increments have
/// finished, which is what graceful shutdown waits on.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    store: Arc<dyn ClickCounterStore>,
    concurrency: usize,
) {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut in_flight = JoinSet::new();

    while let Some(event) = rx.recv().await {
        let Ok(permit) = semaphore.clone().acquire_owned().await else {
            break;
        };

        let store = store.clone();
        in_flight.spawn(async move {
            let _permit = permit;
            record_click(store.as_ref(), event).await;
        });

        // Reap finished tasks so the set doesn't grow with traffic.
        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}

    info!("Click worker stopped");
}

async fn record_click(store: &dyn ClickCounterStore, event: ClickEvent) {
    match store.increment(event.link_id).await {
        Ok(()) => {
            metrics::counter!("clicks_recorded_total").increment(1);
            debug!(link_id = event.link_id, code = %event.code, "Click recorded");
        }
        Err(e) => {
            metrics::counter!("clicks_failed_total").increment(1);
            warn!(
                link_id = event.link_id,
                code = %event.code,
                error = %e,
                "Failed to record click"
            );
        }
    }
}
