//! Click event model for asynchronous click counting.

/// A resolved click waiting to be counted.
///
/// Created by the resolver after a successful lookup and handed to
/// [`crate::domain::click_worker::run_click_worker`] through a bounded
/// channel, so the redirect never waits on the counter store.
///
/// Only ids the registry just returned end up here, which is what keeps the
/// counter store consistent with the registry without a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub link_id: i64,
    pub code: String,
}

impl ClickEvent {
    pub fn new(link_id: i64, code: impl Into<String>) -> Self {
        Self {
            link_id,
            code: code.into(),
        }
    }
}
