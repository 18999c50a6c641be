//! Click counter store backends.
//!
//! Provides two [`crate::domain::repositories::ClickCounterStore`] implementations:
//! - [`RedisCounterStore`] - Production sorted-set backend shared across replicas
//! - [`MemoryCounterStore`] - Process-local fallback when Redis is not configured

mod memory_counter_store;
mod redis_counter_store;

pub use memory_counter_store::MemoryCounterStore;
pub use redis_counter_store::RedisCounterStore;
