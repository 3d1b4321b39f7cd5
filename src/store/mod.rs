use async_trait::async_trait;

use crate::models::analytics::{CategoryCount, DayCount, LocationCount};
use crate::models::event::Event;

pub mod analytics;
pub mod error;
pub mod gateway;
pub mod postgres;

pub use error::StoreError;

/// Warehouse operations the rest of the application depends on. The
/// concrete store is injected at startup so tests can substitute an
/// in-memory double.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persists one fully-formed event (id already assigned, date already
    /// normalized to UTC).
    async fn insert(&self, event: &Event) -> Result<(), StoreError>;

    /// Returns at most `limit` events, newest first by date.
    async fn list(&self, limit: i64) -> Result<Vec<Event>, StoreError>;

    /// Removes the event with the given id. Deleting an unknown id is not
    /// an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Event counts grouped by UTC calendar date, ascending.
    async fn counts_by_day(&self) -> Result<Vec<DayCount>, StoreError>;

    /// Event counts grouped by location, descending, at most `limit` rows.
    async fn top_locations(&self, limit: i64) -> Result<Vec<LocationCount>, StoreError>;

    /// Event counts grouped by category, every group, no defined order.
    async fn category_breakdown(&self) -> Result<Vec<CategoryCount>, StoreError>;
}
