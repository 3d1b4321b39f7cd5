use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use eventboard_server::models::analytics::{CategoryCount, DayCount, LocationCount};
use eventboard_server::models::event::Event;
use eventboard_server::store::{EventStore, StoreError};

/// In-memory stand-in for the warehouse, mirroring its listing and
/// aggregate semantics over a plain vector.
#[derive(Default)]
pub struct MemoryStore {
    events: Mutex<Vec<Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn insert(&self, event: &Event) -> Result<(), StoreError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Event>, StoreError> {
        let mut events = self.events();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        events.truncate(limit as usize);
        Ok(events)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.events.lock().unwrap().retain(|event| event.id != id);
        Ok(())
    }

    async fn counts_by_day(&self) -> Result<Vec<DayCount>, StoreError> {
        let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
        for event in self.events() {
            *buckets
                .entry(event.date.format("%Y-%m-%d").to_string())
                .or_insert(0) += 1;
        }
        Ok(buckets
            .into_iter()
            .map(|(day, count)| DayCount { day, count })
            .collect())
    }

    async fn top_locations(&self, limit: i64) -> Result<Vec<LocationCount>, StoreError> {
        let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
        for event in self.events() {
            *buckets.entry(event.location).or_insert(0) += 1;
        }
        let mut rows: Vec<LocationCount> = buckets
            .into_iter()
            .map(|(location, count)| LocationCount { location, count })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn category_breakdown(&self) -> Result<Vec<CategoryCount>, StoreError> {
        let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
        for event in self.events() {
            *buckets.entry(event.category).or_insert(0) += 1;
        }
        Ok(buckets
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect())
    }
}
