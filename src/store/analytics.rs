use std::sync::Arc;

use super::EventStore;
use crate::models::analytics::{AnalyticsSummary, EventsOverTime};
use crate::utils::error::AppError;

/// The dashboard's bar chart shows at most this many locations.
pub const TOP_LOCATIONS_LIMIT: i64 = 5;

/// Runs the three read-only aggregates and reshapes them for the
/// dashboard. Every summary is computed fresh; nothing is cached.
#[derive(Clone)]
pub struct AnalyticsAggregator {
    store: Arc<dyn EventStore>,
}

impl AnalyticsAggregator {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// The three queries run concurrently and are order-independent; if
    /// any one fails the whole summary fails, never a partial result.
    pub async fn summary(&self) -> Result<AnalyticsSummary, AppError> {
        let (per_day, top_locations, categories) = tokio::try_join!(
            self.store.counts_by_day(),
            self.store.top_locations(TOP_LOCATIONS_LIMIT),
            self.store.category_breakdown(),
        )?;

        let mut dates = Vec::with_capacity(per_day.len());
        let mut counts = Vec::with_capacity(per_day.len());
        for bucket in per_day {
            dates.push(bucket.day);
            counts.push(bucket.count);
        }

        Ok(AnalyticsSummary {
            events_over_time: EventsOverTime { dates, counts },
            top_locations,
            categories,
        })
    }
}
