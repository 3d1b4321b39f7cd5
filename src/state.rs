use std::sync::Arc;

use crate::store::analytics::AnalyticsAggregator;
use crate::store::gateway::EventGateway;
use crate::store::EventStore;

/// Shared application state: the gateway and the aggregator, both reading
/// through one injected warehouse handle held for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub gateway: EventGateway,
    pub analytics: AnalyticsAggregator,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            gateway: EventGateway::new(Arc::clone(&store)),
            analytics: AnalyticsAggregator::new(store),
        }
    }
}
