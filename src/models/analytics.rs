use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Payload backing the dashboard's three charts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub events_over_time: EventsOverTime,
    pub top_locations: Vec<LocationCount>,
    pub categories: Vec<CategoryCount>,
}

/// Per-day counts as index-aligned parallel arrays, the shape the line
/// chart consumes directly.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventsOverTime {
    pub dates: Vec<String>,
    pub counts: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LocationCount {
    pub location: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// One UTC calendar-day bucket from the events-over-time aggregate.
#[derive(Debug, Clone, FromRow)]
pub struct DayCount {
    pub day: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_to_the_dashboard_shape() {
        let summary = AnalyticsSummary {
            events_over_time: EventsOverTime {
                dates: vec!["2024-05-01".to_string(), "2024-05-02".to_string()],
                counts: vec![2, 1],
            },
            top_locations: vec![LocationCount {
                location: "Warsaw".to_string(),
                count: 3,
            }],
            categories: vec![CategoryCount {
                category: "Tech".to_string(),
                count: 3,
            }],
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["eventsOverTime"]["dates"][0], "2024-05-01");
        assert_eq!(json["eventsOverTime"]["counts"][0], 2);
        assert_eq!(json["topLocations"][0]["location"], "Warsaw");
        assert_eq!(json["categories"][0]["category"], "Tech");
    }
}
