use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

use super::EventStore;
use crate::models::event::{Event, NewEvent};
use crate::utils::error::AppError;

/// Upper bound on rows returned by a listing, matching what the dashboard
/// table renders.
pub const LIST_LIMIT: i64 = 100;

/// Translates CRUD intents into warehouse operations. Owns the id policy
/// (random token per insert; never client-supplied) and date
/// normalization.
#[derive(Clone)]
pub struct EventGateway {
    store: Arc<dyn EventStore>,
}

impl EventGateway {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Assigns an id, normalizes the date to a UTC instant and persists
    /// the event. An unparseable date fails validation before any write.
    pub async fn create(&self, candidate: NewEvent) -> Result<Event, AppError> {
        let date = parse_event_date(candidate.date.trim())
            .ok_or_else(|| AppError::Validation("Invalid date format".to_string()))?;

        let description = candidate
            .description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        let event = Event {
            id: Uuid::new_v4().to_string(),
            name: candidate.name.trim().to_string(),
            location: candidate.location.trim().to_string(),
            date,
            category: candidate.category.trim().to_string(),
            description,
        };

        self.store.insert(&event).await?;
        tracing::info!(id = %event.id, "event stored");
        Ok(event)
    }

    pub async fn list(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.store.list(LIST_LIMIT).await?)
    }

    /// Waits for the warehouse to finish the delete. The affected-row
    /// count is not inspected, so an unknown id reports success.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.store.delete(id).await?;
        tracing::info!(id = %id, "event deleted");
        Ok(())
    }
}

/// Accepts RFC 3339 as well as the zone-less shapes produced by
/// `<input type="datetime-local">` and a bare calendar date. Zone-less
/// inputs are read as UTC.
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_datetime_local_input_as_utc() {
        let parsed = parse_event_date("2024-05-01T10:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_event_date("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn parses_seconds_and_fractions() {
        assert!(parse_event_date("2024-05-01T10:00:30").is_some());
        assert!(parse_event_date("2024-05-01T10:00:30.250").is_some());
    }

    #[test]
    fn parses_bare_date_as_midnight_utc() {
        let parsed = parse_event_date("2024-05-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_event_date("next tuesday").is_none());
        assert!(parse_event_date("").is_none());
        assert!(parse_event_date("2024-13-40").is_none());
    }
}
