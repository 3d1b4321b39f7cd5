use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(with = "iso_instant")]
    pub date: DateTime<Utc>,
    pub category: String,
    pub description: Option<String>,
}

/// Candidate event as submitted by the dashboard form. All fields default
/// so an absent field reads as empty and fails the required-field check
/// instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewEvent {
    /// True when name, location, date and category are all non-empty after
    /// trimming.
    pub fn has_required_fields(&self) -> bool {
        !(self.name.trim().is_empty()
            || self.location.trim().is_empty()
            || self.date.trim().is_empty()
            || self.category.trim().is_empty())
    }
}

/// Event dates travel as ISO 8601 UTC with millisecond precision,
/// e.g. `2024-05-01T10:00:00.000Z`.
pub mod iso_instant {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
