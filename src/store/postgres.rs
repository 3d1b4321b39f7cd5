use async_trait::async_trait;
use sqlx::PgPool;

use super::{EventStore, StoreError};
use crate::models::analytics::{CategoryCount, DayCount, LocationCount};
use crate::models::event::Event;

/// Warehouse adapter over a Postgres pool. The target relation is
/// configurable (schema + table), so its qualified, quoted name is built
/// once up front; row values always travel as bind parameters.
pub struct PgEventStore {
    pool: PgPool,
    relation: String,
}

impl PgEventStore {
    pub fn new(pool: PgPool, schema: &str, table: &str) -> Self {
        Self {
            pool,
            relation: format!("{}.{}", quote_ident(schema), quote_ident(table)),
        }
    }
}

fn quote_ident(raw: &str) -> String {
    format!("\"{}\"", raw.replace('"', "\"\""))
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn insert(&self, event: &Event) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO {} (id, name, location, date, category, description) \
             VALUES ($1, $2, $3, $4, $5, $6)",
            self.relation
        );
        sqlx::query(&sql)
            .bind(&event.id)
            .bind(&event.name)
            .bind(&event.location)
            .bind(event.date)
            .bind(&event.category)
            .bind(&event.description)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Event>, StoreError> {
        let sql = format!(
            "SELECT id, name, location, date, category, description FROM {} \
             ORDER BY date DESC LIMIT $1",
            self.relation
        );
        let events = sqlx::query_as::<_, Event>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.relation);
        // Affected-row count is not checked: deleting an unknown id is
        // indistinguishable from success.
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn counts_by_day(&self) -> Result<Vec<DayCount>, StoreError> {
        let sql = format!(
            "SELECT to_char(date AT TIME ZONE 'UTC', 'YYYY-MM-DD') AS day, \
             COUNT(*) AS count FROM {} GROUP BY day ORDER BY day",
            self.relation
        );
        let rows = sqlx::query_as::<_, DayCount>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn top_locations(&self, limit: i64) -> Result<Vec<LocationCount>, StoreError> {
        let sql = format!(
            "SELECT location, COUNT(*) AS count FROM {} \
             GROUP BY location ORDER BY count DESC LIMIT $1",
            self.relation
        );
        let rows = sqlx::query_as::<_, LocationCount>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn category_breakdown(&self) -> Result<Vec<CategoryCount>, StoreError> {
        let sql = format!(
            "SELECT category, COUNT(*) AS count FROM {} GROUP BY category",
            self.relation
        );
        let rows = sqlx::query_as::<_, CategoryCount>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote_ident("events"), "\"events\"");
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        assert_eq!(quote_ident("odd\"name"), "\"odd\"\"name\"");
    }
}
