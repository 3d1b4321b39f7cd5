use thiserror::Error;

/// Classified warehouse failure. The rest of the stack only ever sees this
/// type; vendor error internals stay behind this boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("warehouse connection failed")]
    Connection(#[source] sqlx::Error),

    #[error("warehouse query failed")]
    Query(#[source] sqlx::Error),

    #[error("warehouse returned an unreadable row")]
    Decode(#[source] sqlx::Error),
}

impl StoreError {
    /// Best-effort human-readable detail: the database server's own message
    /// when one exists, the source error text otherwise.
    pub fn details(&self) -> String {
        match self {
            StoreError::Query(sqlx::Error::Database(db)) => db.message().to_string(),
            StoreError::Connection(source)
            | StoreError::Query(source)
            | StoreError::Decode(source) => source.to_string(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(source: sqlx::Error) -> Self {
        match &source {
            sqlx::Error::Configuration(_)
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::Connection(source),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => StoreError::Decode(source),
            _ => StoreError::Query(source),
        }
    }
}
