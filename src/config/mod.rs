use std::env;

pub mod cors;

pub use cors::create_cors_layer;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Schema holding the events relation, the "dataset" of the warehouse.
    pub schema: String,
    pub table: String,
    pub frontend_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/eventboard".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(8080),
            schema: env::var("EVENTS_SCHEMA").unwrap_or_else(|_| "public".to_string()),
            table: env::var("EVENTS_TABLE").unwrap_or_else(|_| "events".to_string()),
            frontend_dir: env::var("FRONTEND_DIR").unwrap_or_else(|_| "frontend".to_string()),
        }
    }
}
