use std::path::Path;

use axum::routing::{delete, get};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::create_cors_layer;
use crate::handlers::{create_event, delete_event, get_analytics, health_check, list_events};
use crate::state::AppState;

/// Assembles the API router. Unmatched paths fall through to the dashboard
/// assets, with `index.html` standing in for client-side deep links.
pub fn create_routes(state: AppState, frontend_dir: &str) -> Router {
    let dashboard = ServeDir::new(frontend_dir)
        .fallback(ServeFile::new(Path::new(frontend_dir).join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route("/events", get(list_events).post(create_event))
        .route("/events/:id", delete(delete_event))
        .route("/analytics", get(get_analytics))
        .fallback_service(dashboard)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}
