use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::models::analytics::AnalyticsSummary;
use crate::models::event::{Event, NewEvent};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{CreatedResponse, MessageResponse};

#[derive(Serialize)]
pub struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Json<HealthPayload> {
    Json(HealthPayload {
        status: "ok",
        service: "eventboard-api",
    })
}

/// POST /events. Required fields are checked here, before anything touches
/// the warehouse, so a rejected candidate never causes a partial insert.
pub async fn create_event(
    State(state): State<AppState>,
    Json(candidate): Json<NewEvent>,
) -> Result<Json<CreatedResponse>, AppError> {
    if !candidate.has_required_fields() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let event = state.gateway.create(candidate).await?;

    Ok(Json(CreatedResponse {
        message: "Event added successfully".to_string(),
        id: event.id,
    }))
}

/// GET /events. Raw stored rows, newest first, capped at 100.
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.gateway.list().await?;
    Ok(Json(events))
}

/// DELETE /events/:id.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::Validation("Missing ID".to_string()));
    }

    state.gateway.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Event deleted successfully".to_string(),
    }))
}

/// GET /analytics.
pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let summary = state.analytics.summary().await?;
    Ok(Json(summary))
}
