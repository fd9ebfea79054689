//! Event endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::event::{CreateEventRequest, UpdateEventRequest};
use domain::models::{Event, IdResponse, MessageResponse};
use persistence::repositories::{EventFilter, EventRepository};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

async fn list(state: &AppState, filter: EventFilter) -> Result<Json<Vec<Event>>, ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    let events = repo.list(filter).await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// GET /events
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    list(&state, EventFilter::All).await
}

/// GET /events/upcoming
pub async fn list_upcoming_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, ApiError> {
    list(&state, EventFilter::Upcoming).await
}

/// GET /events/past
pub async fn list_past_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, ApiError> {
    list(&state, EventFilter::Past).await
}

/// GET /events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Event>, ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    let event = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;
    Ok(Json(event.into()))
}

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    admin: AdminAuth,
    Json(request): Json<CreateEventRequest>,
) -> Result<Json<IdResponse>, ApiError> {
    request.validate()?;

    let repo = EventRepository::new(state.pool.clone());
    let event = repo.create(&request).await?;

    info!(
        event_id = event.id,
        title = %event.title,
        event_date = %event.event_date,
        admin = %admin.username,
        "Event created"
    );

    Ok(Json(IdResponse { id: event.id }))
}

/// PUT /events/:id
pub async fn update_event(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate()?;

    let repo = EventRepository::new(state.pool.clone());
    repo.update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    info!(event_id = id, admin = %admin.username, "Event updated");

    Ok(Json(MessageResponse::new("Updated")))
}

/// DELETE /events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    info!(event_id = id, deleted, admin = %admin.username, "Event delete");

    Ok(Json(MessageResponse::new("Deleted")))
}
