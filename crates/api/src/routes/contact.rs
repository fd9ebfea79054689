//! Contact form endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::contact_message::{
    CreateContactMessageRequest, REQUIRED_FIELDS_MESSAGE, SUBMITTED_MESSAGE,
};
use domain::models::{ContactMessage, MessageResponse};
use persistence::repositories::ContactMessageRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AdminAuth, ClientRateLimit};

/// Submit the public contact form.
///
/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    client: ClientRateLimit,
    Json(request): Json<CreateContactMessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !request.has_required_fields() {
        return Err(ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }
    request.validate()?;

    let repo = ContactMessageRepository::new(state.pool.clone());
    let message = repo.create(&request).await?;

    info!(
        contact_message_id = message.id,
        client = %client.client,
        "Contact message received"
    );

    Ok(Json(MessageResponse::new(SUBMITTED_MESSAGE)))
}

/// GET /contact
pub async fn list_contact_messages(
    State(state): State<AppState>,
    _admin: AdminAuth,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let repo = ContactMessageRepository::new(state.pool.clone());
    let messages = repo.list_all().await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// PUT /contact/:id/read
pub async fn mark_contact_message_read(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ContactMessageRepository::new(state.pool.clone());
    if !repo.mark_read(id).await? {
        return Err(ApiError::NotFound("Message not found".to_string()));
    }

    info!(contact_message_id = id, admin = %admin.username, "Contact message marked as read");

    Ok(Json(MessageResponse::new("Marked as read")))
}

/// DELETE /contact/:id
pub async fn delete_contact_message(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ContactMessageRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    info!(contact_message_id = id, deleted, admin = %admin.username, "Contact message delete");

    Ok(Json(MessageResponse::new("Deleted")))
}
