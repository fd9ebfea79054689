//! Content block endpoint handlers.
//!
//! Reads are public and locale-scoped. Writes require an admin token.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use domain::models::content_block::{
    CreateContentBlockRequest, LocaleQuery, UpdateContentBlockRequest,
};
use domain::models::{ContentBlock, IdResponse, MessageResponse};
use persistence::repositories::ContentBlockRepository;
use shared::validation::{validate_content_key, validate_locale};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;
use crate::middleware::metrics::record_content_write;

fn not_found() -> ApiError {
    ApiError::NotFound("Content block not found".to_string())
}

/// List all blocks for a locale.
///
/// GET /content?locale=en
pub async fn list_content(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<Vec<ContentBlock>>, ApiError> {
    let repo = ContentBlockRepository::new(state.pool.clone());
    let blocks = repo.list_by_locale(query.locale()).await?;
    Ok(Json(blocks.into_iter().map(Into::into).collect()))
}

/// Get one block by key.
///
/// GET /content/:key?locale=en
pub async fn get_content_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<ContentBlock>, ApiError> {
    let repo = ContentBlockRepository::new(state.pool.clone());
    let block = repo
        .find_by_key(&key, query.locale())
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(block.into()))
}

/// Partially update a block by id.
///
/// PUT /content/:id
pub async fn update_content_by_id(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateContentBlockRequest>,
) -> Result<Json<ContentBlock>, ApiError> {
    patch.validate()?;
    let empty_patch = patch.is_empty();

    let repo = ContentBlockRepository::new(state.pool.clone());
    let block: ContentBlock = repo
        .update_by_id(id, &patch)
        .await?
        .ok_or_else(not_found)?
        .into();

    record_content_write("update");
    info!(
        content_id = block.id,
        key = %block.key,
        locale = %block.locale,
        admin = %admin.username,
        empty_patch,
        "Content block updated"
    );

    Ok(Json(block))
}

/// Update the block for `(key, locale)`, creating it when missing.
///
/// PUT /content/key/:key?locale=en
pub async fn upsert_content_by_key(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(key): Path<String>,
    Query(query): Query<LocaleQuery>,
    body: Option<Json<UpdateContentBlockRequest>>,
) -> Result<Json<ContentBlock>, ApiError> {
    let Some(Json(patch)) = body else {
        return Err(ApiError::Validation(
            "Request body must be a JSON object".to_string(),
        ));
    };

    let locale = query.locale();
    validate_content_key(&key)?;
    validate_locale(locale)?;
    patch.validate()?;

    let repo = ContentBlockRepository::new(state.pool.clone());
    let block: ContentBlock = repo.upsert_by_key(&key, locale, &patch).await?.into();

    record_content_write("upsert");
    info!(
        content_id = block.id,
        key = %block.key,
        locale = %block.locale,
        admin = %admin.username,
        "Content block upserted"
    );

    Ok(Json(block))
}

/// Create a block.
///
/// POST /content
pub async fn create_content(
    State(state): State<AppState>,
    admin: AdminAuth,
    Json(request): Json<CreateContentBlockRequest>,
) -> Result<Json<IdResponse>, ApiError> {
    request.validate()?;

    let repo = ContentBlockRepository::new(state.pool.clone());
    let block = repo.create(&request).await.map_err(|e| match ApiError::from(e) {
        ApiError::Conflict(_) => ApiError::Conflict(format!(
            "Content block '{}' already exists for locale '{}'",
            request.key, request.locale
        )),
        other => other,
    })?;

    record_content_write("create");
    info!(
        content_id = block.id,
        key = %block.key,
        locale = %block.locale,
        admin = %admin.username,
        "Content block created"
    );

    Ok(Json(IdResponse { id: block.id }))
}

/// Delete a block. Succeeds whether or not the id existed.
///
/// DELETE /content/:id
pub async fn delete_content(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ContentBlockRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    if deleted {
        record_content_write("delete");
    }
    info!(content_id = id, deleted, admin = %admin.username, "Content block delete");

    Ok(Json(MessageResponse::new("Deleted")))
}
