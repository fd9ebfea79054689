//! Artist endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::artist::{CreateArtistRequest, UpdateArtistRequest};
use domain::models::{Artist, IdResponse, MessageResponse};
use persistence::repositories::ArtistRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminAuth;

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>, ApiError> {
    let repo = ArtistRepository::new(state.pool.clone());
    let artists = repo.list_all().await?;
    Ok(Json(artists.into_iter().map(Into::into).collect()))
}

/// GET /artists/featured
pub async fn list_featured_artists(
    State(state): State<AppState>,
) -> Result<Json<Vec<Artist>>, ApiError> {
    let repo = ArtistRepository::new(state.pool.clone());
    let artists = repo.list_featured().await?;
    Ok(Json(artists.into_iter().map(Into::into).collect()))
}

/// GET /artists/:id
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Artist>, ApiError> {
    let repo = ArtistRepository::new(state.pool.clone());
    let artist = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Artist not found".to_string()))?;
    Ok(Json(artist.into()))
}

/// POST /artists
pub async fn create_artist(
    State(state): State<AppState>,
    admin: AdminAuth,
    Json(request): Json<CreateArtistRequest>,
) -> Result<Json<IdResponse>, ApiError> {
    request.validate()?;

    let repo = ArtistRepository::new(state.pool.clone());
    let artist = repo.create(&request).await?;

    info!(
        artist_id = artist.id,
        name = %artist.name,
        admin = %admin.username,
        "Artist created"
    );

    Ok(Json(IdResponse { id: artist.id }))
}

/// PUT /artists/:id
pub async fn update_artist(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
    Json(request): Json<UpdateArtistRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate()?;

    let repo = ArtistRepository::new(state.pool.clone());
    repo.update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Artist not found".to_string()))?;

    info!(artist_id = id, admin = %admin.username, "Artist updated");

    Ok(Json(MessageResponse::new("Updated")))
}

/// DELETE /artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ArtistRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    info!(artist_id = id, deleted, admin = %admin.username, "Artist delete");

    Ok(Json(MessageResponse::new("Deleted")))
}
