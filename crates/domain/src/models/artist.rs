//! Artist domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents a performing artist shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub instrument: String,
    pub country: String,
    pub bio: String,
    pub image_url: String,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request payload for creating an artist.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtistRequest {
    #[validate(
        length(min = 1, max = 200, message = "Name must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Instrument must be at most 100 characters"))]
    pub instrument: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: String,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub sort_order: i32,
}

/// Request payload for updating an artist (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtistRequest {
    #[validate(
        length(min = 1, max = 200, message = "Name must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "Instrument must be at most 100 characters"))]
    pub instrument: Option<String>,

    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: Option<String>,

    pub bio: Option<String>,

    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: Option<String>,

    pub featured: Option<bool>,

    pub sort_order: Option<i32>,
}
