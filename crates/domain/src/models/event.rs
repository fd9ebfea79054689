//! Event domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents a concert or other public event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub image_url: String,
    pub is_upcoming: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_is_upcoming() -> bool {
    true
}

/// Request payload for creating an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(
        length(min = 1, max = 300, message = "Title must be 1-300 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub event_date: DateTime<Utc>,

    #[serde(default)]
    #[validate(length(max = 300, message = "Location must be at most 300 characters"))]
    pub location: String,

    #[serde(default)]
    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: String,

    #[serde(default = "default_is_upcoming")]
    pub is_upcoming: bool,

    #[serde(default)]
    pub sort_order: i32,
}

/// Request payload for updating an event (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[validate(
        length(min = 1, max = 300, message = "Title must be 1-300 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: Option<String>,

    pub description: Option<String>,

    pub event_date: Option<DateTime<Utc>>,

    #[validate(length(max = 300, message = "Location must be at most 300 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: Option<String>,

    pub is_upcoming: Option<bool>,

    pub sort_order: Option<i32>,
}
