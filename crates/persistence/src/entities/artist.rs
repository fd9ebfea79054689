//! Artist entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Artist;

/// Database row mapping for the artists table.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistEntity {
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

impl From<ArtistEntity> for Artist {
    fn from(entity: ArtistEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            instrument: entity.instrument,
            country: entity.country,
            bio: entity.bio,
            image_url: entity.image_url,
            featured: entity.featured,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
