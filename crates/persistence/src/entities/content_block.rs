//! Content block entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::ContentBlock;

/// Database row mapping for the content_blocks table.
#[derive(Debug, Clone, FromRow)]
pub struct ContentBlockEntity {
    pub id: i32,
    pub key: String,
    pub locale: String,
    pub title: String,
    pub body: String,
    pub image_url: String,
    pub sort_order: i32,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ContentBlockEntity> for ContentBlock {
    fn from(entity: ContentBlockEntity) -> Self {
        Self {
            id: entity.id,
            key: entity.key,
            title: entity.title,
            body: entity.body,
            image_url: entity.image_url,
            sort_order: entity.sort_order,
            locale: entity.locale,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_block_entity_to_domain() {
        let entity = ContentBlockEntity {
            id: 9,
            key: "founder_bio".to_string(),
            locale: "zh".to_string(),
            title: "创始人".to_string(),
            body: "...".to_string(),
            image_url: "/img/founder.jpg".to_string(),
            sort_order: 2,
            updated_at: Some(Utc::now()),
        };
        let block: ContentBlock = entity.clone().into();

        assert_eq!(block.id, 9);
        assert_eq!(block.key, "founder_bio");
        assert_eq!(block.locale, "zh");
        assert_eq!(block.title, entity.title);
        assert_eq!(block.image_url, "/img/founder.jpg");
        assert_eq!(block.sort_order, 2);
        assert_eq!(block.updated_at, entity.updated_at);
    }
}
