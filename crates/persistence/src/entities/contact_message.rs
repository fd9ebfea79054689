//! Contact message entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::ContactMessage;

/// Database row mapping for the contact_messages table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageEntity {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessageEntity> for ContactMessage {
    fn from(entity: ContactMessageEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}
