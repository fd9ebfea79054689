//! Contact message repository for database operations.

use sqlx::PgPool;

use domain::models::contact_message::CreateContactMessageRequest;

use crate::entities::ContactMessageEntity;
use crate::metrics::QueryTimer;

/// Repository for contact form submissions.
#[derive(Clone)]
pub struct ContactMessageRepository {
    pool: PgPool,
}

impl ContactMessageRepository {
    /// Creates a new ContactMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a submission. Text fields are stored trimmed.
    pub async fn create(
        &self,
        req: &CreateContactMessageRequest,
    ) -> Result<ContactMessageEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_contact_message");
        let result = sqlx::query_as::<_, ContactMessageEntity>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(req.name.trim())
        .bind(req.email.trim())
        .bind(req.subject.trim())
        .bind(req.message.trim())
        .fetch_one(&self.pool)
        .await;
        timer.observe(result)
    }

    /// All messages, newest first.
    pub async fn list_all(&self) -> Result<Vec<ContactMessageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_contact_messages");
        let result = sqlx::query_as::<_, ContactMessageEntity>(
            r#"
            SELECT * FROM contact_messages ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.observe(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ContactMessageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_contact_message_by_id");
        let result = sqlx::query_as::<_, ContactMessageEntity>(
            r#"
            SELECT * FROM contact_messages WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Flag a message as read. Returns false when no row matched.
    pub async fn mark_read(&self, id: i32) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("mark_contact_message_read");
        let result = sqlx::query("UPDATE contact_messages SET is_read = true WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        Ok(timer.observe(result)?.rows_affected() > 0)
    }

    /// Delete a message. Returns false when no row matched.
    pub async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_contact_message");
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        Ok(timer.observe(result)?.rows_affected() > 0)
    }
}
