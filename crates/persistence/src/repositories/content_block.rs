//! Content block repository for database operations.
//!
//! This is the only code that reads or writes `content_blocks`. "Not found"
//! is reported as `None`/`false`; only driver errors are returned as `Err`.

use sqlx::PgPool;

use domain::models::content_block::{CreateContentBlockRequest, UpdateContentBlockRequest};

use crate::entities::ContentBlockEntity;
use crate::metrics::QueryTimer;

/// Repository for localized content blocks.
#[derive(Clone)]
pub struct ContentBlockRepository {
    pool: PgPool,
}

impl ContentBlockRepository {
    /// Creates a new ContentBlockRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All blocks for a locale, ordered by sort order then key.
    pub async fn list_by_locale(
        &self,
        locale: &str,
    ) -> Result<Vec<ContentBlockEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_content_blocks_by_locale");
        let result = sqlx::query_as::<_, ContentBlockEntity>(
            r#"
            SELECT * FROM content_blocks
            WHERE locale = $1
            ORDER BY sort_order, key, id
            "#,
        )
        .bind(locale)
        .fetch_all(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Find a block by its natural key.
    pub async fn find_by_key(
        &self,
        key: &str,
        locale: &str,
    ) -> Result<Option<ContentBlockEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_content_block_by_key");
        let result = sqlx::query_as::<_, ContentBlockEntity>(
            r#"
            SELECT * FROM content_blocks WHERE key = $1 AND locale = $2
            "#,
        )
        .bind(key)
        .bind(locale)
        .fetch_optional(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Find a block by surrogate id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ContentBlockEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_content_block_by_id");
        let result = sqlx::query_as::<_, ContentBlockEntity>(
            r#"
            SELECT * FROM content_blocks WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Partially update a block by id.
    /// Supplied fields replace stored values, omitted ones are kept; never inserts.
    pub async fn update_by_id(
        &self,
        id: i32,
        patch: &UpdateContentBlockRequest,
    ) -> Result<Option<ContentBlockEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_content_block_by_id");
        let result = sqlx::query_as::<_, ContentBlockEntity>(
            r#"
            UPDATE content_blocks SET
                title = COALESCE($2, title),
                body = COALESCE($3, body),
                image_url = COALESCE($4, image_url),
                sort_order = COALESCE($5, sort_order),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.body.as_deref())
        .bind(patch.image_url.as_deref())
        .bind(patch.sort_order)
        .fetch_optional(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Update the block for `(key, locale)`, creating it if it does not exist.
    ///
    /// New rows take `""` for omitted text fields and `0` for an omitted sort
    /// order. Runs as a single statement so concurrent upserts of the same
    /// pair converge on one row.
    pub async fn upsert_by_key(
        &self,
        key: &str,
        locale: &str,
        patch: &UpdateContentBlockRequest,
    ) -> Result<ContentBlockEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_content_block_by_key");
        let result = sqlx::query_as::<_, ContentBlockEntity>(
            r#"
            INSERT INTO content_blocks (key, locale, title, body, image_url, sort_order, updated_at)
            VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, 0), NOW())
            ON CONFLICT (key, locale) DO UPDATE SET
                title = COALESCE($3, content_blocks.title),
                body = COALESCE($4, content_blocks.body),
                image_url = COALESCE($5, content_blocks.image_url),
                sort_order = COALESCE($6, content_blocks.sort_order),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(key)
        .bind(locale)
        .bind(patch.title.as_deref())
        .bind(patch.body.as_deref())
        .bind(patch.image_url.as_deref())
        .bind(patch.sort_order)
        .fetch_one(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Insert a new block. A duplicate `(key, locale)` fails with a unique violation.
    pub async fn create(
        &self,
        block: &CreateContentBlockRequest,
    ) -> Result<ContentBlockEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_content_block");
        let result = sqlx::query_as::<_, ContentBlockEntity>(
            r#"
            INSERT INTO content_blocks (key, locale, title, body, image_url, sort_order, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING *
            "#,
        )
        .bind(&block.key)
        .bind(&block.locale)
        .bind(&block.title)
        .bind(&block.body)
        .bind(&block.image_url)
        .bind(block.sort_order)
        .fetch_one(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Delete a block. Returns false when no row matched.
    pub async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_content_block");
        let result = sqlx::query(
            r#"
            DELETE FROM content_blocks WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        Ok(timer.observe(result)?.rows_affected() > 0)
    }
}
