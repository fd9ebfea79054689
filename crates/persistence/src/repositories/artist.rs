//! Artist repository for database operations.

use sqlx::PgPool;

use domain::models::artist::{CreateArtistRequest, UpdateArtistRequest};

use crate::entities::ArtistEntity;
use crate::metrics::QueryTimer;

/// Repository for artist-related database operations.
#[derive(Clone)]
pub struct ArtistRepository {
    pool: PgPool,
}

impl ArtistRepository {
    /// Creates a new ArtistRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All artists ordered by sort order then name.
    pub async fn list_all(&self) -> Result<Vec<ArtistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_artists");
        let result = sqlx::query_as::<_, ArtistEntity>(
            r#"
            SELECT * FROM artists ORDER BY sort_order, name
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Featured artists only.
    pub async fn list_featured(&self) -> Result<Vec<ArtistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_featured_artists");
        let result = sqlx::query_as::<_, ArtistEntity>(
            r#"
            SELECT * FROM artists WHERE featured = true ORDER BY sort_order, name
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.observe(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ArtistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_artist_by_id");
        let result = sqlx::query_as::<_, ArtistEntity>(
            r#"
            SELECT * FROM artists WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Create a new artist.
    pub async fn create(&self, req: &CreateArtistRequest) -> Result<ArtistEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_artist");
        let result = sqlx::query_as::<_, ArtistEntity>(
            r#"
            INSERT INTO artists (name, instrument, country, bio, image_url, featured, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.instrument)
        .bind(&req.country)
        .bind(&req.bio)
        .bind(&req.image_url)
        .bind(req.featured)
        .bind(req.sort_order)
        .fetch_one(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Update an artist (partial update).
    /// Only provided fields are updated; None values are preserved.
    pub async fn update(
        &self,
        id: i32,
        req: &UpdateArtistRequest,
    ) -> Result<Option<ArtistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_artist");
        let result = sqlx::query_as::<_, ArtistEntity>(
            r#"
            UPDATE artists SET
                name = COALESCE($2, name),
                instrument = COALESCE($3, instrument),
                country = COALESCE($4, country),
                bio = COALESCE($5, bio),
                image_url = COALESCE($6, image_url),
                featured = COALESCE($7, featured),
                sort_order = COALESCE($8, sort_order),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.instrument.as_deref())
        .bind(req.country.as_deref())
        .bind(req.bio.as_deref())
        .bind(req.image_url.as_deref())
        .bind(req.featured)
        .bind(req.sort_order)
        .fetch_optional(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Delete an artist. Returns false when no row matched.
    pub async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_artist");
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        Ok(timer.observe(result)?.rows_affected() > 0)
    }
}
