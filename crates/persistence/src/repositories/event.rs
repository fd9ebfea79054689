//! Event repository for database operations.

use sqlx::PgPool;

use domain::models::event::{CreateEventRequest, UpdateEventRequest};

use crate::entities::EventEntity;
use crate::metrics::QueryTimer;

/// Which slice of the event calendar to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFilter {
    /// Every event, newest first.
    All,
    /// Events flagged upcoming, soonest first.
    Upcoming,
    /// Events not flagged upcoming, newest first.
    Past,
}

/// Repository for event-related database operations.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Creates a new EventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List events for the given filter.
    pub async fn list(&self, filter: EventFilter) -> Result<Vec<EventEntity>, sqlx::Error> {
        let (name, sql) = match filter {
            EventFilter::All => (
                "list_events",
                "SELECT * FROM events ORDER BY event_date DESC, sort_order",
            ),
            EventFilter::Upcoming => (
                "list_upcoming_events",
                "SELECT * FROM events WHERE is_upcoming = true ORDER BY event_date ASC, sort_order",
            ),
            EventFilter::Past => (
                "list_past_events",
                "SELECT * FROM events WHERE is_upcoming = false ORDER BY event_date DESC, sort_order",
            ),
        };

        let timer = QueryTimer::new(name);
        let result = sqlx::query_as::<_, EventEntity>(sql)
            .fetch_all(&self.pool)
            .await;
        timer.observe(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_event_by_id");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            SELECT * FROM events WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Create a new event.
    pub async fn create(&self, req: &CreateEventRequest) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_event");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            INSERT INTO events (title, description, event_date, location, image_url,
                                is_upcoming, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.event_date)
        .bind(&req.location)
        .bind(&req.image_url)
        .bind(req.is_upcoming)
        .bind(req.sort_order)
        .fetch_one(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Update an event (partial update).
    /// Only provided fields are updated; None values are preserved.
    pub async fn update(
        &self,
        id: i32,
        req: &UpdateEventRequest,
    ) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_event");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                event_date = COALESCE($4, event_date),
                location = COALESCE($5, location),
                image_url = COALESCE($6, image_url),
                is_upcoming = COALESCE($7, is_upcoming),
                sort_order = COALESCE($8, sort_order),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.title.as_deref())
        .bind(req.description.as_deref())
        .bind(req.event_date)
        .bind(req.location.as_deref())
        .bind(req.image_url.as_deref())
        .bind(req.is_upcoming)
        .bind(req.sort_order)
        .fetch_optional(&self.pool)
        .await;
        timer.observe(result)
    }

    /// Delete an event. Returns false when no row matched.
    pub async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_event");
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        Ok(timer.observe(result)?.rows_affected() > 0)
    }
}
