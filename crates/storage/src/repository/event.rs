use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::event::{CreateEventRequest, EventResponse, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::{Event, PublicationStatus};

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Most recently created published events, newest first
    pub async fn list_published_recent(&self, limit: i64) -> Result<Vec<EventResponse>> {
        let events = sqlx::query_as::<_, EventResponse>(
            r#"
            SELECT e.event_id, e.title, e.content, e.author_id,
                   u.username AS author_username, e.date,
                   (e.image IS NOT NULL) AS has_image, e.status, e.created_at
            FROM events e
            LEFT JOIN users u ON u.user_id = e.author_id
            WHERE e.status = $1
            ORDER BY e.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(PublicationStatus::Published.as_str())
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, title, content, author_id, date,
                   (image IS NOT NULL) AS has_image, status,
                   created_at, updated_at, deleted_at
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Raw image bytes; `None` when the event exists but has no image
    pub async fn image(&self, id: Uuid) -> Result<Option<Vec<u8>>> {
        let image = sqlx::query_scalar::<_, Option<Vec<u8>>>(
            "SELECT image FROM events WHERE event_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(image)
    }

    /// Create a new event
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        req.validate()?;

        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, content, author_id, date, image, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING event_id, title, content, author_id, date,
                      (image IS NOT NULL) AS has_image, status,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(req.author_id)
        .bind(req.date)
        .bind(req.image.as_deref())
        .bind(req.status.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    /// Update an existing event, keeping the stored value for absent fields
    pub async fn update(&self, existing: &Event, req: &UpdateEventRequest) -> Result<Event> {
        req.validate()?;

        let title = req.title.as_ref().unwrap_or(&existing.title);
        let content = req.content.as_ref().unwrap_or(&existing.content);
        let author_id = req.author_id.unwrap_or(existing.author_id);
        let date = req.date.unwrap_or(existing.date);
        let status = req.status.unwrap_or(existing.status);

        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = $2,
                content = $3,
                author_id = $4,
                date = $5,
                image = CASE WHEN $6 THEN $7 ELSE image END,
                status = $8
            WHERE event_id = $1
            RETURNING event_id, title, content, author_id, date,
                      (image IS NOT NULL) AS has_image, status,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(existing.event_id)
        .bind(title)
        .bind(content)
        .bind(author_id)
        .bind(date)
        .bind(req.image.is_some())
        .bind(req.image.as_ref().and_then(|image| image.as_deref()))
        .bind(status.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }
}
