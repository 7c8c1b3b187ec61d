use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::race::{CreateRaceRequest, RaceResponse, UpdateRaceRequest};
use crate::error::{Result, StorageError};
use crate::models::{PublicationStatus, Race};

pub struct RaceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RaceRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Published races, latest race date first
    pub async fn list_published_by_date(&self, limit: i64) -> Result<Vec<RaceResponse>> {
        let races = sqlx::query_as::<_, RaceResponse>(
            r#"
            SELECT r.race_id, r.title, r.content, r.author_id,
                   u.username AS author_username, r.athletes, r.date,
                   (r.image IS NOT NULL) AS has_image, r.status, r.created_at
            FROM races r
            LEFT JOIN users u ON u.user_id = r.author_id
            WHERE r.status = $1
            ORDER BY r.date DESC
            LIMIT $2
            "#,
        )
        .bind(PublicationStatus::Published.as_str())
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(races)
    }

    /// Find race by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Race> {
        let race = sqlx::query_as::<_, Race>(
            r#"
            SELECT race_id, title, content, author_id, athletes, date,
                   (image IS NOT NULL) AS has_image, status,
                   created_at, updated_at, deleted_at
            FROM races
            WHERE race_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(race)
    }

    /// Raw image bytes; `None` when the race exists but has no image
    pub async fn image(&self, id: Uuid) -> Result<Option<Vec<u8>>> {
        let image = sqlx::query_scalar::<_, Option<Vec<u8>>>(
            "SELECT image FROM races WHERE race_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(image)
    }

    /// Create a new race
    pub async fn create(&self, req: &CreateRaceRequest) -> Result<Race> {
        req.validate()?;

        let race = sqlx::query_as::<_, Race>(
            r#"
            INSERT INTO races (title, content, author_id, athletes, date, image, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING race_id, title, content, author_id, athletes, date,
                      (image IS NOT NULL) AS has_image, status,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(req.author_id)
        .bind(&req.athletes)
        .bind(req.date)
        .bind(req.image.as_deref())
        .bind(req.status.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(race)
    }

    /// Update an existing race, keeping the stored value for absent fields
    pub async fn update(&self, existing: &Race, req: &UpdateRaceRequest) -> Result<Race> {
        req.validate()?;

        let title = req.title.as_ref().unwrap_or(&existing.title);
        let content = req.content.as_ref().unwrap_or(&existing.content);
        let author_id = req.author_id.unwrap_or(existing.author_id);
        let athletes = req.athletes.as_ref().unwrap_or(&existing.athletes);
        let date = req.date.unwrap_or(existing.date);
        let status = req.status.unwrap_or(existing.status);

        let race = sqlx::query_as::<_, Race>(
            r#"
            UPDATE races
            SET title = $2,
                content = $3,
                author_id = $4,
                athletes = $5,
                date = $6,
                image = CASE WHEN $7 THEN $8 ELSE image END,
                status = $9
            WHERE race_id = $1
            RETURNING race_id, title, content, author_id, athletes, date,
                      (image IS NOT NULL) AS has_image, status,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(existing.race_id)
        .bind(title)
        .bind(content)
        .bind(author_id)
        .bind(athletes)
        .bind(date)
        .bind(req.image.is_some())
        .bind(req.image.as_ref().and_then(|image| image.as_deref()))
        .bind(status.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(race)
    }
}
