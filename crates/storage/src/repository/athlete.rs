use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteStatus};

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Up to `limit` active athletes, in whatever order the table yields them
    pub async fn list_active(&self, limit: i64) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT athlete_id, first_name, last_name, dob, racing_since, location,
                   favorite_race, (image IS NOT NULL) AS has_image, status,
                   created_at, updated_at, deleted_at
            FROM athletes
            WHERE status = $1
            LIMIT $2
            "#,
        )
        .bind(AthleteStatus::Active.as_str())
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT athlete_id, first_name, last_name, dob, racing_since, location,
                   favorite_race, (image IS NOT NULL) AS has_image, status,
                   created_at, updated_at, deleted_at
            FROM athletes
            WHERE athlete_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Raw image bytes; `None` when the athlete exists but has no image
    pub async fn image(&self, id: Uuid) -> Result<Option<Vec<u8>>> {
        let image = sqlx::query_scalar::<_, Option<Vec<u8>>>(
            "SELECT image FROM athletes WHERE athlete_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(image)
    }

    /// Create a new athlete
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        req.validate()?;

        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (first_name, last_name, dob, racing_since, location,
                                  favorite_race, image, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING athlete_id, first_name, last_name, dob, racing_since, location,
                      favorite_race, (image IS NOT NULL) AS has_image, status,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.dob)
        .bind(req.racing_since)
        .bind(&req.location)
        .bind(&req.favorite_race)
        .bind(req.image.as_deref())
        .bind(req.status.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Update an existing athlete, keeping the stored value for absent fields
    pub async fn update(&self, existing: &Athlete, req: &UpdateAthleteRequest) -> Result<Athlete> {
        req.validate()?;

        let first_name = req.first_name.as_ref().unwrap_or(&existing.first_name);
        let last_name = req.last_name.as_ref().unwrap_or(&existing.last_name);
        let dob = req.dob.unwrap_or(existing.dob);
        let racing_since = req.racing_since.unwrap_or(existing.racing_since);
        let location = req.location.as_ref().unwrap_or(&existing.location);
        let favorite_race = req.favorite_race.as_ref().unwrap_or(&existing.favorite_race);
        let status = req.status.unwrap_or(existing.status);

        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE athletes
            SET first_name = $2,
                last_name = $3,
                dob = $4,
                racing_since = $5,
                location = $6,
                favorite_race = $7,
                image = CASE WHEN $8 THEN $9 ELSE image END,
                status = $10
            WHERE athlete_id = $1
            RETURNING athlete_id, first_name, last_name, dob, racing_since, location,
                      favorite_race, (image IS NOT NULL) AS has_image, status,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(existing.athlete_id)
        .bind(first_name)
        .bind(last_name)
        .bind(dob)
        .bind(racing_since)
        .bind(location)
        .bind(favorite_race)
        .bind(req.image.is_some())
        .bind(req.image.as_ref().and_then(|image| image.as_deref()))
        .bind(status.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }
}
