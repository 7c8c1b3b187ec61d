use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::PublicationStatus;

/// Race joined with its author's username
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResponse {
    pub race_id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Option<Uuid>,
    pub author_username: Option<String>,
    pub athletes: String,
    pub date: NaiveDate,
    pub has_image: bool,
    #[sqlx(try_from = "String")]
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new race
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRaceRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 2000,
        message = "Content must be between 1 and 2000 characters"
    ))]
    pub content: String,

    pub author_id: Option<Uuid>,

    #[validate(length(min = 1, max = 2000))]
    pub athletes: String,

    pub date: NaiveDate,

    #[serde(default)]
    pub image: Option<Vec<u8>>,

    #[serde(default)]
    pub status: PublicationStatus,
}

/// Request payload for updating an existing race
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRaceRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 2000))]
    pub content: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_id: Option<Option<Uuid>>,

    #[validate(length(min = 1, max = 2000))]
    pub athletes: Option<String>,

    pub date: Option<NaiveDate>,

    #[serde(
        default,
        deserialize_with = "super::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Option<Vec<u8>>>,

    pub status: Option<PublicationStatus>,
}
