use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Athlete, AthleteStatus};

/// Athlete as shown on public pages
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub racing_since: NaiveDate,
    pub location: String,
    pub favorite_race: String,
    pub has_image: bool,
    pub status: AthleteStatus,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "First name must be between 1 and 200 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Last name must be between 1 and 200 characters"
    ))]
    pub last_name: String,

    #[validate(custom(function = "validate_not_in_future"))]
    pub dob: NaiveDate,

    #[validate(custom(function = "validate_not_in_future"))]
    pub racing_since: NaiveDate,

    #[validate(length(min = 1, max = 100))]
    pub location: String,

    #[validate(length(min = 1, max = 200))]
    pub favorite_race: String,

    #[serde(default)]
    pub image: Option<Vec<u8>>,

    #[serde(default)]
    pub status: AthleteStatus,
}

/// Request payload for updating an existing athlete
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 200))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_not_in_future"))]
    pub dob: Option<NaiveDate>,

    #[validate(custom(function = "validate_not_in_future"))]
    pub racing_since: Option<NaiveDate>,

    #[validate(length(min = 1, max = 100))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub favorite_race: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Option<Vec<u8>>>,

    pub status: Option<AthleteStatus>,
}

pub(crate) fn validate_not_in_future(date: &NaiveDate) -> Result<(), validator::ValidationError> {
    if *date > chrono::Local::now().date_naive() {
        let mut error = validator::ValidationError::new("date_in_future");
        error.message = Some("Date cannot be in the future".into());
        return Err(error);
    }

    Ok(())
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            age: athlete.age(),
            athlete_id: athlete.athlete_id,
            first_name: athlete.first_name,
            last_name: athlete.last_name,
            racing_since: athlete.racing_since,
            location: athlete.location,
            favorite_race: athlete.favorite_race,
            has_image: athlete.has_image,
            status: athlete.status,
            created_at: athlete.created_at,
        }
    }
}
