use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::AthleteStatus;

/// Athlete profile. The image bytes are fetched on their own, only
/// `has_image` travels with the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub racing_since: NaiveDate,
    pub location: String,
    pub favorite_race: String,
    pub has_image: bool,
    #[sqlx(try_from = "String")]
    pub status: AthleteStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Athlete {
    /// Age in whole years as of today (local calendar)
    pub fn age(&self) -> i32 {
        age_on(self.dob, chrono::Local::now().date_naive())
    }
}

impl fmt::Display for Athlete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Whole years between `dob` and `today`, one less if the birthday has not
/// come round yet this year.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years - 1
    } else {
        years
    }
}
