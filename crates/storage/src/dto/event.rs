use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::PublicationStatus;

/// Event joined with its author's username
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Option<Uuid>,
    pub author_username: Option<String>,
    pub date: NaiveDate,
    pub has_image: bool,
    #[sqlx(try_from = "String")]
    pub status: PublicationStatus,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
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

    pub date: NaiveDate,

    #[serde(default)]
    pub image: Option<Vec<u8>>,

    #[serde(default)]
    pub status: PublicationStatus,
}

/// Request payload for updating an existing event
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEventRequest {
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

    pub date: Option<NaiveDate>,

    #[serde(
        default,
        deserialize_with = "super::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Option<Vec<u8>>>,

    pub status: Option<PublicationStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateEventRequest {
        CreateEventRequest {
            title: "Club night".to_string(),
            content: "Meet at the paddock".to_string(),
            author_id: None,
            date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
            image: None,
            status: PublicationStatus::default(),
        }
    }

    #[test]
    fn test_content_limit_is_2000() {
        let ok = CreateEventRequest {
            content: "x".repeat(2000),
            ..valid_request()
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateEventRequest {
            content: "x".repeat(2001),
            ..valid_request()
        };
        let errors = too_long.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let req = CreateEventRequest {
            title: String::new(),
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_new_events_start_in_backlog() {
        assert_eq!(valid_request().status, PublicationStatus::Backlog);
    }

    #[test]
    fn test_update_tells_null_from_missing() {
        let missing: UpdateEventRequest = serde_json::from_str(r#"{"title": "New"}"#).unwrap();
        assert_eq!(missing.author_id, None);
        assert_eq!(missing.image, None);

        let cleared: UpdateEventRequest =
            serde_json::from_str(r#"{"author_id": null, "image": null}"#).unwrap();
        assert_eq!(cleared.author_id, Some(None));
        assert_eq!(cleared.image, Some(None));

        let id = Uuid::nil();
        let set: UpdateEventRequest =
            serde_json::from_str(&format!(r#"{{"author_id": "{id}"}}"#)).unwrap();
        assert_eq!(set.author_id, Some(Some(id)));
    }
}
