use askama::Template;
use storage::dto::home::HomeResponse;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub home: &'a HomeResponse,
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use storage::dto::{athlete::AthleteResponse, event::EventResponse, race::RaceResponse};
    use storage::models::{AthleteStatus, PublicationStatus};
    use uuid::Uuid;

    use super::*;

    fn sample_home() -> HomeResponse {
        HomeResponse {
            athletes: vec![AthleteResponse {
                athlete_id: Uuid::nil(),
                first_name: "Jim".to_string(),
                last_name: "Clark".to_string(),
                age: 32,
                racing_since: NaiveDate::from_ymd_opt(1956, 1, 1).unwrap(),
                location: "Duns".to_string(),
                favorite_race: "Indianapolis 500".to_string(),
                has_image: true,
                status: AthleteStatus::Active,
                created_at: Utc::now(),
            }],
            races: vec![RaceResponse {
                race_id: Uuid::nil(),
                title: "Spa <24h>".to_string(),
                content: "Wet start".to_string(),
                author_id: None,
                author_username: Some("editor".to_string()),
                athletes: "Clark, Hill".to_string(),
                date: NaiveDate::from_ymd_opt(1965, 6, 13).unwrap(),
                has_image: false,
                status: PublicationStatus::Published,
                created_at: Utc::now(),
            }],
            events: vec![EventResponse {
                event_id: Uuid::nil(),
                title: "Season launch".to_string(),
                content: "Drinks at the clubhouse".to_string(),
                author_id: None,
                author_username: None,
                date: NaiveDate::from_ymd_opt(1965, 3, 1).unwrap(),
                has_image: false,
                status: PublicationStatus::Published,
                created_at: Utc::now(),
            }],
        }
    }

    #[test]
    fn test_renders_all_sections() {
        let home = sample_home();
        let html = HomeTemplate { home: &home }.render().unwrap();

        assert!(html.contains("Jim Clark"));
        assert!(html.contains("Age 32"));
        assert!(html.contains("Season launch"));
        assert!(html.contains("1965-06-13"));
        assert!(html.contains("by editor"));
        assert!(html.contains(&format!("/athletes/{}/image", Uuid::nil())));
    }

    #[test]
    fn test_escapes_user_content() {
        let home = sample_home();
        let html = HomeTemplate { home: &home }.render().unwrap();

        assert!(html.contains("Spa &lt;24h&gt;"));
        assert!(!html.contains("Spa <24h>"));
    }

    #[test]
    fn test_empty_home_renders_placeholders() {
        let home = HomeResponse::default();
        let html = HomeTemplate { home: &home }.render().unwrap();

        assert!(html.contains("No races published yet"));
        assert!(!html.contains("<img"));
    }
}
