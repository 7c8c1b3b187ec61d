use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{athlete_image, event_image, race_image};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/athletes/:id/image", get(athlete_image))
        .route("/events/:id/image", get(event_image))
        .route("/races/:id/image", get(race_image))
}
