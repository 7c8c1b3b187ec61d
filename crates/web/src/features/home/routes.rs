use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{home_json, home_page};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(home_page))
        .route("/api/home", get(home_json))
}
