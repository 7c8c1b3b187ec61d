use askama::Template;
use axum::{Json, extract::State, response::Html};
use storage::{Database, dto::home::HomeResponse};

use crate::error::WebResult;

use super::{services, template::HomeTemplate};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Rendered homepage", body = String, content_type = "text/html")
    ),
    tag = "home"
)]
pub async fn home_page(State(db): State<Database>) -> WebResult<Html<String>> {
    let home = services::load_home(db.pool()).await?;

    let page = HomeTemplate { home: &home }.render()?;

    Ok(Html(page))
}

#[utoipa::path(
    get,
    path = "/api/home",
    responses(
        (status = 200, description = "Homepage lists: active athletes, published races and events", body = HomeResponse)
    ),
    tag = "home"
)]
pub async fn home_json(State(db): State<Database>) -> WebResult<Json<HomeResponse>> {
    let home = services::load_home(db.pool()).await?;

    Ok(Json(home))
}
