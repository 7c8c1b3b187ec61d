use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use storage::Database;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

use super::services;

fn image_response(image: Option<Vec<u8>>) -> WebResult<Response> {
    let bytes = image.ok_or(WebError::NotFound)?;
    let content_type = services::sniff_content_type(&bytes);

    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

#[utoipa::path(
    get,
    path = "/athletes/{id}/image",
    params(
        ("id" = Uuid, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Athlete image bytes"),
        (status = 404, description = "Athlete or image not found")
    ),
    tag = "media"
)]
pub async fn athlete_image(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    image_response(services::athlete_image(db.pool(), id).await?)
}

#[utoipa::path(
    get,
    path = "/events/{id}/image",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event image bytes"),
        (status = 404, description = "Event or image not found")
    ),
    tag = "media"
)]
pub async fn event_image(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    image_response(services::event_image(db.pool(), id).await?)
}

#[utoipa::path(
    get,
    path = "/races/{id}/image",
    params(
        ("id" = Uuid, Path, description = "Race ID")
    ),
    responses(
        (status = 200, description = "Race image bytes"),
        (status = 404, description = "Race or image not found")
    ),
    tag = "media"
)]
pub async fn race_image(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    image_response(services::race_image(db.pool(), id).await?)
}
