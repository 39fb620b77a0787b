use axum::{
    extract::{Query, State},
    http::{HeaderValue, header::CONTENT_TYPE},
    response::Response,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct ImageQuery {
    /// Абсолютный адрес картинки.
    pub(crate) url: Option<String>,
}

#[utoipa::path(
    get,
    path = "/proxy-image",
    tag = "images",
    params(ImageQuery),
    responses(
        (status = 200, description = "Image bytes with upstream Content-Type"),
        (status = 400, description = "Missing or invalid `url`"),
        (status = 500, description = "Transport error")
    )
)]
pub(crate) async fn proxy_image(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> AppResult<Response> {
    let payload = state
        .proxy
        .fetch_image(query.url.as_deref())
        .await
        .map_err(AppError::Image)?;

    let mut response = Response::new(payload.body);
    if let Some(content_type) = payload
        .content_type
        .and_then(|value| HeaderValue::from_str(&value).ok())
    {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }

    Ok(response)
}
