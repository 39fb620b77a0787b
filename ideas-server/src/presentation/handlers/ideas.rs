use axum::{
    Json,
    extract::{RawQuery, State},
};
use serde_json::Value;

use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/ideas",
    tag = "ideas",
    params(
        ("page[number]" = Option<u32>, Query, description = "Page number (1-based)"),
        ("page[size]" = Option<u32>, Query, description = "Items per page"),
        ("append[]" = Option<Vec<String>>, Query, description = "Image variants to include, repeatable"),
        ("sort" = Option<String>, Query, description = "`-published_at` or `published_at`")
    ),
    responses(
        (status = 200, description = "Upstream listing, passed through verbatim", body = Value),
        (status = 500, description = "Upstream unavailable", body = ErrorBody)
    )
)]
pub(crate) async fn list_ideas(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Json<Value>> {
    let body = state
        .proxy
        .list_ideas(query.as_deref())
        .await
        .map_err(AppError::Listing)?;

    Ok(Json(body))
}
