use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::error::ProxyError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("listing proxy failed: {0}")]
    Listing(#[source] ProxyError),

    #[error("image proxy failed: {0}")]
    Image(#[source] ProxyError),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Listing(err) => {
                error!(error = %err, "API fetch error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Failed to fetch API data".to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::Image(err) => image_error_response(err),
        }
    }
}

fn image_error_response(err: ProxyError) -> Response {
    match err {
        ProxyError::MissingParameter(name) => {
            warn!(parameter = name, "image proxy request rejected");
            (
                StatusCode::BAD_REQUEST,
                format!("Missing \"{name}\" query parameter"),
            )
                .into_response()
        }
        ProxyError::InvalidParameter { field, message } => {
            warn!(parameter = field, reason = message, "image proxy request rejected");
            (
                StatusCode::BAD_REQUEST,
                format!("Invalid \"{field}\" query parameter: {message}"),
            )
                .into_response()
        }
        ProxyError::UpstreamStatus(code) => {
            warn!(status = code, "image upstream responded with error");
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, "Failed to fetch image").into_response()
        }
        err @ (ProxyError::Transport(_) | ProxyError::Decode(_)) => {
            error!(error = %err, "Error proxying image");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to proxy image").into_response()
        }
    }
}
