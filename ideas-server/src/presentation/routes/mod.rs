use axum::Router;

use super::AppState;

pub(crate) mod proxy;

pub(crate) fn router() -> Router<AppState> {
    Router::new().merge(proxy::router())
}
